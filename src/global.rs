//! Process-wide state shared between the route controller and the UI shell

use once_cell::sync::Lazy;
use std::env;
use std::sync::{Mutex, RwLock};

pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// External resource-availability signal. True means the on-chain
/// resources backing the swap and faucet pages could not be found.
/// Owned by the external resource watcher; the route controller only
/// reads it.
static RESOURCES_NOT_FOUND: Lazy<RwLock<bool>> = Lazy::new(|| RwLock::new(false));

/// Current navigation path, owned by the navigation shell.
static CURRENT_PATH: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new("/".to_string()));

pub fn is_resources_not_found() -> bool {
    RESOURCES_NOT_FOUND
        .read()
        .map(|flag| *flag)
        .unwrap_or(false)
}

pub fn set_resources_not_found(value: bool) {
    if let Ok(mut flag) = RESOURCES_NOT_FOUND.write() {
        *flag = value;
    }
}

pub fn current_path() -> String {
    CURRENT_PATH
        .read()
        .map(|path| path.clone())
        .unwrap_or_else(|_| "/".to_string())
}

/// Navigation primitive. Replaces the current path; rendering reacts on
/// the next cycle.
pub fn navigate_to(path: &str) {
    if let Ok(mut current) = CURRENT_PATH.write() {
        *current = path.to_string();
    }
}

/// Check if debug routes mode is enabled via command line args
pub fn is_debug_routes_enabled() -> bool {
    if let Ok(args) = CMD_ARGS.lock() {
        args.contains(&"--debug-routes".to_string())
    } else {
        false
    }
}

/// Check if debug summary mode is enabled via command line args
pub fn is_debug_summary_enabled() -> bool {
    if let Ok(args) = CMD_ARGS.lock() {
        args.contains(&"--debug-summary".to_string())
    } else {
        false
    }
}
