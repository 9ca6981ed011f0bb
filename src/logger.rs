//! Tagged console logging with timestamps and per-module debug gating
//!
//! Call sites pass a tag, a short status keyword and a message:
//!
//! ```rust
//! use swapview::logger::{log, LogTag};
//!
//! log(LogTag::Route, "REDIRECT", "Navigating back to /");
//! ```
//!
//! Debug-level messages are gated at the call site via the
//! `--debug-<module>` checks in `global`.

use chrono::Utc;
use colored::*;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    App,
    Route,
    Summary,
    Config,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::App => "APP",
            LogTag::Route => "ROUTE",
            LogTag::Summary => "SUMMARY",
            LogTag::Config => "CONFIG",
        }
    }

    fn colored_label(&self) -> ColoredString {
        match self {
            LogTag::App => self.as_str().blue().bold(),
            LogTag::Route => self.as_str().magenta().bold(),
            LogTag::Summary => self.as_str().cyan().bold(),
            LogTag::Config => self.as_str().yellow().bold(),
        }
    }
}

/// Write a tagged log line to the console.
pub fn log(tag: LogTag, status: &str, message: &str) {
    let timestamp = Utc::now().format("%H:%M:%S%.3f");
    println!(
        "{} {} {} {}",
        format!("[{}]", timestamp).dimmed(),
        tag.colored_label(),
        status.bold(),
        message
    );
    let _ = io::stdout().flush();
}
