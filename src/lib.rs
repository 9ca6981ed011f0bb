pub mod config;
pub mod errors; // Structured error handling
pub mod formatter;
pub mod global;
pub mod logger;
pub mod routes; // Route visibility and navigation
pub mod summary; // Quote summary computation
pub mod types;
