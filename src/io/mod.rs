/// Command-line parsing and operation dispatch
pub mod cli;
/// Whitespace-insensitive document comparison
pub mod compare;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Diagnostic logging setup
pub mod logging;
/// Numbered document output
pub mod output;
/// Item progress display
pub mod progress;
/// Frequency report
pub mod report;
