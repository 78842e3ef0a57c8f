//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Number of items produced by a weighted run
pub const DEFAULT_ITEM_COUNT: usize = 500;

/// Directory fragment names are resolved against
pub const DEFAULT_FRAGMENT_DIR: &str = ".";

// Output settings
/// Output directory for weighted SVG runs
pub const DEFAULT_SVG_OUTPUT_DIR: &str = "generatedSVGs";
/// Output directory for exhaustive HTML runs
pub const DEFAULT_HTML_OUTPUT_DIR: &str = "generatedHTMLs";
/// File extension of SVG documents
pub const SVG_EXTENSION: &str = "svg";
/// File extension of HTML documents
pub const HTML_EXTENSION: &str = "html";

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Runs shorter than this finish without drawing a progress bar
pub const MIN_ITEMS_FOR_PROGRESS: usize = 2;
