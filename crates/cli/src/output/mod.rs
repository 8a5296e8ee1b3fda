//! Output formatting utilities
//!
//! Formatters for human-readable and JSON output, plus the in-place
//! running counter used by count-objects.

mod counter;
mod formatter;

pub use counter::CountDisplay;
pub use formatter::Formatter;

/// Output configuration derived from the global CLI flags
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Disable the running counter
    pub no_progress: bool,
    /// Suppress non-error output
    pub quiet: bool,
}
