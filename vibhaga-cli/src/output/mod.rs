//! Output formatting module

use anyhow::Result;
use vibhaga_core::Analysis;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Mark the start of a new input source (file or inline text)
    fn start_source(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output the analysis of one input line
    fn format_analysis(&mut self, input: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
