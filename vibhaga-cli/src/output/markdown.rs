//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use vibhaga_core::Analysis;

/// Markdown formatter - outputs one table per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    entry_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entry_count: 0,
        }
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_source(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Analysis |")?;
        writeln!(self.writer, "|-------|----------|")?;
        Ok(())
    }

    fn format_analysis(&mut self, input: &str, analysis: &Analysis) -> Result<()> {
        self.entry_count += 1;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape(input),
            escape(&analysis.to_string())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total entries: {}*", self.entry_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibhaga_core::{Segment, WordAnalysis};

    #[test]
    fn test_table_per_source() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        let analysis = Analysis::word("a|b", WordAnalysis::single(Segment::root("a|b")));

        formatter.start_source("x.txt").unwrap();
        formatter.format_analysis("a|b", &analysis).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert!(out.starts_with("## x.txt\n"));
        assert!(out.contains("| Input | Analysis |"));
        assert!(out.contains("| a\\|b | a\\|b_Root |"));
        assert!(out.ends_with("*Total entries: 1*\n"));
    }
}
