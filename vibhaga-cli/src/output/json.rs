//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use vibhaga_core::Analysis;

/// JSON formatter - outputs analyses as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: String,
    entries: Vec<AnalysisData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisData {
    /// File the line came from, or `<text>` for inline input
    pub source: String,
    /// The analysed line
    pub input: String,
    /// Rendered analysis
    pub output: String,
    /// Structured tokens and segments
    pub tokens: Analysis,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: String::new(),
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_source(&mut self, source: &str) -> Result<()> {
        self.source = source.to_string();
        Ok(())
    }

    fn format_analysis(&mut self, input: &str, analysis: &Analysis) -> Result<()> {
        self.entries.push(AnalysisData {
            source: self.source.clone(),
            input: input.to_string(),
            output: analysis.to_string(),
            tokens: analysis.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibhaga_core::{Segment, WordAnalysis};

    #[test]
    fn test_entries_carry_source_and_segments() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        let segments: WordAnalysis = [Segment::root("play"), Segment::suffix("ing")]
            .into_iter()
            .collect();
        let analysis = Analysis::word("playing", segments);

        formatter.start_source("a.txt").unwrap();
        formatter.format_analysis("playing", &analysis).unwrap();
        formatter.finish().unwrap();

        let json: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        let entry = &json[0];
        assert_eq!(entry["source"], "a.txt");
        assert_eq!(entry["input"], "playing");
        assert_eq!(entry["output"], "play_Root + ing_Suffix");
        assert_eq!(entry["tokens"][0]["kind"], "word");
        assert_eq!(entry["tokens"][0]["segments"][1]["role"], "Suffix");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
