//! Serve command implementation
//!
//! Reads one JSON request per line and writes one JSON response per line.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::init_logging;
use crate::config::CliConfig;
use crate::lexicon_source::LexiconArgs;
use vibhaga_api::{AnalyzeResponse, ApiError, MorphologyService};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let service = self.lexicon.service(&config)?;
        log::info!("Serving requests on stdin");

        let stdin = io::stdin();
        let stdout = io::stdout();
        serve(&service, stdin.lock(), stdout.lock())
    }
}

/// Answer each non-blank request line with one response line
pub fn serve<R: BufRead, W: Write>(
    service: &MorphologyService,
    reader: R,
    mut writer: W,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match service.handle_json(&line) {
            Ok(response) => response,
            Err(ApiError::Serde(e)) => {
                log::warn!("Rejected malformed request: {e}");
                serde_json::to_string(&AnalyzeResponse::error(format!("Invalid request: {e}")))?
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(writer, "{response}")?;
        writer.flush()?;
    }

    Ok(())
}
