//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::error::CliError;

pub mod analyze;
pub mod generate_config;
pub mod serve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyse words and sentences from text or files
    Analyze(analyze::AnalyzeArgs),

    /// Answer JSON requests read line by line from stdin
    Serve(serve::ServeArgs),

    /// Validate a lexicon manifest
    Validate(validate::ValidateArgs),

    /// Generate a lexicon manifest template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in lexicons
    Lexicons,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Lexicons => {
                println!("Built-in lexicons:");
                for (name, code) in vibhaga_core::builtin_lexicons() {
                    println!("  {code:<6} {name}");
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      One analysis per line");
                println!("  json      JSON array with structured segments");
                println!("  markdown  One table per input source");
            }
        }
        Ok(())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one analysis per line
    Text,
    /// JSON array of analyses with segments
    Json,
    /// Markdown tables
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence when set. Repeated initialisation is ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
