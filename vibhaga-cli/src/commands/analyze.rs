//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{init_logging, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::lexicon_source::LexiconArgs;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use vibhaga_api::MorphologyService;
use vibhaga_core::Analysis;

/// Source label used for inline text
const TEXT_SOURCE: &str = "<text>";

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyse
    #[arg(
        short,
        long,
        value_name = "TEXT",
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Analyses of one input source, in line order
struct SourceAnalysis {
    source: String,
    entries: Vec<(String, Analysis)>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting analysis");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };
        let service = self.lexicon.service(&config)?;

        let sources = match &self.text {
            Some(text) => vec![self.analyze_text(&service, text)?],
            None => {
                let files = resolve_patterns(&self.input)?;
                log::info!("Found {} file(s) to analyse", files.len());
                self.analyze_files(&service, &files, &config)?
            }
        };

        let mut formatter = self.create_formatter(format, &config)?;
        for source in &sources {
            formatter.start_source(&source.source)?;
            for (input, analysis) in &source.entries {
                formatter.format_analysis(input, analysis)?;
            }
        }
        formatter.finish()?;

        log::info!("Analysis completed");
        Ok(())
    }

    fn analyze_text(&self, service: &MorphologyService, text: &str) -> Result<SourceAnalysis> {
        if text.trim().is_empty() {
            return Err(CliError::AnalysisError(service.empty_input_message()).into());
        }

        Ok(SourceAnalysis {
            source: TEXT_SOURCE.to_string(),
            entries: analyze_lines(service, text),
        })
    }

    /// Analyse files on a worker pool, keeping input order
    fn analyze_files(
        &self,
        service: &MorphologyService,
        files: &[PathBuf],
        config: &CliConfig,
    ) -> Result<Vec<SourceAnalysis>> {
        let threads = self
            .threads
            .unwrap_or(config.performance.worker_threads);
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        log::debug!("Using {threads} worker thread(s)");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;

        let progress = FileProgress::start(files.len(), self.quiet || files.len() < 2);

        let results = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let analysis = analyze_file(service, path)?;
                    progress.record(&analysis);
                    Ok(analysis)
                })
                .collect::<Result<Vec<_>>>()
        });
        progress.finish();

        results
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

/// File counter with a running total of analysed lines
struct FileProgress {
    bar: ProgressBar,
    lines: AtomicUsize,
}

impl FileProgress {
    fn start(files: usize, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(files as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files, {msg}")
            {
                bar.set_style(style.progress_chars("##-"));
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };

        Self {
            bar,
            lines: AtomicUsize::new(0),
        }
    }

    fn record(&self, analysis: &SourceAnalysis) {
        let lines = self
            .lines
            .fetch_add(analysis.entries.len(), Ordering::Relaxed)
            + analysis.entries.len();
        self.bar.set_message(format!("{lines} lines analysed"));
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
        log::debug!(
            "Analysed {} line(s) from {} file(s)",
            self.lines.load(Ordering::Relaxed),
            self.bar.position()
        );
    }
}

fn analyze_file(service: &MorphologyService, path: &Path) -> Result<SourceAnalysis> {
    let text = FileReader::read_text(path)?;
    log::debug!("Analysing {}", path.display());

    Ok(SourceAnalysis {
        source: path.display().to_string(),
        entries: analyze_lines(service, &text),
    })
}

fn analyze_lines(service: &MorphologyService, text: &str) -> Vec<(String, Analysis)> {
    FileReader::lines(text)
        .map(|line| (line.to_string(), service.analyze(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(text: Option<&str>, input: Vec<String>, output: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            text: text.map(str::to_string),
            input,
            output: Some(output),
            format: Some(OutputFormat::Text),
            lexicon: LexiconArgs::default(),
            threads: Some(2),
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_analyze_inline_text() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.txt");

        args(Some("పిల్లలు\nఇది ఒక పుస్తకం."), vec![], out.clone())
            .execute()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "పిల్ల_Root + లు_Suffix\nఇది_Root ఒక_Root పుస్తకం_Root.\n"
        );
    }

    #[test]
    fn test_file_progress_tracks_files_and_lines() {
        let service = MorphologyService::new().unwrap();
        let progress = FileProgress::start(2, true);

        for (source, text) in [("a.txt", "ఇది\nఒక\n"), ("b.txt", "పిల్లలు\n")] {
            progress.record(&SourceAnalysis {
                source: source.to_string(),
                entries: analyze_lines(&service, text),
            });
        }

        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.lines.load(Ordering::Relaxed), 3);
        progress.finish();
    }

    #[test]
    fn test_blank_text_rejected() {
        let dir = TempDir::new().unwrap();
        let err = args(Some("   "), vec![], dir.path().join("out.txt"))
            .execute()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Analysis error: Please enter a Telugu word or sentence."
        );
    }

    #[test]
    fn test_files_keep_input_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "ఇది\n\n").unwrap();
        fs::write(&b, "ఒక\n").unwrap();
        let out = dir.path().join("out.md");

        let mut args = args(
            None,
            vec![dir.path().join("*.txt").to_string_lossy().into_owned()],
            out.clone(),
        );
        args.format = Some(OutputFormat::Markdown);
        args.execute().unwrap();

        let output = fs::read_to_string(&out).unwrap();
        let a_pos = output.find("a.txt").unwrap();
        let b_pos = output.find("b.txt").unwrap();
        assert!(a_pos < b_pos);
        assert!(output.contains("| ఇది | ఇది_Root |"));
        assert!(output.ends_with("*Total entries: 2*\n"));
    }

    #[test]
    fn test_missing_input_reported() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("none-*.txt").to_string_lossy().into_owned();
        let err = args(None, vec![pattern], dir.path().join("out.txt"))
            .execute()
            .unwrap_err();

        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
