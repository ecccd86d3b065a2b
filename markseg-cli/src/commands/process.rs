//! Process command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use markseg_core::{Config, ContextWindow, Input, Output, SegmentProcessor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Characters of context kept around each flagged region
    #[arg(
        short = 'c',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        conflicts_with = "full"
    )]
    pub context_chars: Option<i64>,

    /// Keep the whole document as context
    #[arg(long)]
    pub full: bool,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: config, else all cores)
    #[arg(short = 't', long, value_name = "COUNT", requires = "parallel")]
    pub threads: Option<usize>,

    /// Replace collapsed (plain) segments by a placeholder in text output
    #[arg(long)]
    pub collapse: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Document text with flagged passages delimited by [[ ]]
    Text,
    /// JSON array of documents with their segments
    Json,
    /// Markdown with flagged passages in bold
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let config = self.build_config(&cli_config)?;
        let processor = SegmentProcessor::with_config(config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Segmenting {} file(s), {} bytes, context {}",
            files.len(),
            FileReader::total_size(&files)?,
            processor.config().context_window()
        );

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let started = Instant::now();
        let results = if self.parallel {
            let threads = self
                .threads
                .unwrap_or_else(|| cli_config.performance.threads());
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            log::debug!("Using {threads} worker thread(s)");
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| segment_file(&processor, path, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| segment_file(&processor, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();
        log::info!("Segmented {} file(s) in {:?}", results.len(), started.elapsed());

        let format = self.resolve_format(&cli_config)?;
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_collapse(self.collapse))
            }
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .pretty(cli_config.output.pretty_json)
                    .include_metadata(cli_config.output.include_metadata),
            ),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (path, output) in &results {
            formatter.begin_document(&path.display().to_string())?;
            for segment in &output.condensed {
                formatter.format_segment(segment)?;
            }
            formatter.end_document(&output.metadata)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Combine command-line flags with the configuration file
    fn build_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let segmentation = cli_config.segmentation()?;
        let window = if self.full {
            ContextWindow::FULL
        } else {
            let chars = self
                .context_chars
                .unwrap_or(segmentation.segmentation.context_chars);
            ContextWindow::try_from(chars).map_err(|e| CliError::ConfigError(e.to_string()))?
        };

        Ok(Config::builder()
            .context_window(window)
            .syntax(segmentation.markup)
            .build()?)
    }

    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&cli_config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    cli_config.output.default_format
                ))
                .into()
            }),
        }
    }
}

fn segment_file(
    processor: &SegmentProcessor,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<(PathBuf, Output)> {
    let text = FileReader::read_document(path)?;
    let output = processor
        .process(Input::from_text(text))
        .with_context(|| format!("Failed to segment {}", path.display()))?;
    log::debug!(
        "{}: {} marker(s), {} flagged segment(s)",
        path.display(),
        output.metadata.marker_count,
        output.metadata.flagged_segments
    );
    progress.file_completed(&path.display().to_string());
    Ok((path.to_path_buf(), output))
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };

    // a second initialisation (e.g. in tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
