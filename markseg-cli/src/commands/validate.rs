//! Validate command implementation

use crate::commands::process::init_logging;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use clap::Args;
use markseg_core::MarkupScanner;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Configuration file providing the markup syntax
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat id warnings (duplicates, ordering) as errors
    #[arg(long)]
    pub strict: bool,
}

/// Outcome of checking one document
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Matched regions
    pub regions: usize,
    /// Unbalanced tokens, plus id warnings in strict mode
    pub errors: usize,
    /// Id irregularities
    pub warnings: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(0, false);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let scanner = MarkupScanner::new(cli_config.segmentation()?.markup)?;
        let files = resolve_patterns(&self.input)?;

        let mut failed_files = 0;
        let mut total_errors = 0;

        for path in &files {
            let text = FileReader::read_document(path)?;
            let summary = self.check(&scanner, &path.display().to_string(), &text);
            if summary.errors > 0 {
                failed_files += 1;
                total_errors += summary.errors;
            }
        }

        if failed_files > 0 {
            return Err(CliError::InvalidMarkup {
                files: failed_files,
                errors: total_errors,
            }
            .into());
        }
        Ok(())
    }

    /// Print the diagnostics of one document and summarise them
    pub fn check(&self, scanner: &MarkupScanner, name: &str, text: &str) -> ValidationSummary {
        let mut summary = ValidationSummary {
            regions: scanner.regions(text).count(),
            ..Default::default()
        };

        for diagnostic in scanner.diagnose(text) {
            if diagnostic.is_error() || self.strict {
                summary.errors += 1;
                println!("✗ {name}: {diagnostic}");
            } else {
                summary.warnings += 1;
                println!("! {name}: {diagnostic}");
            }
        }

        if summary.errors == 0 {
            println!(
                "✓ {name}: {} region(s), {} warning(s)",
                summary.regions, summary.warnings
            );
        }
        summary
    }
}
