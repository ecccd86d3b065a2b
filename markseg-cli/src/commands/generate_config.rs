//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use markseg_core::config::defaults;
use markseg_core::MarkupSyntax;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the context window and markup syntax to match your documents");
        println!("2. Use it for processing:");
        println!(
            "   markseg process -i input.html --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn generate_template() -> String {
        let syntax = MarkupSyntax::default();
        format!(
            r#"# markseg configuration

[segmentation]
# Characters of context kept on each side of a flagged region.
# 0 keeps only the flagged text; negative values are rejected.
context_chars = {context}

[markup]
# Start tokens look like <span id="3">, end tokens like </span>
open_prefix = "{open}"
close_token = "{close}"
id_attribute = "{id}"

[output]
# text, json or markdown
default_format = "text"
include_metadata = false
pretty_json = true

[performance]
# Worker threads for --parallel (0 = one per CPU)
worker_threads = 0
"#,
            context = defaults::CONTEXT_CHARS,
            open = syntax.open_prefix,
            close = syntax.close_token,
            id = syntax.id_attribute,
        )
    }
}
