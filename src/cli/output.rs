//! Terminal output for harmonic
//!
//! Styled status lines go through [`Output`] and respect `--quiet` and
//! `--verbose`. Computed values are printed with [`Output::value`], which is
//! never suppressed, or as JSON when `--format json` is selected.

use clap::ValueEnum;
use console::style;
use serde::Serialize;

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
    format: OutputFormat,
    precision: usize,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool, format: OutputFormat, precision: usize) -> Self {
        Self {
            verbose,
            quiet,
            format,
            precision,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Status lines are for humans; JSON output stays machine-readable.
    fn chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.chatty() {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.chatty() {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && self.chatty() {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if self.chatty() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a labelled floating-point result with the configured precision
    pub fn value(&self, label: &str, value: f64) {
        println!(
            "  {:<16} {}",
            style(label).dim(),
            style(format!("{:.*}", self.precision, value)).green().bold()
        );
    }

    /// Print a labelled result verbatim
    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {:<16} {}", style(key).dim(), style(value).bold());
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        println!("  • {}", item);
    }

    /// Serialize a result as pretty JSON on stdout
    pub fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
