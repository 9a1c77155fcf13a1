//! Status output for the prompt-filter CLI
//!
//! Results go to stdout; everything printed here goes to stderr so that
//! filtered prompts can be piped cleanly.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: u8,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
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

    /// Print a verbose message (only with -v)
    pub fn verbose(&self, message: &str) {
        if self.verbose > 0 && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a key/value row
    pub fn table_row(&self, key: &str, value: &str) {
        if !self.quiet {
            eprintln!("  {:<22} {}", style(key).bold(), value);
        }
    }
}
