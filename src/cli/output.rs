//! Terminal output for command results.
//!
//! Human-facing messages go to stderr so that stdout carries only command
//! results (paths or JSON) and stays pipeable.

use std::io::{self, Write};

/// Writes user-facing messages according to verbosity.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. `quiet` wins over `verbose`.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose: verbose && !quiet,
            quiet,
        }
    }

    /// Detail lines, shown only with `--verbose`.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            writeln!(io::stderr().lock(), "{message}")?;
        }
        Ok(())
    }

    /// Success lines.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stderr().lock(), "✓ {message}")?;
        }
        Ok(())
    }

    /// Warning lines.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stderr().lock(), "⚠ {message}")?;
        }
        Ok(())
    }

    /// Section headers.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stderr().lock(), "\n{title}")?;
        }
        Ok(())
    }

    /// Indented detail under a section.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stderr().lock(), "  {message}")?;
        }
        Ok(())
    }

    /// Command results on stdout, printed even in quiet mode.
    pub fn data(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }
}
