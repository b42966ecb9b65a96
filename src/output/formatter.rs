//! Message formatting and display.
//!
//! Status messages can go to stdout or stderr. When the merged catalog is
//! written to stdout, every status line goes to stderr so the catalog
//! stream stays clean.
//!
//! # Examples
//!
//! ```
//! use pocat::output::formatter::{OutputFormatter, Stream};
//!
//! let formatter = OutputFormatter::new(false, false).with_stream(Stream::Stderr);
//! formatter.info("Merging catalogs...");
//! formatter.success("Done");
//! ```

use crate::config::Config;
use std::io::{self, IsTerminal, Write};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn decoration(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"),
            Self::Warning => ("⚠ ", "\x1b[33m"),
            Self::Error => ("✗ ", "\x1b[31m"),
            Self::Debug => ("→ ", "\x1b[36m"),
        }
    }
}

/// Where status messages are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
    stream: Stream,
}

impl OutputFormatter {
    /// Create a formatter writing to stdout.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(Stream::Stdout),
            stream: Stream::Stdout,
        }
    }

    /// Create a formatter from configuration.
    ///
    /// Uses stderr when the catalog itself goes to stdout.
    pub fn from_config(config: &Config) -> Self {
        let stream = if config.writes_to_stdout() {
            Stream::Stderr
        } else {
            Stream::Stdout
        };
        Self::new(config.quiet, config.verbose).with_stream(stream)
    }

    /// Redirect status messages to another stream.
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self.colored = Self::should_use_color(stream);
        self
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    fn should_use_color(stream: Stream) -> bool {
        stream.is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning message, even in quiet mode.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a message only in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    /// Print a section header. Suppressed in quiet mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            self.emit(&format!("\n{title}"));
        }
    }

    /// Print a `label: value` line in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            self.emit(&format!("  {label}: {value}"));
        }
    }

    /// Render a message the way it would be printed, without color.
    pub fn render(&self, level: MessageLevel, message: &str) -> String {
        let (prefix, _) = level.decoration();
        format!("{prefix}{message}")
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color_code) = level.decoration();

        if self.colored && !color_code.is_empty() {
            self.emit(&format!("{color_code}{prefix}{message}\x1b[0m"));
        } else {
            self.emit(&self.render(level, message));
        }
    }

    fn emit(&self, line: &str) {
        // A closed pipe is not worth failing the merge over.
        let _ = match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        };
    }

    /// Whether non-error output is shown.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The stream status messages go to.
    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
