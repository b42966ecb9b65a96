//! Error types for pocat.
//!
//! Two layers of errors exist:
//!
//! - [`ParseError`]: malformed catalog syntax. It is the only failure the
//!   merge pipeline itself can produce, and it carries the position of the
//!   offending input and line.
//! - [`PoCatError`]: everything the application layer can hit around the
//!   pipeline (files, configuration, output).

use std::io;
use std::path::PathBuf;

/// Result type alias for pocat operations.
pub type Result<T> = std::result::Result<T, PoCatError>;

/// What exactly was wrong with a catalog line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A quoted string has no closing quote.
    #[error("unterminated quoted string")]
    UnterminatedString,

    /// A backslash escape that the catalog format does not define.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// A comment line whose marker is not one of ` `, `.`, `:`, `,`, `|`, `~`.
    #[error("unknown comment marker '#{0}'")]
    UnknownCommentMarker(char),

    /// A line that is neither a comment, a keyword nor a continuation.
    #[error("unexpected line: {0}")]
    UnexpectedLine(String),

    /// A keyword that expects a quoted string was followed by something else.
    #[error("expected quoted string after '{0}'")]
    ExpectedString(&'static str),

    /// An entry has translations or a context but no `msgid`.
    #[error("entry has no msgid")]
    MissingId,

    /// An entry has a `msgid` but no `msgstr`.
    #[error("entry has no msgstr")]
    MissingTranslation,

    /// The same keyword appears twice within one entry.
    #[error("duplicate {0} in one entry")]
    DuplicateField(String),

    /// A `msgstr[N]` index that is not a number or breaks the 0..N sequence.
    #[error("invalid plural index '{0}'")]
    InvalidPluralIndex(String),

    /// `msgid_plural` combined with a plain `msgstr`, or the reverse.
    #[error("plural and singular translation forms are mixed")]
    PluralMismatch,
}

/// Malformed catalog syntax, located by input position and line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("catalog #{input}, line {line}: {kind}")]
pub struct ParseError {
    /// Zero-based position of the catalog in the merge sequence.
    pub input: usize,
    /// One-based line number inside that catalog.
    pub line: usize,
    /// The syntax problem.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create a parse error at the given position.
    pub fn new(input: usize, line: usize, kind: ParseErrorKind) -> Self {
        Self { input, line, kind }
    }
}

/// Main error type for pocat operations.
#[derive(Debug, thiserror::Error)]
pub enum PoCatError {
    /// A catalog file failed to parse.
    #[error("Failed to parse catalog: {}\n  Line {}: {}", .path.display(), .source.line, .source.kind)]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying syntax error.
        source: ParseError,
    },

    /// A catalog given as text failed to parse.
    #[error("Failed to parse catalog: {0}")]
    Catalog(#[from] ParseError),

    /// No input catalogs were given.
    #[error("No input catalogs specified")]
    NoInputs,

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Input path is a directory or other non-file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file exists but cannot be inspected.
    #[error("Cannot access file: {}\n  Reason: {source}", .path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file could not be read as text.
    #[error("Failed to read catalog: {}\n  Reason: {source}", .path.display())]
    FailedToReadInput {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input list file contains an invalid entry.
    #[error("Invalid entry in input list file: {} at line {line_number}\n  Details: {details}", .path.display())]
    InvalidInputList {
        /// Path to the input list file.
        path: PathBuf,
        /// Line number with the error.
        line_number: usize,
        /// What is wrong with it.
        details: String,
    },

    /// Output file already exists and overwrite is not allowed.
    #[error("Output file already exists: {}\n  Remove --no-clobber to overwrite it", .path.display())]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the merged catalog failed.
    #[error("Failed to write output: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<anyhow::Error> for PoCatError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PoCatError {
    /// Create a Parse error for a file.
    pub fn parse(path: PathBuf, source: ParseError) -> Self {
        Self::Parse { path, source }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// The syntax error behind this failure, if it is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Catalog(source) => Some(source),
            _ => None,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInputs => 1,
            Self::InvalidConfig { .. } => 1,
            Self::InvalidInputList { .. } => 1,
            Self::Other { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::FailedToReadInput { .. } => 2,
            Self::Parse { .. } => 3,
            Self::Catalog(_) => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
        }
    }
}
