//! Catalog writing operations.
//!
//! This module writes the merged catalog with:
//! - Atomic writes (write to temp file, then rename)
//! - Standard output as an alternative destination
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pocat::io::writer::CatalogWriter;
//! use std::path::Path;
//!
//! # async fn example(text: String) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = CatalogWriter::new();
//! writer.save(&text, Path::new("merged.po")).await?;
//! # Ok(())
//! # }
//! ```

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::task;

use crate::error::{PoCatError, Result};
use crate::utils::format_file_size;

/// Options for writing catalog files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the output.
    pub write_time: Duration,

    /// Number of bytes written.
    pub file_size: u64,

    /// Path where the file was written, `None` for stdout.
    pub output_path: Option<PathBuf>,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Catalog writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct CatalogWriter {
    options: WriteOptions,
}

impl CatalogWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Pick the writer for an output destination.
    ///
    /// Existing paths that are not regular files (`/dev/null`, a FIFO) are
    /// written in place; a rename would replace them.
    pub fn for_output(path: Option<&Path>) -> Self {
        match path.and_then(|p| std::fs::metadata(p).ok()) {
            Some(metadata) if !metadata.is_file() => Self::non_atomic(),
            _ => Self::new(),
        }
    }

    /// Write catalog text to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Write operation fails
    pub async fn save(&self, text: &str, path: &Path) -> Result<()> {
        self.save_with_stats(text, path).await.map(|_| ())
    }

    /// Write catalog text to a file and return statistics.
    ///
    /// Atomic writes go to a uniquely named temporary file next to `path`
    /// which is then renamed over it. The temporary file is removed if any
    /// step fails.
    pub async fn save_with_stats(&self, text: &str, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();
        let text = text.to_owned();

        task::spawn_blocking(move || {
            let start = Instant::now();

            if options.atomic {
                write_atomic(&text, &path_buf, options.buffer_size)?;
            } else {
                write_in_place(&text, &path_buf, options.buffer_size)?;
            }

            Ok::<_, PoCatError>(WriteStatistics {
                write_time: start.elapsed(),
                file_size: text.len() as u64,
                output_path: Some(path_buf),
            })
        })
        .await
        .map_err(|e| PoCatError::other(format!("Write task failed: {e}")))?
    }

    /// Write catalog text to standard output.
    pub async fn write_stdout(&self, text: &str) -> Result<WriteStatistics> {
        let start = Instant::now();
        let mut stdout = tokio::io::stdout();

        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size: text.len() as u64,
            output_path: None,
        })
    }

    /// Write to `path`, or to stdout when no path is given.
    pub async fn write(&self, text: &str, path: Option<&Path>) -> Result<WriteStatistics> {
        match path {
            Some(path) => self.save_with_stats(text, path).await,
            None => self.write_stdout(text).await,
        }
    }
}

fn write_in_place(text: &str, path: &Path, buffer_size: usize) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| PoCatError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::with_capacity(buffer_size, file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| PoCatError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_atomic(text: &str, path: &Path, buffer_size: usize) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let temp = NamedTempFile::new_in(dir).map_err(|e| PoCatError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Replacing a file keeps its mode; new files get the usual 0644.
    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| PoCatError::FailedToWrite {
                path: temp.path().to_path_buf(),
                source: e,
            })?;
    }

    let mut writer = BufWriter::with_capacity(buffer_size, temp);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| PoCatError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    let temp = writer.into_inner().map_err(|e| PoCatError::FailedToWrite {
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;

    temp.persist(path).map_err(|e| PoCatError::FailedToWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
