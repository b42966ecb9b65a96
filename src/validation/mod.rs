//! Pre-flight validation for pocat.
//!
//! Checks inputs and the output destination before any catalog is parsed:
//! - File existence and accessibility checks
//! - Overwrite protection for the output
//! - Output directory checks
//!
//! Catalog syntax is not checked here; the parser reports that.
//!
//! # Examples
//!
//! ```no_run
//! use pocat::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = Validator::new();
//! let result = validator.validate_file(&PathBuf::from("ja.po")).await?;
//! println!("{} is {} bytes", result.path.display(), result.file_size);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{Config, OverwriteMode};
use crate::error::{PoCatError, Result};
use crate::utils::format_file_size;

/// Result of validating a single input file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Size of the file in bytes.
    pub file_size: u64,
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file.
    pub results: Vec<ValidationResult>,

    /// Total file size in bytes.
    pub total_size: u64,

    /// Number of files that passed validation.
    pub files_validated: usize,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total_size = results.iter().map(|r| r.file_size).sum();
        let files_validated = results.len();

        Self {
            results,
            total_size,
            files_validated,
        }
    }

    /// Format the total file size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Validator for input files and the output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single input file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File does not exist
    /// - Path is not a regular file
    /// - File metadata cannot be read
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if !path.exists() {
            return Err(PoCatError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PoCatError::not_a_file(path.to_path_buf()));
        }

        let metadata =
            tokio::fs::metadata(path)
                .await
                .map_err(|e| PoCatError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                })?;

        Ok(ValidationResult {
            path: path.to_path_buf(),
            file_size: metadata.len(),
        })
    }

    /// Validate every input file, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`PoCatError::NoInputs`] for an empty list, or the first
    /// file's validation error.
    pub async fn validate_files(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        if paths.is_empty() {
            return Err(PoCatError::NoInputs);
        }

        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.validate_file(path).await?);
        }

        Ok(ValidationSummary::from_results(results))
    }

    /// Validate the output destination.
    ///
    /// Writing to stdout always passes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output file exists and no-clobber is set
    /// - Output path is a directory
    /// - Output directory doesn't exist
    /// - Output directory is not writable
    pub async fn validate_output(&self, config: &Config) -> Result<()> {
        let Some(output_path) = &config.output else {
            return Ok(());
        };

        if output_path.is_dir() {
            return Err(PoCatError::not_a_file(output_path.clone()));
        }

        if output_path.exists() && config.overwrite_mode == OverwriteMode::NoClobber {
            return Err(PoCatError::output_exists(output_path.clone()));
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                return Err(PoCatError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata = tokio::fs::metadata(parent).await.map_err(|e| {
                PoCatError::FileNotAccessible {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;

            if metadata.permissions().readonly() {
                return Err(PoCatError::invalid_config(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Validate inputs and output together.
    pub async fn validate_config(&self, config: &Config) -> Result<ValidationSummary> {
        let summary = self.validate_files(&config.inputs).await?;
        self.validate_output(config).await?;
        Ok(summary)
    }
}
