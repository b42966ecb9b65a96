//! Configuration module for pocat.
//!
//! This module transforms CLI arguments into a validated, normalized configuration
//! that drives the merge. It handles:
//! - Validation of argument combinations
//! - Application of defaults
//! - The pipeline options shared by the library and the binary

use anyhow::{Result, bail};

use crate::merge::{CommentFilter, EntryFilter, SortOrder};
use crate::po::WrapOptions;
use std::path::{Path, PathBuf};

/// Options controlling the merge pipeline.
///
/// The defaults reproduce the inputs as faithfully as possible: merge order,
/// every comment kept, nothing dropped, 78-column wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Entry ordering strategy.
    pub order: SortOrder,

    /// Comment categories to strip.
    pub comments: CommentFilter,

    /// Whole entries to drop.
    pub entries: EntryFilter,

    /// Line wrapping for the serializer.
    pub wrap: WrapOptions,

    /// Header metadata fields to remove, by name.
    pub remove_header_fields: Vec<String>,
}

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Replace an existing output file (default, like a shell redirect).
    #[default]
    Overwrite,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Complete configuration for a merge run.
///
/// This structure contains all settings needed to perform a merge,
/// derived and validated from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input catalog paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Output catalog path. `None` writes to stdout.
    pub output: Option<PathBuf>,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Number of parallel reads (None = auto-detect).
    pub jobs: Option<usize>,

    /// Print a warning for every conflicting duplicate.
    pub report_warnings: bool,

    /// Pipeline options.
    pub merge: MergeOptions,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose and quiet modes are both enabled
    /// - Jobs count is zero
    /// - Wrapping is on with a zero width
    /// - The output path is also an input
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            bail!("Number of jobs must be at least 1");
        }

        if self.merge.wrap.enabled && self.merge.wrap.width == 0 {
            bail!("Line width must be at least 1 (use --no-wrap to disable wrapping)");
        }

        if let Some(output) = &self.output
            && self.inputs.iter().any(|input| same_file(input, output))
        {
            bail!(
                "Output file cannot be the same as an input file: {}",
                output.display()
            );
        }

        Ok(())
    }

    /// Get the effective number of parallel jobs.
    ///
    /// Returns the configured job count, or the number of CPU cores if auto-detect.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Whether the merged catalog goes to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.is_none()
    }
}

/// Whether two paths name the same file, literally or once resolved.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
