//! CLI argument parsing for pocat.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use pocat::config::{Config, MergeOptions, OverwriteMode};
use pocat::error::{PoCatError, Result};
use pocat::merge::{CommentFilter, EntryFilter, SortOrder};
use pocat::po::{DEFAULT_WIDTH, WrapOptions};
use pocat::utils::collect_paths_for_patterns;

/// Concatenate gettext message catalogs into a single catalog.
///
/// pocat merges several .po files. When the same message appears more than
/// once, the first occurrence wins, and the header of the first catalog
/// that has one is kept.
#[derive(Parser, Debug)]
#[command(name = "pocat")]
#[command(version)]
#[command(about = "Concatenate gettext message catalogs into a single catalog", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input catalogs to merge (in order)
    ///
    /// Specify multiple files or use glob patterns.
    /// Earlier files take precedence over later ones.
    ///
    /// Examples:
    ///   pocat ja.po ja-extra.po -o merged.po
    ///   pocat 'po/*.po' --sort-by-msgid
    #[arg(value_name = "FILE", required_unless_present = "input_list")]
    pub inputs: Vec<String>,

    /// Output catalog path (default: standard output)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read input file list from a file (one path per line)
    ///
    /// Lines starting with '#' are ignored. Use '-' to read from stdin.
    /// Paths from the list come after direct inputs.
    #[arg(long, value_name = "FILE")]
    pub input_list: Option<PathBuf>,

    /// Sort entries by context and msgid
    #[arg(short = 's', long, visible_alias = "sort-output")]
    #[arg(conflicts_with_all = ["sort_by_location", "no_sort_output"])]
    pub sort_by_msgid: bool,

    /// Sort entries by their first source reference
    ///
    /// Entries without references come first, in merge order.
    #[arg(long, visible_alias = "sort-by-file", conflicts_with = "no_sort_output")]
    pub sort_by_location: bool,

    /// Keep entries in merge order (default)
    #[arg(long)]
    pub no_sort_output: bool,

    /// Select the entry order by name: none, msgid or location
    #[arg(long, value_name = "ORDER")]
    #[arg(conflicts_with_all = ["sort_by_msgid", "sort_by_location", "no_sort_output"])]
    pub sort: Option<SortOrder>,

    /// Do not write '#: file:line' references
    #[arg(long)]
    pub no_location: bool,

    /// Do not write '# ' translator comments
    #[arg(long)]
    pub no_translator_comment: bool,

    /// Do not write '#. ' extracted comments
    #[arg(long)]
    pub no_extracted_comment: bool,

    /// Do not write '#, ' flag comments
    #[arg(long)]
    pub no_flag_comment: bool,

    /// Do not write '#| ' previous-message comments
    #[arg(long)]
    pub no_previous_comment: bool,

    /// Do not write any comments on regular entries
    #[arg(long)]
    pub no_all_comments: bool,

    /// Drop obsolete ('#~') entries
    #[arg(long)]
    pub no_obsolete_entries: bool,

    /// Drop entries flagged fuzzy
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Remove a field from the header metadata (repeatable)
    ///
    /// Example:
    ///   --remove-header-field POT-Creation-Date
    #[arg(long, value_name = "FIELD", action = ArgAction::Append)]
    pub remove_header_field: Vec<String>,

    /// Maximum line width for wrapped strings and references
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Wrap long strings at the line width (default)
    #[arg(long, overrides_with = "no_wrap")]
    pub wrap: bool,

    /// Never split strings at the line width
    ///
    /// Strings are still broken after embedded newlines.
    #[arg(long, overrides_with = "wrap")]
    pub no_wrap: bool,

    /// Do not warn about conflicting duplicate messages
    #[arg(long)]
    pub no_report_warning: bool,

    /// Number of parallel jobs for loading catalogs
    ///
    /// Default is number of CPU cores. Use 1 for sequential processing.
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Never overwrite an existing output file
    #[arg(long)]
    pub no_clobber: bool,

    /// Verbose output - show merge statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Entry ordering selected by the sort flags.
    pub fn sort_order(&self) -> SortOrder {
        if let Some(order) = self.sort {
            order
        } else if self.sort_by_msgid {
            SortOrder::ByIdentity
        } else if self.sort_by_location {
            SortOrder::ByLocation
        } else {
            SortOrder::Preserve
        }
    }

    /// Comment categories selected for removal.
    pub fn comment_filter(&self) -> CommentFilter {
        if self.no_all_comments {
            return CommentFilter::drop_all();
        }

        CommentFilter {
            translator: self.no_translator_comment,
            extracted: self.no_extracted_comment,
            references: self.no_location,
            flags: self.no_flag_comment,
            previous: self.no_previous_comment,
        }
    }

    /// Line wrapping selected by `--width` and `--no-wrap`.
    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            enabled: !self.no_wrap,
            width: self.width,
        }
    }

    /// Pipeline options derived from the flags.
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            order: self.sort_order(),
            comments: self.comment_filter(),
            entries: EntryFilter {
                drop_obsolete: self.no_obsolete_entries,
                drop_fuzzy: self.no_fuzzy,
            },
            wrap: self.wrap_options(),
            remove_header_fields: self.remove_header_field.clone(),
        }
    }

    /// Convert CLI arguments into a validated Config.
    ///
    /// `inputs` is the resolved input list from [`Cli::get_all_inputs`].
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn to_config(&self, inputs: Vec<PathBuf>) -> Result<Config> {
        let overwrite_mode = if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        };

        let config = Config {
            inputs,
            output: self.output.clone(),
            overwrite_mode,
            verbose: self.verbose,
            quiet: self.quiet,
            jobs: self.jobs,
            report_warnings: !self.no_report_warning,
            merge: self.merge_options(),
        };

        config.validate().map_err(|e| {
            PoCatError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Validate CLI arguments before touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() && self.input_list.is_none() {
            return Err(PoCatError::NoInputs);
        }

        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            return Err(PoCatError::invalid_config(
                "Number of jobs must be at least 1",
            ));
        }

        if !self.no_wrap && self.width == 0 {
            return Err(PoCatError::invalid_config(
                "Line width must be at least 1 (use --no-wrap to disable wrapping)",
            ));
        }

        Ok(())
    }

    /// Get all input paths including those from the input-list file.
    ///
    /// Direct inputs are glob-expanded; paths from the list file are taken
    /// literally and appended after them.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid, the input list cannot be
    /// read, or no inputs remain.
    pub async fn get_all_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut all_inputs = collect_paths_for_patterns(&self.inputs)?;

        if let Some(ref input_list_path) = self.input_list {
            let additional_inputs = read_input_list(input_list_path).await?;
            all_inputs.extend(additional_inputs);
        }

        if all_inputs.is_empty() {
            return Err(PoCatError::NoInputs);
        }

        Ok(all_inputs)
    }
}

/// Read input paths from a list file, or stdin for `-`.
async fn read_input_list(path: &Path) -> Result<Vec<PathBuf>> {
    use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

    let read_error = |e| PoCatError::FailedToReadInput {
        path: path.to_path_buf(),
        source: e,
    };

    let source: Box<dyn AsyncRead + Unpin + Send> = if path.as_os_str() == "-" {
        Box::new(tokio::io::stdin())
    } else {
        Box::new(tokio::fs::File::open(path).await.map_err(read_error)?)
    };

    let mut lines = BufReader::new(source).lines();
    let mut paths = Vec::new();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await.map_err(read_error)? {
        line_number += 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.contains('\0') {
            return Err(PoCatError::InvalidInputList {
                path: path.to_path_buf(),
                line_number,
                details: "Path contains a NUL byte".to_string(),
            });
        }

        paths.push(PathBuf::from(line));
    }

    Ok(paths)
}
