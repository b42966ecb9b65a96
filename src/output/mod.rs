//! User-facing output for pocat.
//!
//! This module handles status messages and summary reports with quiet and
//! verbose modes. Diagnostics for developers go through `tracing` instead.
//!
//! # Examples
//!
//! ```no_run
//! use pocat::output::OutputFormatter;
//! use pocat::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Merging catalogs");
//! formatter.success("Merge completed successfully");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter, Stream};

use crate::io::{LoadStatistics, WriteStatistics};
use crate::merge::MergeStatistics;

/// Display load statistics.
pub fn display_load_statistics(formatter: &OutputFormatter, stats: &LoadStatistics) {
    formatter.info(&format!(
        "Loaded {} catalog(s) in {:.2}s: {} entries, {}",
        stats.success_count,
        stats.total_time.as_secs_f64(),
        stats.total_entries,
        stats.format_total_size()
    ));
}

/// Display merge statistics in verbose mode.
///
/// Individual conflicting duplicates are reported as `tracing` warnings by
/// the merger; only their count appears here.
pub fn display_merge_statistics(formatter: &OutputFormatter, stats: &MergeStatistics) {
    formatter.detail("Catalogs merged", &stats.catalogs_merged.to_string());
    formatter.detail("Entries read", &stats.entries_read.to_string());
    formatter.detail("Duplicates discarded", &stats.duplicates_discarded.to_string());
    formatter.detail("Conflicting duplicates", &stats.conflicts.len().to_string());
    if stats.entries_filtered > 0 {
        formatter.detail("Entries filtered", &stats.entries_filtered.to_string());
    }
    if stats.header_fields_removed > 0 {
        formatter.detail(
            "Header fields removed",
            &stats.header_fields_removed.to_string(),
        );
    }
    formatter.detail("Entries written", &stats.entries_written().to_string());
}

/// Display write statistics.
pub fn display_write_statistics(formatter: &OutputFormatter, stats: &WriteStatistics) {
    match &stats.output_path {
        Some(path) => formatter.success(&format!(
            "Wrote {} ({}) in {:.2}s",
            path.display(),
            stats.format_file_size(),
            stats.write_time.as_secs_f64()
        )),
        None => formatter.debug(&format!("Wrote {} to stdout", stats.format_file_size())),
    }
}
