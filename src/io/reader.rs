//! Catalog reading and loading operations.
//!
//! This module loads catalog files with support for:
//! - Sequential and parallel loading
//! - Results returned in input order regardless of completion order
//! - Detailed load statistics
//!
//! # Examples
//!
//! ```no_run
//! use pocat::io::reader::CatalogReader;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = CatalogReader::new();
//! let paths = vec![PathBuf::from("a.po"), PathBuf::from("b.po")];
//! let (results, stats) = reader.load_all(&paths, 4).await;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{PoCatError, Result};
use crate::po::parse_catalog;
use crate::utils::format_file_size;

/// A parsed catalog with metadata about its source.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// The parsed catalog.
    pub catalog: Catalog,

    /// Path to the source file.
    pub path: PathBuf,

    /// Position of the file in the merge sequence.
    pub input: usize,

    /// Number of regular entries.
    pub entry_count: usize,

    /// Time taken to read and parse the file.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Result of a load operation (success or failure).
pub type LoadResult = Result<LoadedCatalog>;

/// Statistics for a batch load operation.
#[derive(Debug, Clone)]
pub struct LoadStatistics {
    /// Number of catalogs successfully loaded.
    pub success_count: usize,

    /// Number of catalogs that failed to load.
    pub failure_count: usize,

    /// Total time taken for all loads.
    pub total_time: Duration,

    /// Total size of successfully loaded files.
    pub total_size: u64,

    /// Total number of regular entries loaded.
    pub total_entries: usize,
}

impl LoadStatistics {
    fn from_results(results: &[LoadResult], total_time: Duration) -> Self {
        let mut stats = Self {
            success_count: 0,
            failure_count: 0,
            total_time,
            total_size: 0,
            total_entries: 0,
        };

        for result in results {
            match result {
                Ok(loaded) => {
                    stats.success_count += 1;
                    stats.total_size += loaded.file_size;
                    stats.total_entries += loaded.entry_count;
                }
                Err(_) => stats.failure_count += 1,
            }
        }

        stats
    }

    /// Format total size as human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Reads catalog files and parses them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogReader;

impl CatalogReader {
    /// Create a new catalog reader.
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a single catalog file.
    ///
    /// `input` is the file's position in the merge sequence and ends up in
    /// any parse error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read or is not UTF-8
    /// - The content is not a well-formed catalog
    pub async fn load(&self, path: &Path, input: usize) -> Result<LoadedCatalog> {
        let start = Instant::now();

        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PoCatError::file_not_found(path.to_path_buf()),
            _ => PoCatError::FailedToReadInput {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let file_size = bytes.len() as u64;

        let text = String::from_utf8(bytes).map_err(|e| PoCatError::FailedToReadInput {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        let catalog =
            parse_catalog(&text, input).map_err(|e| PoCatError::parse(path.to_path_buf(), e))?;
        let entry_count = catalog.len();
        let load_time = start.elapsed();

        debug!(
            path = %path.display(),
            input,
            entries = entry_count,
            header = catalog.header().is_some(),
            "parsed catalog"
        );

        Ok(LoadedCatalog {
            catalog,
            path: path.to_path_buf(),
            input,
            entry_count,
            load_time,
            file_size,
        })
    }

    /// Load catalogs one at a time in the order provided.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Vec<LoadResult> {
        let mut results = Vec::with_capacity(paths.len());

        for (input, path) in paths.iter().enumerate() {
            results.push(self.load(path, input).await);
        }

        results
    }

    /// Load catalogs concurrently with at most `workers` in flight.
    ///
    /// Results come back in the same order as `paths`.
    pub async fn load_parallel(&self, paths: &[PathBuf], workers: usize) -> Vec<LoadResult> {
        let workers = workers.max(1);

        let tasks = paths.iter().enumerate().map(|(input, path)| {
            let reader = *self;
            async move { (input, reader.load(path, input).await) }
        });

        let mut indexed: Vec<(usize, LoadResult)> = stream::iter(tasks)
            .buffer_unordered(workers)
            .collect()
            .await;

        indexed.sort_by_key(|(input, _)| *input);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Load all catalogs with automatic parallelization.
    ///
    /// Small batches are read sequentially to avoid scheduling overhead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pocat::io::reader::CatalogReader;
    /// # use std::path::PathBuf;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let reader = CatalogReader::new();
    /// let paths = vec![PathBuf::from("a.po"), PathBuf::from("b.po")];
    ///
    /// let (results, stats) = reader.load_all(&paths, 4).await;
    /// println!("Loaded {} of {} files in {:?}",
    ///          stats.success_count,
    ///          paths.len(),
    ///          stats.total_time);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load_all(
        &self,
        paths: &[PathBuf],
        max_workers: usize,
    ) -> (Vec<LoadResult>, LoadStatistics) {
        let start = Instant::now();

        let results = if paths.len() <= 3 || max_workers <= 1 {
            self.load_sequential(paths).await
        } else {
            self.load_parallel(paths, max_workers).await
        };

        let stats = LoadStatistics::from_results(&results, start.elapsed());
        (results, stats)
    }

    /// Load all catalogs, failing on the first error in input order.
    ///
    /// # Errors
    ///
    /// Returns the error of the earliest input that failed to load.
    pub async fn load_catalogs(
        &self,
        paths: &[PathBuf],
        max_workers: usize,
    ) -> Result<(Vec<LoadedCatalog>, LoadStatistics)> {
        let (results, stats) = self.load_all(paths, max_workers).await;
        let loaded = results.into_iter().collect::<Result<Vec<_>>>()?;
        Ok((loaded, stats))
    }
}
