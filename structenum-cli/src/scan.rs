//! Parallel file discovery and record extraction.
//!
//! Directories are pruned early through `WalkDir::filter_entry`; surviving
//! entries and file parsing are spread across Rayon's pool.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use structenum::Casing;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::extract::{extract_records, RecordDef};

/// Directories to exclude by default (standard Rust project conventions).
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all .rs files under `root`, skipping the default excluded
/// directories plus `excludes`.
pub fn gather_rs_files(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to gather .rs files from {}", root.display()))?;

    // par_bridge does not preserve walk order
    files.sort();
    Ok(files)
}

/// Extracts enum records from every file, in path order.
///
/// Unreadable files are logged and skipped.
pub fn extract_all(files: &[PathBuf], casing: Casing) -> Vec<RecordDef> {
    let records: Vec<RecordDef> = files
        .par_iter()
        .flat_map_iter(|path| match fs::read_to_string(path) {
            Ok(content) => extract_records(path, &content, casing),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "failed to read file");
                Vec::new()
            }
        })
        .collect();
    debug!(files = files.len(), records = records.len(), "extraction finished");
    records
}
