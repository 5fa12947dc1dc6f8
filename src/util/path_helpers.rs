//! Helpers for locating corpus files, where a filesystem root is passed in
//! and the matching files are requested. Scanning only ever happens through
//! an explicit call, never as a load-time side effect.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively list every file under `root` whose name ends with
/// `extension`, in sorted walk order
pub fn scan_corpus(root: &Path, extension: &str) -> Vec<PathBuf> {
  let mut found = Vec::new();
  for entry in WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
    .filter_map(|e| e.ok())
  {
    if !entry.file_type().is_file() {
      continue;
    }
    let file_name = entry.file_name().to_str().unwrap_or("");
    if file_name.ends_with(extension) {
      found.push(entry.path().to_path_buf());
    }
  }
  found
}
