//! Test utilities for the pos2mallet crate
use lazy_static::lazy_static;
use walkdir::WalkDir;

lazy_static! { // preload a list of the resources we have for testing, for easy corpus sanity checks
  /// shorthand global for all usable .pos files in the tests/resources mini-corpus
  pub static ref RESOURCE_CORPORA: Vec<String> = WalkDir::new("./tests/resources")
    .sort_by_file_name()
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file())
    .filter(|e| e.file_name().to_str().map_or(false, |name| name.ends_with(".pos")))
    .map(|entry| entry
      .path()
      .file_stem()
      .unwrap()
      .to_str()
      .unwrap()
      .to_string())
    .collect();
}
