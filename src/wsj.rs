//! Converter for the WSJ (Wall Street Journal) treebank corpus.
//! Same bracketed `word/tag` content as ATIS, but boundary markers simply
//! separate sentences, and since they are not always present where a
//! sentence actually ends, a bare `.` word also closes the buffer.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::{self, ConversionError, Corpus, Sentence};
use crate::mallet;
use crate::util::path_helpers;

/// Parse a WSJ `.pos` file into a corpus.
/// A marker-delimited block may yield zero, one or several sentences.
pub fn read_corpus<P: AsRef<Path>>(input: P) -> Result<Corpus, ConversionError> {
  let reader = BufReader::new(File::open(input.as_ref())?);
  let mut corpus = Corpus::new();
  let mut current = Sentence::new();

  for line in reader.lines() {
    let line = line?;
    if data::is_boundary(&line) {
      if !current.is_empty() {
        corpus.push(current);
        current = Sentence::new();
      }
    } else {
      for token in data::tokenize_line(&line)? {
        // Sometimes WSJ's sentence boundaries aren't perfect.
        let terminal = token.word == ".";
        current.push(token);
        if terminal {
          corpus.push(current);
          current = Sentence::new();
        }
      }
    }
  }

  if !current.is_empty() {
    corpus.push(current);
  }
  Ok(corpus)
}

/// Convert every WSJ file under `root` into one merged corpus, in sorted
/// walk order. `extension` defaults to `.pos`.
pub fn read_corpus_dir<P: AsRef<Path>>(
  root: P,
  extension: Option<String>,
) -> Result<Corpus, ConversionError> {
  let extension = extension.unwrap_or_else(|| ".pos".to_string());
  let mut corpus = Corpus::new();
  for path in path_helpers::scan_corpus(root.as_ref(), &extension) {
    println!("-- converting {}", path.display());
    corpus.merge(read_corpus(&path)?);
  }
  Ok(corpus)
}

/// Convert a WSJ file and write the result to `out` in Mallet format
pub fn to_mallet<P: AsRef<Path>, Q: AsRef<Path>>(
  input: P,
  out: Q,
) -> Result<Corpus, ConversionError> {
  let corpus = read_corpus(input)?;
  mallet::write_file(&corpus, out)?;
  Ok(corpus)
}
