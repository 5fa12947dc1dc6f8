//! Converter for the ATIS (Airline Travel Information Service) corpus.
//! Sentences sit between pairs of `=` boundary marker lines; content is
//! bracketed `word/tag` text and only tokenized while inside a pair.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::{self, ConversionError, Corpus, Sentence};
use crate::mallet;

/// Parse an ATIS `.pos` file into a corpus.
/// A file ending inside an open boundary pair is a hard error.
pub fn read_corpus<P: AsRef<Path>>(input: P) -> Result<Corpus, ConversionError> {
  let input = input.as_ref();
  let reader = BufReader::new(File::open(input)?);
  let mut corpus = Corpus::new();
  let mut current = Sentence::new();
  // True while we are between a pair of boundary markers.
  let mut inside = false;

  for line in reader.lines() {
    let line = line?;
    if data::is_boundary(&line) {
      // Entering a new pair completes whatever the previous pair collected.
      if !inside && !current.is_empty() {
        corpus.push(current);
        current = Sentence::new();
      }
      inside = !inside;
    } else if inside {
      for token in data::tokenize_line(&line)? {
        current.push(token);
      }
    }
  }

  // We should not end in the middle of a sentence block.
  if inside {
    return Err(ConversionError::UnterminatedSentence(
      input.display().to_string(),
    ));
  }
  if !current.is_empty() {
    corpus.push(current);
  }
  Ok(corpus)
}

/// Convert an ATIS file and write the result to `out` in Mallet format
pub fn to_mallet<P: AsRef<Path>, Q: AsRef<Path>>(
  input: P,
  out: Q,
) -> Result<Corpus, ConversionError> {
  let corpus = read_corpus(input)?;
  mallet::write_file(&corpus, out)?;
  Ok(corpus)
}
