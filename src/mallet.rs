//! Writing and reading the Mallet training format: one token line per line,
//! with a blank line after every sentence, including the last.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::data::{ConversionError, Corpus, Sentence, Token};

/// Serialize `corpus` to `writer`
pub fn write<W: Write>(corpus: &Corpus, writer: &mut W) -> Result<(), ConversionError> {
  for sentence in corpus.iter() {
    for token in &sentence.tokens {
      writeln!(writer, "{}", token.line())?;
    }
    writeln!(writer)?;
  }
  Ok(())
}

/// Serialize `corpus` to a fresh file at `out`, replacing previous content
pub fn write_file<P: AsRef<Path>>(corpus: &Corpus, out: P) -> Result<(), ConversionError> {
  let mut writer = BufWriter::new(File::create(out)?);
  write(corpus, &mut writer)?;
  writer.flush()?;
  Ok(())
}

/// Read a Mallet-format file back into a corpus. Trailing fields beyond the
/// word and tag are kept as feature tags.
pub fn read_file<P: AsRef<Path>>(input: P) -> Result<Corpus, ConversionError> {
  let reader = BufReader::new(File::open(input)?);
  let mut corpus = Corpus::new();
  let mut current = Sentence::new();

  for line in reader.lines() {
    let line = line?;
    if line.trim().is_empty() {
      if !current.is_empty() {
        corpus.push(current);
        current = Sentence::new();
      }
      continue;
    }
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
      (Some(word), Some(pos)) => current.push(Token {
        word: word.to_string(),
        pos: pos.to_string(),
        features: fields.map(str::to_string).collect(),
      }),
      _ => return Err(ConversionError::MalformedToken(line)),
    }
  }

  if !current.is_empty() {
    corpus.push(current);
  }
  Ok(corpus)
}
