//! Data structures for converted corpora, with value semantics throughout
use std::io;
use std::slice::Iter;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
  // ATIS and WSJ both delimit sentences with a line of '=' characters;
  // truncated markers still count.
  static ref BOUNDARY: Regex = Regex::new(r"^=+$").unwrap();
}

/// Errors that end a conversion call; there is no local recovery
#[derive(Error, Debug)]
pub enum ConversionError {
  /// the underlying file could not be opened, read or written
  #[error("corpus file I/O failed: {0}")]
  Io(#[from] io::Error),
  /// a content token was missing its `word/tag` separator, or a half of it
  #[error("malformed token, expected word/tag: {0:?}")]
  MalformedToken(String),
  /// an ATIS file ended while still inside a boundary pair
  #[error("unterminated sentence block in {0}")]
  UnterminatedSentence(String),
}

/// A single tagged word of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// the surface form
  pub word: String,
  /// the part-of-speech tag
  pub pos: String,
  /// orthographic feature tags, in the order they were applied
  pub features: Vec<String>,
}

impl Token {
  /// Split a source token of the form `word/tag` at its first `/`.
  /// A tag containing `/` keeps its tail; a token without both halves
  /// is malformed and fails the conversion.
  pub fn parse(source: &str) -> Result<Token, ConversionError> {
    match source.find('/') {
      Some(at) if at > 0 && at + 1 < source.len() => Ok(Token {
        word: source[..at].to_string(),
        pos: source[at + 1..].to_string(),
        features: Vec::new(),
      }),
      _ => Err(ConversionError::MalformedToken(source.to_string())),
    }
  }

  /// Render the flat training line: word, tag, then any feature tags
  pub fn line(&self) -> String {
    let mut line = String::with_capacity(self.word.len() + self.pos.len() + 1);
    line.push_str(&self.word);
    line.push(' ');
    line.push_str(&self.pos);
    for feature in &self.features {
      line.push(' ');
      line.push_str(feature);
    }
    line
  }
}

/// An ordered run of tokens, emitted as one training sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
  /// the tokens, in original word order
  pub tokens: Vec<Token>,
}

impl Sentence {
  /// create an empty sentence buffer
  pub fn new() -> Self { Sentence::default() }
  /// append a token
  pub fn push(&mut self, token: Token) { self.tokens.push(token); }
  /// number of tokens
  pub fn len(&self) -> usize { self.tokens.len() }
  /// true for a fresh buffer; empty sentences are never emitted
  pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
}

/// An ordered collection of sentences from one or more source files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
  /// the sentences, in document order
  pub sentences: Vec<Sentence>,
}

impl Corpus {
  /// create an empty corpus
  pub fn new() -> Self { Corpus::default() }
  /// append a completed sentence
  pub fn push(&mut self, sentence: Sentence) { self.sentences.push(sentence); }
  /// append all sentences of `other`, preserving their order
  pub fn merge(&mut self, other: Corpus) { self.sentences.extend(other.sentences); }
  /// number of sentences
  pub fn len(&self) -> usize { self.sentences.len() }
  /// true when no sentence has been recorded
  pub fn is_empty(&self) -> bool { self.sentences.is_empty() }
  /// total number of tokens across all sentences
  pub fn token_count(&self) -> usize {
    self.sentences.iter().map(Sentence::len).sum()
  }
  /// iterate over the sentences
  pub fn iter(&self) -> Iter<Sentence> { self.sentences.iter() }
}

/// True for a sentence-boundary marker line (a run of `=` characters)
pub fn is_boundary(line: &str) -> bool { BOUNDARY.is_match(line) }

/// Tokenize one content line: drop the phrase brackets, split on whitespace,
/// and parse each surviving `word/tag` token
pub fn tokenize_line(line: &str) -> Result<Vec<Token>, ConversionError> {
  line
    .replace('[', "")
    .replace(']', "")
    .split_whitespace()
    .map(Token::parse)
    .collect()
}
