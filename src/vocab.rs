//! Vocabulary records over converted corpora
use std::collections::HashMap;

use crate::data::Corpus;

/// Records the distinct words of a corpus, in order of first appearance
pub struct Vocabulary {
  /// hashmap for the records
  pub map: HashMap<String, usize>,
  /// index of the next word
  index: usize,
}
impl Default for Vocabulary {
  fn default() -> Vocabulary {
    Vocabulary { map: HashMap::new(), index: 0 }
  }
}
impl Vocabulary {
  /// create a new, empty vocabulary
  pub fn new() -> Self { Vocabulary::default() }
  /// record every token word of `corpus`
  pub fn from_corpus(corpus: &Corpus) -> Self {
    let mut vocabulary = Vocabulary::new();
    for sentence in corpus.iter() {
      for token in &sentence.tokens {
        vocabulary.insert(token.word.clone());
      }
    }
    vocabulary
  }
  /// insert a new word into the vocabulary (if it hasn't been inserted yet)
  pub fn insert(&mut self, word: String) {
    let map = &mut self.map;
    // Only record if new
    if !map.contains_key(&word) {
      self.index += 1;
      map.insert(word, self.index);
    }
  }
  /// true when `word` has been recorded
  pub fn contains(&self, word: &str) -> bool { self.map.contains_key(word) }
  /// get the entries of the vocabulary sorted by first appearance
  pub fn sorted(&self) -> Vec<(String, usize)> {
    let mut as_vec = self.map.clone().into_iter().collect::<Vec<_>>();
    as_vec.sort_by(|a, b| a.1.cmp(&b.1));
    as_vec
  }
  /// get the number of distinct words recorded
  pub fn count(&self) -> usize { self.index }
}

/// Records the frequencies of single words
pub struct WordFrequencies {
  /// hashmap for the occurrence counts
  pub map: HashMap<String, usize>,
}
impl Default for WordFrequencies {
  fn default() -> WordFrequencies {
    WordFrequencies { map: HashMap::new() }
  }
}
impl WordFrequencies {
  /// create a new, empty frequency record
  pub fn new() -> Self { WordFrequencies::default() }
  /// count every token word of `corpus`
  pub fn from_corpus(corpus: &Corpus) -> Self {
    let mut frequencies = WordFrequencies::new();
    for sentence in corpus.iter() {
      for token in &sentence.tokens {
        frequencies.insert(token.word.clone());
      }
    }
    frequencies
  }
  /// get the count recorded for `word`
  pub fn get(&self, word: &str) -> usize {
    match self.map.get(word) {
      Some(count) => *count,
      None => 0,
    }
  }
  /// count one occurrence of a word
  pub fn insert(&mut self, word: String) {
    let counter = self.map.entry(word).or_insert(0);
    *counter += 1;
  }
  /// get the counted words, sorted by frequency
  pub fn sorted(&self) -> Vec<(String, usize)> {
    let mut as_vec = self.map.clone().into_iter().collect::<Vec<_>>();
    as_vec.sort_by(|a, b| a.1.cmp(&b.1));
    as_vec
  }
  /// get the number of different words counted
  pub fn count(&self) -> usize { self.map.len() }
}
