//! Orthographic feature predicates and their applicator.
//! Each predicate maps a word to a fixed feature tag, or to nothing; the
//! applicator appends every matching tag to a token, in predicate order.
use crate::data::Corpus;

/// A named orthographic capability: maps a word to a feature tag, or nothing
pub type Feature = fn(&str) -> Option<&'static str>;

/// `caps` when the first character is uppercase
pub fn caps(word: &str) -> Option<&'static str> {
  if word.chars().next().map_or(false, char::is_uppercase) {
    Some("caps")
  } else {
    None
  }
}

/// `s` when the word ends in `s`
pub fn ends_in_s(word: &str) -> Option<&'static str> {
  if word.ends_with('s') { Some("s") } else { None }
}

/// `ing` when the word ends in `ing`
pub fn ends_in_ing(word: &str) -> Option<&'static str> {
  if word.ends_with("ing") { Some("ing") } else { None }
}

/// `ly` when the word ends in `ly`
pub fn ends_in_ly(word: &str) -> Option<&'static str> {
  if word.ends_with("ly") { Some("ly") } else { None }
}

/// `hyphen` when the word contains `-`
pub fn contains_hyphen(word: &str) -> Option<&'static str> {
  if word.contains('-') { Some("hyphen") } else { None }
}

/// `number` when the first character is a digit
pub fn starts_with_number(word: &str) -> Option<&'static str> {
  if word.chars().next().map_or(false, char::is_numeric) {
    Some("number")
  } else {
    None
  }
}

/// `past` when the word ends in `ed`
pub fn ends_in_ed(word: &str) -> Option<&'static str> {
  if word.ends_with("ed") { Some("past") } else { None }
}

/// `person` when the word ends in `er` or `or`
pub fn ends_in_er_or(word: &str) -> Option<&'static str> {
  if word.ends_with("er") || word.ends_with("or") {
    Some("person")
  } else {
    None
  }
}

/// `act` when the word ends in `ion`
pub fn ends_in_ion(word: &str) -> Option<&'static str> {
  if word.ends_with("ion") { Some("act") } else { None }
}

/// `characterizer` when the word ends in `y`
pub fn ends_in_y(word: &str) -> Option<&'static str> {
  if word.ends_with('y') { Some("characterizer") } else { None }
}

/// `state` when the word ends in `ment`
pub fn ends_in_ment(word: &str) -> Option<&'static str> {
  if word.ends_with("ment") { Some("state") } else { None }
}

/// The standard feature list, in canonical application order
pub fn standard() -> Vec<Feature> {
  vec![
    caps,
    ends_in_s,
    ends_in_ing,
    ends_in_ly,
    contains_hyphen,
    starts_with_number,
    ends_in_ed,
    ends_in_er_or,
    ends_in_ion,
    ends_in_y,
    ends_in_ment,
  ]
}

/// Return a copy of `corpus` where every token carries the tag of each
/// matching predicate, appended in the order the predicates were supplied.
/// Predicates only ever see the word component, never the tag.
pub fn apply(corpus: &Corpus, features: &[Feature]) -> Corpus {
  let mut annotated = corpus.clone();
  for sentence in &mut annotated.sentences {
    for token in &mut sentence.tokens {
      for feature in features {
        if let Some(tag) = feature(&token.word) {
          token.features.push(tag.to_string());
        }
      }
    }
  }
  annotated
}
