//! # The `pos2mallet` library
//! Converters for part-of-speech tagged corpora.
//! Reads the bracketed ATIS and WSJ source formats, emits the flat
//! one-token-per-line Mallet training format, optionally augments tokens
//! with orthographic feature tags, and scores tagger output against gold
//! annotations.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

extern crate lazy_static;
extern crate regex;
extern crate thiserror;
extern crate walkdir;

pub mod util;

pub mod atis;
pub mod data;
pub mod evaluator;
pub mod features;
pub mod mallet;
pub mod vocab;
pub mod wsj;
