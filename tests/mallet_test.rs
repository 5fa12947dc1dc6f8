//! Tests for the Mallet flat-format writer and reader

extern crate pos2mallet;

use std::env;
use std::fs;

use pos2mallet::{atis, features, mallet};

#[test]
fn written_shape_matches_the_corpus() {
  let corpus = atis::read_corpus("tests/resources/atis/atis3_sample.pos").unwrap();
  let out = env::temp_dir().join("pos2mallet_shape.pos");
  mallet::write_file(&corpus, &out).unwrap();

  let raw = fs::read_to_string(&out).unwrap();
  let expected_lines: usize = corpus.iter().map(|sentence| sentence.len() + 1).sum();
  assert_eq!(raw.lines().count(), expected_lines);
  // one blank line after every sentence, including the last
  assert!(raw.ends_with("\n\n"));
  let mut cursor = 0;
  for sentence in corpus.iter() {
    cursor += sentence.len();
    assert_eq!(raw.lines().nth(cursor), Some(""));
    cursor += 1;
  }
  fs::remove_file(&out).unwrap();
}

#[test]
fn reader_inverts_writer() {
  let corpus = atis::read_corpus("tests/resources/atis/atis3_sample.pos").unwrap();
  let annotated = features::apply(&corpus, &features::standard());
  let out = env::temp_dir().join("pos2mallet_roundtrip.pos");
  mallet::write_file(&annotated, &out).unwrap();
  let reread = mallet::read_file(&out).unwrap();
  assert_eq!(reread, annotated);
  fs::remove_file(&out).unwrap();
}

#[test]
fn destination_is_overwritten() {
  let big = atis::read_corpus("tests/resources/atis/atis3_sample.pos").unwrap();
  let small = atis::read_corpus("tests/resources/atis/atis3_single.pos").unwrap();
  let out = env::temp_dir().join("pos2mallet_overwrite.pos");
  mallet::write_file(&big, &out).unwrap();
  mallet::write_file(&small, &out).unwrap();
  let raw = fs::read_to_string(&out).unwrap();
  assert_eq!(raw, "List VB\nthe DT\nflights NNS\n\n");
  fs::remove_file(&out).unwrap();
}

#[test]
fn short_line_fails_the_read() {
  let out = env::temp_dir().join("pos2mallet_short_line.pos");
  fs::write(&out, "List VB\nflights\n\n").unwrap();
  match mallet::read_file(&out) {
    Err(pos2mallet::data::ConversionError::MalformedToken(line)) => {
      assert_eq!(line, "flights")
    },
    other => panic!("expected a malformed token error, got {:?}", other),
  }
  fs::remove_file(&out).unwrap();
}
