//! Tests for the token-accuracy evaluator

extern crate pos2mallet;

use pos2mallet::data::{Corpus, Sentence, Token};
use pos2mallet::evaluator::{EvalError, TokenAccuracyEvaluator};

fn corpus_of(tokens: &[&str]) -> Corpus {
  let mut sentence = Sentence::new();
  for token in tokens {
    sentence.push(Token::parse(token).unwrap());
  }
  let mut corpus = Corpus::new();
  corpus.push(sentence);
  corpus
}

#[test]
fn identical_corpora_score_one() {
  let gold = corpus_of(&["List/VB", "the/DT", "flights/NNS"]);
  let evaluator = TokenAccuracyEvaluator::new(&gold);
  let counts = evaluator.evaluate(&gold, &gold.clone()).unwrap();
  assert_eq!(counts.correct, 3);
  assert_eq!(counts.total, 3);
  assert_eq!(counts.oov_total, 0);
  assert!((counts.accuracy() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn disagreements_and_oov_words_are_counted() {
  let train = corpus_of(&["the/DT", "flights/NNS"]);
  let gold = corpus_of(&["the/DT", "flights/NNS", "Minneapolis/NNP"]);
  let predicted = corpus_of(&["the/DT", "flights/VBZ", "Minneapolis/NNP"]);
  let evaluator = TokenAccuracyEvaluator::new(&train);

  let counts = evaluator.evaluate(&gold, &predicted).unwrap();
  assert_eq!(counts.total, 3);
  assert_eq!(counts.correct, 2);
  // "Minneapolis" never occurred in training
  assert_eq!(counts.oov_total, 1);
  assert_eq!(counts.oov_correct, 1);
  assert!((counts.accuracy() - 2.0 / 3.0).abs() < f64::EPSILON);
  assert!((counts.oov_accuracy() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn sentence_count_mismatch_is_an_error() {
  let gold = corpus_of(&["the/DT"]);
  let mut predicted = gold.clone();
  predicted.push(Sentence::new());
  let evaluator = TokenAccuracyEvaluator::new(&gold);
  match evaluator.evaluate(&gold, &predicted) {
    Err(EvalError::SentenceMismatch { gold: 1, predicted: 2 }) => {},
    other => panic!("expected a sentence mismatch, got {:?}", other),
  }
}

#[test]
fn token_count_mismatch_is_an_error() {
  let gold = corpus_of(&["the/DT", "flights/NNS"]);
  let predicted = corpus_of(&["the/DT"]);
  let evaluator = TokenAccuracyEvaluator::new(&gold);
  match evaluator.evaluate(&gold, &predicted) {
    Err(EvalError::TokenMismatch { index: 0, gold: 2, predicted: 1 }) => {},
    other => panic!("expected a token mismatch, got {:?}", other),
  }
}
