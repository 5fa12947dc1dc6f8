//! Token-level evaluation of predicted tags against gold annotations,
//! with a separate score for words outside the training vocabulary
use thiserror::Error;

use crate::data::Corpus;
use crate::vocab::Vocabulary;

/// Errors raised when two corpora cannot be compared token by token
#[derive(Error, Debug)]
pub enum EvalError {
  /// gold and predicted corpora disagree on sentence count
  #[error("corpora disagree on sentence count: gold {gold}, predicted {predicted}")]
  SentenceMismatch {
    /// sentences in the gold corpus
    gold: usize,
    /// sentences in the predicted corpus
    predicted: usize,
  },
  /// one sentence pair disagrees on token count
  #[error("sentence {index} disagrees on token count: gold {gold}, predicted {predicted}")]
  TokenMismatch {
    /// zero-based index of the offending sentence
    index: usize,
    /// tokens in the gold sentence
    gold: usize,
    /// tokens in the predicted sentence
    predicted: usize,
  },
}

/// Counts gathered by one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenAccuracy {
  /// tokens whose predicted tag matched gold
  pub correct: usize,
  /// all compared tokens
  pub total: usize,
  /// correctly tagged tokens absent from the training vocabulary
  pub oov_correct: usize,
  /// compared tokens absent from the training vocabulary
  pub oov_total: usize,
}

impl TokenAccuracy {
  /// fraction of tokens tagged correctly
  pub fn accuracy(&self) -> f64 {
    self.correct as f64 / self.total as f64
  }
  /// fraction of out-of-vocabulary tokens tagged correctly
  pub fn oov_accuracy(&self) -> f64 {
    self.oov_correct as f64 / self.oov_total as f64
  }
}

/// Scores predicted corpora against gold, tracking which words were never
/// seen during training
pub struct TokenAccuracyEvaluator {
  vocabulary: Vocabulary,
}

impl TokenAccuracyEvaluator {
  /// One-time vocabulary setup from the training corpus
  pub fn new(train: &Corpus) -> Self {
    TokenAccuracyEvaluator {
      vocabulary: Vocabulary::from_corpus(train),
    }
  }

  /// Walk `gold` and `predicted` in lock-step and count tag agreement.
  /// The corpora must align sentence-for-sentence and token-for-token.
  pub fn evaluate(&self, gold: &Corpus, predicted: &Corpus) -> Result<TokenAccuracy, EvalError> {
    if gold.len() != predicted.len() {
      return Err(EvalError::SentenceMismatch {
        gold: gold.len(),
        predicted: predicted.len(),
      });
    }

    let mut counts = TokenAccuracy::default();
    for (index, (gold_sentence, predicted_sentence)) in
      gold.iter().zip(predicted.iter()).enumerate()
    {
      if gold_sentence.len() != predicted_sentence.len() {
        return Err(EvalError::TokenMismatch {
          index,
          gold: gold_sentence.len(),
          predicted: predicted_sentence.len(),
        });
      }
      for (gold_token, predicted_token) in gold_sentence
        .tokens
        .iter()
        .zip(predicted_sentence.tokens.iter())
      {
        let correct = gold_token.pos == predicted_token.pos;
        counts.total += 1;
        if correct {
          counts.correct += 1;
        }
        if !self.vocabulary.contains(&gold_token.word) {
          counts.oov_total += 1;
          if correct {
            counts.oov_correct += 1;
          }
        }
      }
    }
    Ok(counts)
  }
}
