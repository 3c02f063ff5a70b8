//! Driven port for text sentiment scoring.
//!
//! The scoring algorithm is opaque to the domain: text goes in, four
//! polarity measures come out. Scoring is CPU-bound and synchronous.

use crate::domain::SentimentScores;

/// Port for scoring the emotional polarity of review text.
#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// Score `text`. Implementations must return `compound` in `[-1, 1]`.
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// Scorer returning neutral scores for every input.
///
/// Useful where listings are exercised but ordering is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralSentimentScorer;

impl SentimentScorer for NeutralSentimentScorer {
    fn polarity_scores(&self, _text: &str) -> SentimentScores {
        SentimentScores {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn neutral_scorer_is_neutral() {
        let scores = NeutralSentimentScorer.polarity_scores("anything at all");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }
}
