//! VADER lexicon scorer implementing the `SentimentScorer` port.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::domain::SentimentScores;
use crate::domain::ports::SentimentScorer;

/// Rule-based scorer using the stock VADER lexicon and emoji table.
///
/// # Examples
/// ```
/// use review_analyzer::domain::ports::SentimentScorer;
/// use review_analyzer::outbound::vader::VaderSentimentScorer;
///
/// let scorer = VaderSentimentScorer::new();
/// assert!(scorer.polarity_scores("What a wonderful meal!").compound > 0.0);
/// ```
pub struct VaderSentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentimentScorer {
    /// Build a scorer over the bundled lexicon.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderSentimentScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let scores = self.analyzer.polarity_scores(text);
        let measure = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        SentimentScores {
            neg: measure("neg"),
            neu: measure("neu"),
            pos: measure("pos"),
            compound: measure("compound"),
        }
    }
}
