//! Lexicon-based sentiment analysis

use crate::error::{FeedbackError, Result};
use crate::sentiment::lexicon::SentimentLexicon;
use log::warn;
use serde::{Deserialize, Serialize};

/// Categorical sentiment assigned to one feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Same thresholds as the polarity scorer the tool replaces: strictly
    /// positive is Positive, strictly negative is Negative, zero is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Words that flip the polarity of the word that follows them.
const NEGATIONS: &[&str] = &["not", "no", "nothing", "cannot"];

/// Lexicon-backed scorer. Built once at process start and shared by reference
/// with every request; holds no mutable state.
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::new(),
        }
    }

    /// Label one record. Scoring failures are deliberately downgraded to a
    /// Neutral label here instead of propagating: a single unscorable record
    /// must not abort the whole table. This is the only place in the crate
    /// where an error is swallowed.
    pub fn label(&self, text: &str) -> (SentimentLabel, f64) {
        match self.polarity(text) {
            Ok(polarity) => (SentimentLabel::from_polarity(polarity), polarity),
            Err(e) => {
                warn!("scoring failed, defaulting to Neutral: {}", e);
                (SentimentLabel::Neutral, 0.0)
            }
        }
    }

    /// Mean polarity of the lexicon-matched tokens, in `[-1, 1]`. Text with
    /// no matched tokens scores 0.0.
    pub fn polarity(&self, text: &str) -> Result<f64> {
        let tokens = tokenize(text);

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negated = false;

        for token in &tokens {
            if NEGATIONS.contains(&token.as_str()) || token.ends_with("n't") {
                negated = true;
                continue;
            }
            if let Some(score) = self.lexicon.score_word(token) {
                total += if negated { -score } else { score };
                matched += 1;
            }
            negated = false;
        }

        if matched == 0 {
            return Ok(0.0);
        }

        let polarity = total / matched as f64;
        if !polarity.is_finite() {
            return Err(FeedbackError::InvalidInput(format!(
                "non-finite polarity for record of {} tokens",
                tokens.len()
            )));
        }
        Ok(polarity.clamp(-1.0, 1.0))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase word tokens, apostrophes kept so contractions survive.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        let (label, score) = analyzer.label("Excellent service, great staff!");
        assert_eq!(label, SentimentLabel::Positive);
        assert!(score > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        let (label, score) = analyzer.label("Terrible quality and rude support.");
        assert_eq!(label, SentimentLabel::Negative);
        assert!(score < 0.0);
    }

    #[test]
    fn test_neutral_for_unknown_vocabulary() {
        let analyzer = SentimentAnalyzer::new();
        let (label, score) = analyzer.label("The package arrived on a Tuesday.");
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_neutral_for_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        let (label, score) = analyzer.label("");
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        let (label, _) = analyzer.label("not good at all");
        assert_eq!(label, SentimentLabel::Negative);

        let (label, _) = analyzer.label("wasn't helpful");
        assert_eq!(label, SentimentLabel::Negative);
    }

    #[test]
    fn test_case_insensitive() {
        let analyzer = SentimentAnalyzer::new();
        let (upper, _) = analyzer.label("GREAT PRODUCT");
        let (lower, _) = analyzer.label("great product");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_polarity_stays_in_range() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer
            .polarity("amazing excellent outstanding perfect brilliant")
            .unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_label_from_polarity_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.01), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.01), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }
}
