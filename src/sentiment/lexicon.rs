//! Embedded polarity lexicon
//!
//! Maps lowercase words to polarity scores in `[-1, 1]`. The list covers the
//! vocabulary that shows up in product and service feedback; anything outside
//! it scores as unknown and is ignored by the analyzer.

use std::collections::HashMap;

#[rustfmt::skip]
const DEFAULT_WORDS: &[(&str, f64)] = &[
    // Strong positive
    ("excellent", 1.0), ("amazing", 1.0), ("outstanding", 1.0), ("fantastic", 0.9),
    ("wonderful", 0.9), ("perfect", 0.9), ("brilliant", 0.9), ("awesome", 0.9),
    ("love", 0.8), ("loved", 0.8), ("superb", 0.8), ("delightful", 0.8),
    ("impressive", 0.7), ("exceptional", 0.9), ("flawless", 0.9),
    // Moderate positive
    ("great", 0.7), ("good", 0.5), ("nice", 0.5), ("helpful", 0.5),
    ("friendly", 0.5), ("fast", 0.4), ("quick", 0.4), ("easy", 0.4),
    ("smooth", 0.4), ("reliable", 0.5), ("clean", 0.3), ("useful", 0.4),
    ("happy", 0.6), ("pleased", 0.6), ("satisfied", 0.5), ("recommend", 0.6),
    ("recommended", 0.6), ("enjoy", 0.5), ("enjoyed", 0.5), ("works", 0.3),
    ("responsive", 0.4), ("intuitive", 0.4), ("affordable", 0.4), ("value", 0.3),
    // Mild positive
    ("fine", 0.2), ("okay", 0.1), ("ok", 0.1), ("decent", 0.2),
    // Mild negative
    ("slow", -0.4), ("expensive", -0.3), ("confusing", -0.4), ("mediocre", -0.3),
    ("average", -0.1), ("noisy", -0.3), ("dated", -0.2), ("bland", -0.3),
    // Moderate negative
    ("bad", -0.5), ("poor", -0.5), ("disappointing", -0.6), ("disappointed", -0.6),
    ("frustrating", -0.6), ("frustrated", -0.6), ("annoying", -0.5), ("unhappy", -0.6),
    ("unreliable", -0.5), ("buggy", -0.6), ("crash", -0.6), ("crashes", -0.6),
    ("crashed", -0.6), ("broken", -0.6), ("difficult", -0.4), ("rude", -0.6),
    ("late", -0.4), ("dirty", -0.5), ("missing", -0.4), ("overpriced", -0.5),
    ("problem", -0.4), ("problems", -0.4), ("issue", -0.3), ("issues", -0.3),
    ("waste", -0.6), ("wasted", -0.6), ("refund", -0.4), ("complaint", -0.4),
    // Strong negative
    ("terrible", -1.0), ("horrible", -1.0), ("awful", -0.9), ("worst", -1.0),
    ("hate", -0.8), ("hated", -0.8), ("useless", -0.8), ("unacceptable", -0.8),
    ("disgusting", -0.9), ("dreadful", -0.9), ("scam", -0.9), ("never", -0.3),
];

/// Word-to-polarity lookup built once per process.
pub struct SentimentLexicon {
    scores: HashMap<&'static str, f64>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self {
            scores: DEFAULT_WORDS.iter().copied().collect(),
        }
    }

    /// Polarity of a single lowercase word, if the lexicon knows it.
    pub fn score_word(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}
