//! Lexicon-based sentiment labeling
//!
//! Assigns each feedback record a Positive/Negative/Neutral label plus a
//! signed polarity score. The analyzer is constructed once at startup and
//! injected into the pipeline rather than looked up through a global.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{SentimentAnalyzer, SentimentLabel};
pub use lexicon::SentimentLexicon;
