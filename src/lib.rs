//! Feedback insights library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod sentiment;

pub use config::Config;
pub use error::{FeedbackError, Result};
