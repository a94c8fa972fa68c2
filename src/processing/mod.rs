//! Record normalization and pipeline orchestration

pub mod normalizer;
pub mod pipeline;
pub mod table;

pub use table::{Table, TEXT_COLUMN};
