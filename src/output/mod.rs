//! Presentation and export of labeled feedback tables

pub mod exporter;
pub mod summary;
