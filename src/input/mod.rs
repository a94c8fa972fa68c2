//! Input handling: format detection and text extraction

pub mod docx;
pub mod extractor;
pub mod format;
pub mod manager;
