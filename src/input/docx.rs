//! DOCX (Office Open XML) paragraph text extraction

use crate::error::{FeedbackError, Result};
use crate::input::format::FormatKind;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Pull the visible text out of a `.docx` byte buffer, one string per
/// paragraph, in document order. Runs inside a paragraph are concatenated;
/// explicit line breaks (`w:br`) and tabs are mapped to their characters.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FeedbackError::extraction(FormatKind::WordDocument, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| {
            FeedbackError::extraction(
                FormatKind::WordDocument,
                format!("missing {}: {}", DOCUMENT_PART, e),
            )
        })?
        .read_to_string(&mut xml)
        .map_err(|e| FeedbackError::extraction(FormatKind::WordDocument, e))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => paragraphs.push(String::new()),
                b"br" if in_paragraph => current.push('\n'),
                b"tab" if in_paragraph => current.push('\t'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text_run => {
                let text = e.unescape().map_err(|e| {
                    FeedbackError::extraction(FormatKind::WordDocument, e)
                })?;
                current.push_str(&text);
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedbackError::extraction(
                    FormatKind::WordDocument,
                    format!("malformed document XML: {}", e),
                ));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Strip the namespace prefix from an XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, FileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Great service, </w:t></w:r><w:r><w:t>will return</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Too slow</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_extracts_paragraphs_in_order() {
        let bytes = docx_bytes(SAMPLE);
        let paragraphs = extract_paragraphs(&bytes).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "Great service, will return".to_string(),
                String::new(),
                "Too slow".to_string(),
            ]
        );
    }

    #[test]
    fn test_unescapes_entities() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p><w:r><w:t>fast &amp; cheap</w:t></w:r></w:p></w:body></w:document>"#;
        let paragraphs = parse_document_xml(xml).unwrap();
        assert_eq!(paragraphs, vec!["fast & cheap".to_string()]);
    }

    #[test]
    fn test_not_a_zip_fails_extraction() {
        let err = extract_paragraphs(b"plainly not a zip archive").unwrap_err();
        assert!(matches!(
            err,
            crate::error::FeedbackError::ExtractionFailed {
                format: FormatKind::WordDocument,
                ..
            }
        ));
    }

    #[test]
    fn test_zip_without_document_part_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", FileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_paragraphs(&bytes).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }
}
