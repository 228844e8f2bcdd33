//! DOCX text extraction: reads `word/document.xml` and keeps the text runs.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

fn corrupt(detail: impl ToString) -> ExtractError {
    ExtractError::Corrupt {
        kind: "docx",
        detail: detail.to_string(),
    }
}

/// One output line per paragraph; `w:tab` becomes a tab and `w:br` a newline.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(corrupt)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(corrupt)?
        .read_to_string(&mut xml)
        .map_err(corrupt)?;

    document_xml_to_text(&xml)
}

fn document_xml_to_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(corrupt)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => out.push_str(&t.unescape().map_err(corrupt)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
