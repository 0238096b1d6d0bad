//! Document-to-text extraction for uploaded resumes and cover letters.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use thiserror::Error;
use zip::ZipArchive;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
}

impl FileType {
    /// Maps a file extension (case-insensitive, leading dot optional) to a file type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            "txt" | "text" | "md" => Some(FileType::Text),
            _ => None,
        }
    }

    /// Resolves the type from a file name, falling back to magic-byte sniffing.
    pub fn detect(file_name: Option<&str>, data: &[u8]) -> Option<Self> {
        let by_name = file_name
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext));

        by_name.or_else(|| {
            if data.starts_with(b"%PDF-") {
                Some(FileType::Pdf)
            } else if data.len() > 4 && data.starts_with(b"PK") {
                Some(FileType::Docx)
            } else if std::str::from_utf8(data).is_ok() {
                Some(FileType::Text)
            } else {
                None
            }
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Text => "txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("Document contains no extractable text")]
    EmptyDocument,
}

/// Extracts plain text from an uploaded document.
///
/// Line endings are normalized to `\n` and trailing whitespace is trimmed per line.
pub fn extract_text(data: &[u8], file_type: FileType) -> Result<String, ExtractError> {
    let raw = match file_type {
        FileType::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        FileType::Docx => extract_docx(data)?,
        FileType::Text => String::from_utf8_lossy(data).into_owned(),
    };

    let text = normalize_document_text(&raw);
    if text.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    Ok(text)
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    text_from_document_xml(&xml)
}

/// Collects `<w:t>` runs from WordprocessingML; `</w:p>` and `<w:br/>` become newlines.
fn text_from_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = XmlReader::from_str(xml);
    reader.trim_text(false);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) if is_tag(start.name().as_ref(), b"t") => in_run_text = true,
            Ok(Event::End(end)) if is_tag(end.name().as_ref(), b"t") => in_run_text = false,
            Ok(Event::Text(text)) if in_run_text => {
                let text = text
                    .unescape()
                    .map_err(|e| ExtractError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::End(end)) if is_tag(end.name().as_ref(), b"p") => out.push('\n'),
            Ok(Event::Empty(empty)) if is_tag(empty.name().as_ref(), b"br") => out.push('\n'),
            Ok(Event::Empty(empty)) if is_tag(empty.name().as_ref(), b"tab") => out.push('\t'),
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

/// Matches `tag` with or without a namespace prefix (`p` and `w:p`).
fn is_tag(name: &[u8], tag: &[u8]) -> bool {
    if name == tag {
        return true;
    }
    name.len() > tag.len() && name.ends_with(tag) && name[name.len() - tag.len() - 1] == b':'
}

fn normalize_document_text(text: &str) -> String {
    let normalized = text
        .replace('\u{0000}', "")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let normalized = normalized.trim_start_matches('\u{FEFF}');

    normalized
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
