//! Plain-text readers for the supported document formats.
//!
//! Readers fail soft: every call yields an `Extraction`, and a failed
//! extraction contributes an empty string to the corpus.

use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

const DOCX_BODY_ENTRY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    PdfPanic,

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(String),
}

/// Outcome of reading one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Text(String),
    Failed(String),
}

impl Extraction {
    /// The extracted text, or an empty string on failure.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Failed(_) => String::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }
}

impl From<Result<String, ReadError>> for Extraction {
    fn from(result: Result<String, ReadError>) -> Self {
        match result {
            Ok(text) => Extraction::Text(text),
            Err(e) => Extraction::Failed(e.to_string()),
        }
    }
}

/// Supported document formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

const EXTENSIONS: &[(&str, DocumentKind)] = &[
    ("pdf", DocumentKind::Pdf),
    ("docx", DocumentKind::Docx),
    ("txt", DocumentKind::Txt),
];

impl DocumentKind {
    /// Case-insensitive extension lookup. `None` for unsupported files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, kind)| *kind)
    }

    pub fn extract(self, path: &Path) -> Extraction {
        let result = match self {
            DocumentKind::Pdf => read_pdf(path),
            DocumentKind::Docx => read_docx(path),
            DocumentKind::Txt => read_txt(path),
        };
        result.into()
    }
}

fn read_pdf(path: &Path) -> Result<String, ReadError> {
    // pdf-extract can panic on malformed input.
    panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path)))
        .map_err(|_| ReadError::PdfPanic)?
        .map_err(|e| ReadError::Pdf(e.to_string()))
}

fn read_docx(path: &Path) -> Result<String, ReadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_ENTRY)?.read_to_string(&mut xml)?;
    docx_xml_to_text(&xml)
}

fn read_txt(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Flattens WordprocessingML body XML into plain text, one line per paragraph.
pub fn docx_xml_to_text(xml: &str) -> Result<String, ReadError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| ReadError::Xml(e.to_string()))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text_run => {
                let unescaped = e.unescape().map_err(|e| ReadError::Xml(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
