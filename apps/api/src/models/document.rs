use serde::{Deserialize, Serialize};

/// A file in the documents directory with its extracted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub extracted_text: String,
}

/// Metadata for `GET /documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, Unix epoch seconds.
    pub modified: f64,
}
