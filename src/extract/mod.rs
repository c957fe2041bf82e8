//! Text extraction from resume files

mod pdf;

use std::path::Path;

pub use pdf::PdfExtractor;

use crate::error::ExtractError;

/// Turns a document on disk into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Reads `.txt` and `.md` files as UTF-8 (lossy).
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Dispatches on the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoExtractor;

impl TextExtractor for AutoExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        extractor_for(path)?.extract(path)
    }
}

/// Picks the extractor matching `path`'s extension.
pub fn extractor_for(path: &Path) -> Result<&'static dyn TextExtractor, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Ok(&PdfExtractor),
        "txt" | "md" | "text" => Ok(&PlainTextExtractor),
        _ => Err(ExtractError::Unsupported(path.to_path_buf())),
    }
}
