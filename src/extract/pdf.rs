use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use super::TextExtractor;
use crate::error::ExtractError;

/// Extracts text from PDF files using pdf-extract.
///
/// A parser panic becomes [`ExtractError::Pdf`], but the process panic hook
/// still runs first, so the default hook prints the panic message to stderr.
/// Binaries that want silent failures install their own hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // pdf-extract panics on some malformed documents instead of erroring.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }));

        match result {
            Ok(Ok(text)) => {
                if text.trim().is_empty() {
                    tracing::info!(path = %path.display(), "PDF has no text layer (scanned?)");
                }
                Ok(text)
            }
            Ok(Err(e)) => Err(ExtractError::Pdf {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Err(ExtractError::Pdf {
                path: path.to_path_buf(),
                message: "PDF parser panicked".to_string(),
            }),
        }
    }
}
