//! CV file intake: format detection, size cap, and text extraction.
//!
//! TRADE-OFFS
//! ==========
//! Plain-text files are read directly in the browser. PDF and DOCX are
//! shipped to the backend extraction endpoint rather than parsed in WASM;
//! the client keeps the cheap validations (kind, size, emptiness) so bad
//! uploads fail before any network traffic.

#[cfg(test)]
#[path = "file_extract_test.rs"]
mod file_extract_test;

#[cfg(feature = "hydrate")]
use crate::net::api_ai;
#[cfg(feature = "hydrate")]
use crate::net::types::ExtractedText;

/// Upload ceiling, matching the backend's multipart limit.
pub const MAX_FILE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported CV formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
}

/// Classify a file by MIME type, falling back to the extension for
/// browsers that report an empty or generic type.
pub fn detect_kind(file_name: &str, mime: &str) -> Option<FileKind> {
    let name = file_name.to_lowercase();
    if mime == "application/pdf" || name.ends_with(".pdf") {
        Some(FileKind::Pdf)
    } else if mime == DOCX_MIME || name.ends_with(".docx") {
        Some(FileKind::Docx)
    } else if mime == "text/plain" || name.ends_with(".txt") {
        Some(FileKind::Text)
    } else {
        None
    }
}

/// Whether the file fits under [`MAX_FILE_BYTES`].
pub fn within_size_limit(bytes: f64) -> bool {
    bytes <= MAX_FILE_BYTES
}

/// User-facing message for unsupported uploads.
pub fn unsupported_format_message() -> &'static str {
    "Unsupported format. Accepted formats: PDF, DOCX, TXT"
}

/// User-facing message for oversized uploads.
pub fn oversized_message() -> &'static str {
    "The file must not exceed 10 MB"
}

/// Extract the text of a CV file.
///
/// # Errors
///
/// Returns a user-facing message when the format is unsupported, the file
/// is too large or unreadable, the backend extraction fails, or the
/// result contains no text.
#[cfg(feature = "hydrate")]
pub async fn extract_text(file: &web_sys::File) -> Result<ExtractedText, String> {
    let kind = detect_kind(&file.name(), &file.type_())
        .ok_or_else(|| unsupported_format_message().to_owned())?;
    if !within_size_limit(file.size()) {
        return Err(oversized_message().to_owned());
    }

    let extracted = match kind {
        FileKind::Text => {
            let text = read_text_file(file).await?;
            let character_count = text.chars().count() as u64;
            ExtractedText { text, file_name: file.name(), character_count }
        }
        FileKind::Pdf | FileKind::Docx => {
            api_ai::extract_text(file).await.map_err(|e| e.to_string())?
        }
    };

    if extracted.text.trim().is_empty() {
        return Err("The file appears to be empty or contains no extractable text".to_owned());
    }
    Ok(extracted)
}

#[cfg(feature = "hydrate")]
async fn read_text_file(file: &web_sys::File) -> Result<String, String> {
    let value = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|_| "Could not read the file".to_owned())?;
    value.as_string().ok_or_else(|| "Could not read the file".to_owned())
}
