//! AI-feature endpoints: chat, CV analysis, text extraction, offer
//! description generation. All of them proxy through the backend to the
//! AI service; the client never talks to a model provider directly.

use super::api::{self, ApiError};
use super::types::{ChatMessage, Completion};
#[cfg(feature = "hydrate")]
use super::types::ExtractedText;

const CHAT_TEMPERATURE: f64 = 0.7;
const CHAT_MAX_TOKENS: u32 = 1000;

/// Send a conversation to `POST /ai/chat` and return the assistant turn.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn chat(messages: &[ChatMessage]) -> Result<Completion, ApiError> {
    let body = serde_json::json!({
        "messages": messages,
        "temperature": CHAT_TEMPERATURE,
        "max_tokens": CHAT_MAX_TOKENS,
    });
    api::post("/ai/chat", &body).await
}

/// Analyze CV text via `POST /ai/analyze-cv`, optionally against a target
/// job description.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn analyze_cv(cv_text: &str, job_description: Option<&str>) -> Result<Completion, ApiError> {
    let body = serde_json::json!({
        "cv_text": cv_text,
        "job_description": job_description,
    });
    api::post("/ai/analyze-cv", &body).await
}

/// Generate an offer description via `POST /ai/generate-job-description`.
///
/// This endpoint responds with a bare `{ "content": ... }` body, not the
/// usual data envelope.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn generate_job_description(
    title: &str,
    company: &str,
    requirements: &[String],
    skills: &[String],
) -> Result<Completion, ApiError> {
    let body = serde_json::json!({
        "title": title,
        "company": company,
        "requirements": requirements,
        "skills": skills,
    });
    api::post_plain("/ai/generate-job-description", &body).await
}

/// Upload a CV file to `POST /ai/extract-text` (multipart) and get its
/// text back. Used for the binary formats the client does not parse
/// itself; see `util::file_extract`.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "hydrate")]
pub async fn extract_text(file: &web_sys::File) -> Result<ExtractedText, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    api::post_multipart("/ai/extract-text", form).await
}
