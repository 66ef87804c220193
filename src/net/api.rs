//! REST client wrapper for the platform API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the persisted session on every request.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! SESSION INVALIDATION
//! ====================
//! Any 401/403 response, from any endpoint, triggers the forced-logout
//! protocol: clear the persisted session, broadcast a logout event, and
//! navigate to `/login`. A module-scoped atomic guard ensures that when
//! several in-flight requests fail around the same moment, exactly one of
//! them performs the redirect and storage clear; the rest only see the
//! error. Failures observed while already on `/login` or `/register` never
//! redirect. This is the only path that clears storage automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use crate::net::types::Envelope;
#[cfg(feature = "hydrate")]
use crate::util::logout_bus::{self, LogoutReason};
#[cfg(feature = "hydrate")]
use crate::util::session_store;

/// Typed failure for every REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session (401/403). The forced-logout
    /// protocol has already run (or been suppressed) by the time callers
    /// see this.
    #[error("session expired ({status})")]
    SessionExpired { status: u16 },
    /// Any other non-success status. The message is the server's when the
    /// error body carried one, a generic fallback otherwise.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error for SSR builds, where no browser fetch exists.
    pub(crate) fn unavailable() -> ApiError {
        ApiError::Network("not available on server".to_owned())
    }
}

/// Final user-facing message for a non-auth failure status.
#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16, server_message: Option<&str>) -> String {
    match server_message {
        Some(message) => message.to_owned(),
        None => format!("request failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("/api{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Routes reachable without a session; auth failures seen there must not
/// trigger a redirect loop.
#[cfg(any(test, feature = "hydrate"))]
fn is_public_path(path: &str) -> bool {
    matches!(path, "/login" | "/register")
}

/// One-shot guard against duplicate forced redirects. Reset only by page
/// reload; the test hook below exists because the process outlives a
/// "page" in native tests.
#[cfg(any(test, feature = "hydrate"))]
static REDIRECTING: AtomicBool = AtomicBool::new(false);

/// Decide whether this auth failure should drive the forced logout.
///
/// Returns `true` for exactly one caller per page load, and never while
/// the current location is already a public route. The claim happens at
/// the point of detection, before any asynchronous yield, so two requests
/// failing in the same tick cannot both win.
#[cfg(any(test, feature = "hydrate"))]
fn claim_forced_logout(current_path: &str) -> bool {
    if REDIRECTING.load(Ordering::SeqCst) {
        return false;
    }
    if is_public_path(current_path) {
        return false;
    }
    !REDIRECTING.swap(true, Ordering::SeqCst)
}

#[cfg(test)]
fn reset_forced_logout() {
    REDIRECTING.store(false, Ordering::SeqCst);
}

/// Run the forced-logout protocol if this failure is the first one seen.
#[cfg(feature = "hydrate")]
fn force_logout_redirect() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    if !claim_forced_logout(&path) {
        return;
    }
    session_store::clear();
    logout_bus::publish(LogoutReason::TokenExpired);
    let _ = window.location().set_href("/login");
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Attach the persisted bearer token, when one exists. A missing or
/// unreadable session never blocks the request; it just goes out
/// unauthenticated.
#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match session_store::token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

/// Shared response prelude: intercept session invalidation and map any
/// other non-success status to a typed error.
///
/// The auth-failure branch is fully synchronous with detection: the
/// guard is claimed before the error is handed back or anything awaits.
#[cfg(feature = "hydrate")]
async fn intercept_failures(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if is_auth_failure(status) {
        force_logout_redirect();
        return Err(ApiError::SessionExpired { status });
    }
    if !resp.ok() {
        let server_message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        return Err(ApiError::Status {
            status,
            message: status_message(status, server_message.as_deref()),
        });
    }
    Ok(())
}

/// Full response path: [`intercept_failures`], then unwrap the
/// `{ "data": ... }` envelope.
#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    intercept_failures(&resp).await?;
    resp.json::<Envelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Status-only variant of [`decode_response`] for endpoints whose body the
/// caller does not consume.
#[cfg(feature = "hydrate")]
async fn check_response(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    intercept_failures(&resp).await
}

/// `GET {path}`, unwrapping the data envelope.
///
/// # Errors
///
/// See [`ApiError`]; auth failures have already run the forced-logout
/// protocol when this returns.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// `POST {path}` with a JSON body, unwrapping the data envelope.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `POST {path}` with a JSON body, discarding the response body.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `PUT {path}` with a JSON body, unwrapping the data envelope.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn put<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `PUT {path}` with a JSON body, discarding the response body.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn put_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `DELETE {path}`, discarding the response body.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::delete(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// `POST {path}` with a JSON body, decoding a bare (non-enveloped)
/// response body. The AI generation endpoint responds this way.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn post_plain<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_response_then(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// Like [`decode_response`] but without the envelope unwrap.
#[cfg(feature = "hydrate")]
async fn check_response_then<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    intercept_failures(&resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST {path}` with a multipart form body (file upload), unwrapping the
/// data envelope. The browser sets the multipart boundary header itself.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "hydrate")]
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp).await
}
