//! Application-tracking endpoints.

use super::api::{self, ApiError};
use super::types::{Application, ApplicationStatus};

/// List the authenticated candidate's applications via
/// `GET /applications/user`. Items embed the offer association.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_mine() -> Result<Vec<Application>, ApiError> {
    api::get("/applications/user").await
}

/// List applications received by one offer via
/// `GET /applications/offer/{id}` (recruiters). Items embed the
/// applicant association.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_for_offer(offer_id: &str) -> Result<Vec<Application>, ApiError> {
    api::get(&format!("/applications/offer/{offer_id}")).await
}

/// List every application on the platform via `GET /applications/all`
/// (admin console).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_all() -> Result<Vec<Application>, ApiError> {
    api::get("/applications/all").await
}

/// Move an application through the review pipeline via
/// `PUT /applications/{id}/status`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn set_status(application_id: &str, status: ApplicationStatus) -> Result<(), ApiError> {
    let body = serde_json::json!({ "status": status });
    api::put_no_content(&format!("/applications/{application_id}/status"), &body).await
}
