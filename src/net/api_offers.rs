//! Job-offer endpoints.

use super::api::{self, ApiError};
use super::types::{NewOffer, Offer};

/// List all published offers via `GET /offers`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list() -> Result<Vec<Offer>, ApiError> {
    api::get("/offers").await
}

/// List offers scored against the authenticated student's competences via
/// `GET /matching/offers`. Payload items carry `matching_score` and the
/// matching/missing competence lists.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_matching() -> Result<Vec<Offer>, ApiError> {
    api::get("/matching/offers").await
}

/// Fetch a single offer via `GET /offers/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch(offer_id: &str) -> Result<Offer, ApiError> {
    api::get(&format!("/offers/{offer_id}")).await
}

/// Publish an offer via `POST /offers` (recruiters).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn create(offer: &NewOffer) -> Result<Offer, ApiError> {
    api::post("/offers", offer).await
}

/// Delete an offer via `DELETE /offers/{id}` (admin console).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn remove(offer_id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/offers/{offer_id}")).await
}
