//! Account, profile, and competence endpoints.

use super::api::{self, ApiError};
use super::types::{Competence, LoginPayload, ProfileUpdate, User, UserProfile};

/// Authenticate via `POST /users/login`.
///
/// # Errors
///
/// Returns the server's message on bad credentials; see [`ApiError`].
pub async fn login(email: &str, password: &str) -> Result<LoginPayload, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    api::post("/users/login", &body).await
}

/// Create a candidate account via `POST /users`.
///
/// Self-service registration always creates `student` accounts; recruiter
/// and admin accounts are provisioned elsewhere.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
        "role": "student",
    });
    api::post_no_content("/users", &body).await
}

/// Fetch the authenticated user's profile via `GET /users/profile`.
///
/// Also serves as the startup token-validation request.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    api::get("/users/profile").await
}

/// Update profile fields via `PUT /users/{id}`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_profile(user_id: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    api::put(&format!("/users/{user_id}"), update).await
}

/// Fetch the competence catalogue via `GET /competences`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_competences() -> Result<Vec<Competence>, ApiError> {
    api::get("/competences").await
}

/// Attach competences to the authenticated profile via
/// `POST /users/competences`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn attach_competences(competence_ids: &[i64]) -> Result<(), ApiError> {
    let body = serde_json::json!({ "competenceIds": competence_ids });
    api::post_no_content("/users/competences", &body).await
}

/// List every account via `GET /users` (admin console).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    api::get("/users").await
}

/// Delete an account via `DELETE /users/{id}` (admin console).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/users/{user_id}")).await
}
