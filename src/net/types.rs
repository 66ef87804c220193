//! Wire DTOs for the recruitment-platform REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! can decode responses without hand-written glue. The backend wraps every
//! success body in `{ "data": ... }` and emits association fields with
//! PascalCase names (`Competences`, `User`, `Offer`); the renames below keep
//! the Rust side idiomatic without touching the wire shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every REST response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Account role, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Entreprise,
    Admin,
}

impl Role {
    /// Human-readable label for badges and tables.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Candidate",
            Role::Entreprise => "Recruiter",
            Role::Admin => "Admin",
        }
    }
}

/// An authenticated account as returned by login and profile endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role driving navigation and endpoint selection.
    pub role: Role,
}

/// Payload of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub user: User,
    pub token: String,
}

/// Extended profile with competences and experiences.
///
/// The backend spells the address field `adress`; the rename keeps that
/// wire name without propagating it into Rust code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, rename = "adress")]
    pub address: Option<String>,
    #[serde(default, rename = "Competences")]
    pub competences: Vec<Competence>,
    #[serde(default, rename = "Experiences")]
    pub experiences: Vec<Experience>,
}

impl UserProfile {
    /// Collapse the profile back to the compact account record kept in the
    /// auth store.
    pub fn as_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// A catalogue skill that can be attached to profiles and offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competence {
    pub id: i64,
    pub name: String,
}

/// A work-history entry on a candidate profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

/// A job offer.
///
/// The matching fields are only populated by `GET /matching/offers`
/// (student dashboards); plain listings leave them at their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique offer identifier (UUID string).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form salary text (e.g. `"45-55k"`).
    pub salary: String,
    /// Free-form location text.
    pub localisation: String,
    /// Contract kind (e.g. `"CDI"`, `"freelance"`).
    pub contract: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    #[serde(default, rename = "Competences")]
    pub competences: Vec<Competence>,
    /// Publishing recruiter, when the endpoint includes the association.
    #[serde(default, rename = "User")]
    pub author: Option<OfferAuthor>,
    /// Percentage match against the viewing student's competences.
    #[serde(default)]
    pub matching_score: Option<u8>,
    #[serde(default)]
    pub matching_competences: Vec<Competence>,
    #[serde(default)]
    pub missing_competences: Vec<Competence>,
}

/// Recruiter association embedded in offer payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferAuthor {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `PUT /users/{id}`. Keeps the backend's `adress` spelling on
/// the wire, like [`UserProfile`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(rename = "adress", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /offers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub salary: String,
    pub localisation: String,
    pub contract: String,
}

/// Review pipeline position of an application, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Every status, in pipeline order. Used by recruiter status menus.
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Human-readable label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Under review",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A candidate's application to an offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application identifier (UUID string).
    pub id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(rename = "OfferId")]
    pub offer_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Offer association, present on candidate-facing listings.
    #[serde(default, rename = "Offer")]
    pub offer: Option<Offer>,
    /// Applicant association, present on recruiter-facing listings.
    #[serde(default, rename = "User")]
    pub applicant: Option<User>,
}

/// One turn in an AI conversation, lowercase role on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Speaker of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// Completion payload shared by the chat and CV-analysis endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,
}

/// Payload of `POST /ai/extract-text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub file_name: String,
    pub character_count: u64,
}
