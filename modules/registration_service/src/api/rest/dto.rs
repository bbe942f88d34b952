//! REST DTOs with serde derives for HTTP API

use serde::Deserialize;
use utoipa::ToSchema;

/// Mentor registration form
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterMentorRequest {
    /// Login username; must match the authenticated user
    #[schema(example = "alice")]
    pub username: String,

    /// Display name
    #[schema(example = "Alice")]
    pub name: String,

    /// Contact email
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Student registration form
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    /// Login username; must match the authenticated user
    #[schema(example = "bob")]
    pub username: String,

    /// Display name
    #[schema(example = "Bob")]
    pub name: String,

    /// Contact email
    #[schema(example = "bob@example.com")]
    pub email: String,

    /// College the student attends
    #[schema(example = "IIT Kharagpur")]
    pub college: String,
}

// Note: Conversion implementations live in mapper.rs
