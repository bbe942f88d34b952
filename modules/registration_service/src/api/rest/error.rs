//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::RegistrationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 401 for requests that carry no usable login
    pub fn unauthenticated(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_detail(detail)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: RegistrationError) -> Problem {
    match error {
        RegistrationError::Decode { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Bad Request")
                .with_detail(format!("Error decoding JSON body: {}", message))
        }

        RegistrationError::IdentityMismatch { .. } => Problem::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
        )
        .with_detail("Login username and given username do not match."),

        RegistrationError::AlreadyExists { kind, username } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Already Registered",
        )
        .with_detail(format!("{} `{}` already exists.", kind, username)),

        RegistrationError::Database => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("Database error."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::RegistrantKind;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                RegistrationError::Decode {
                    message: "EOF".to_string(),
                },
                400,
            ),
            (
                RegistrationError::IdentityMismatch {
                    login_username: "alice".to_string(),
                    given_username: "mallory".to_string(),
                },
                401,
            ),
            (
                RegistrationError::AlreadyExists {
                    kind: RegistrantKind::Mentor,
                    username: "alice".to_string(),
                },
                400,
            ),
            (RegistrationError::Database, 500),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status, status);
        }
    }

    #[test]
    fn test_mismatch_detail_does_not_leak_usernames() {
        let problem = map_domain_error(RegistrationError::IdentityMismatch {
            login_username: "alice".to_string(),
            given_username: "mallory".to_string(),
        });

        let detail = problem.detail.unwrap_or_default();
        assert!(!detail.contains("alice"));
        assert!(!detail.contains("mallory"));
    }

    #[test]
    fn test_already_exists_detail_names_kind() {
        let problem = map_domain_error(RegistrationError::AlreadyExists {
            kind: RegistrantKind::Student,
            username: "bob".to_string(),
        });

        assert_eq!(problem.detail.as_deref(), Some("Student `bob` already exists."));
    }
}
