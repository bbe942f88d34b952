//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{LoginIdentity, RegistrantKind, RegistrationError};
use crate::domain::Service;
use axum::{body::Bytes, http::StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Plain-text body returned on successful registration
pub fn success_message(kind: RegistrantKind) -> String {
    format!("{} registration successful.", kind)
}

/// Decode a JSON body; the Content-Type header is not consulted
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Problem> {
    serde_json::from_slice(body).map_err(|e| {
        let message = e.to_string();
        tracing::warn!(error = %message, "Error decoding JSON body");
        map_domain_error(RegistrationError::Decode { message })
    })
}

/// Register the logged-in user as a mentor
pub async fn register_mentor(
    service: Arc<Service>,
    login: LoginIdentity,
    body: Bytes,
) -> Result<(StatusCode, String), Problem> {
    let req: RegisterMentorRequest = decode_body(&body)?;

    service
        .register_mentor(&login, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, success_message(RegistrantKind::Mentor)))
}

/// Register the logged-in user as a student
pub async fn register_student(
    service: Arc<Service>,
    login: LoginIdentity,
    body: Bytes,
) -> Result<(StatusCode, String), Problem> {
    let req: RegisterStudentRequest = decode_body(&body)?;

    service
        .register_student(&login, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, success_message(RegistrantKind::Student)))
}
