//! Contract error types for registration service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::RegistrantKind;

/// Registration domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Request body could not be decoded into the expected fields
    #[error("Error decoding JSON body: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },

    /// Body username differs from the authenticated login username
    #[error("Login username `{login_username}` and given username `{given_username}` do not match")]
    IdentityMismatch {
        login_username: String,
        given_username: String,
    },

    /// A record with this username is already registered
    #[error("{kind} `{username}` already exists")]
    AlreadyExists {
        kind: RegistrantKind,
        username: String,
    },

    /// Lookup or insert failed; the cause is logged where it happens
    #[error("Database error")]
    Database,
}
