//! Contract models for registration service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::fmt;

/// Kind of participant being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrantKind {
    Mentor,
    Student,
}

impl RegistrantKind {
    /// Human-readable label used in messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for RegistrantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A participant that can be registered exactly once, keyed by username
pub trait Registrant: Clone + Send + Sync + 'static {
    /// Which participant collection this registrant belongs to
    const KIND: RegistrantKind;

    /// Unique key of the registrant
    fn username(&self) -> &str;
}

/// Mentor record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    /// Unique username (matches the login username)
    pub username: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl Registrant for Mentor {
    const KIND: RegistrantKind = RegistrantKind::Mentor;

    fn username(&self) -> &str {
        &self.username
    }
}

/// Student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Unique username (matches the login username)
    pub username: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// College the student attends
    pub college: String,
}

impl Registrant for Student {
    const KIND: RegistrantKind = RegistrantKind::Student;

    fn username(&self) -> &str {
        &self.username
    }
}

/// Authenticated caller, produced by the login middleware
///
/// Holding one of these means the token was already verified; handlers take it
/// as an explicit argument instead of looking it up in ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginIdentity {
    username: String,
}

impl LoginIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
