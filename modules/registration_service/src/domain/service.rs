//! Domain service - registration workflow

use super::repository::{InsertOutcome, RegistrantRepository};
use crate::contract::{LoginIdentity, Mentor, Registrant, RegistrationError, Student};
use std::sync::Arc;

/// Domain service for mentor and student registration
pub struct Service {
    mentor_repo: Arc<dyn RegistrantRepository<Mentor>>,
    student_repo: Arc<dyn RegistrantRepository<Student>>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        mentor_repo: Arc<dyn RegistrantRepository<Mentor>>,
        student_repo: Arc<dyn RegistrantRepository<Student>>,
    ) -> Self {
        Self {
            mentor_repo,
            student_repo,
        }
    }

    /// Register a mentor for the logged-in user
    pub async fn register_mentor(
        &self,
        login: &LoginIdentity,
        mentor: Mentor,
    ) -> Result<Mentor, RegistrationError> {
        register(self.mentor_repo.as_ref(), login, mentor).await
    }

    /// Register a student for the logged-in user
    pub async fn register_student(
        &self,
        login: &LoginIdentity,
        student: Student,
    ) -> Result<Student, RegistrationError> {
        register(self.student_repo.as_ref(), login, student).await
    }
}

/// Create-once registration shared by every registrant kind.
///
/// The identity check happens before any repository access. A lookup that
/// finds nothing is the only path that reaches the insert.
pub async fn register<R: Registrant>(
    repo: &dyn RegistrantRepository<R>,
    login: &LoginIdentity,
    registrant: R,
) -> Result<R, RegistrationError> {
    let kind = R::KIND;
    let username = registrant.username();

    if username != login.username() {
        tracing::warn!(
            target: "security",
            jwt_username = login.username(),
            given_username = username,
            %kind,
            "POSSIBLE SESSION HIJACKING"
        );
        return Err(RegistrationError::IdentityMismatch {
            login_username: login.username().to_string(),
            given_username: username.to_string(),
        });
    }

    let existing = repo.find_by_username(username).await.map_err(|e| {
        tracing::error!(%kind, username, error = ?e, "Database error during existence check");
        RegistrationError::Database
    })?;

    if existing.is_some() {
        tracing::warn!(%kind, username, "Registrant already exists");
        return Err(already_exists::<R>(username));
    }

    let outcome = repo.insert(&registrant).await.map_err(|e| {
        tracing::error!(%kind, username, error = ?e, "Database error during insert");
        RegistrationError::Database
    })?;

    match outcome {
        InsertOutcome::Inserted => {
            tracing::info!(%kind, username, "Registration successful");
            Ok(registrant)
        }
        InsertOutcome::Duplicate => {
            tracing::warn!(%kind, username, "Registrant created concurrently, insert rejected");
            Err(already_exists::<R>(username))
        }
    }
}

fn already_exists<R: Registrant>(username: &str) -> RegistrationError {
    RegistrationError::AlreadyExists {
        kind: R::KIND,
        username: username.to_string(),
    }
}
