//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to register participants.
//! NO HTTP - direct function calls.

use super::{
    error::RegistrationError,
    model::{LoginIdentity, Mentor, Student},
};
use async_trait::async_trait;

/// Registration API for inter-module communication
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Register a mentor on behalf of the logged-in user
    async fn register_mentor(
        &self,
        login: &LoginIdentity,
        mentor: Mentor,
    ) -> Result<Mentor, RegistrationError>;

    /// Register a student on behalf of the logged-in user
    async fn register_student(
        &self,
        login: &LoginIdentity,
        student: Student,
    ) -> Result<Student, RegistrationError>;
}
