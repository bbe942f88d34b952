//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{LoginIdentity, Mentor, RegistrationApi, RegistrationError, Student};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process registration without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RegistrationApi for NativeClient {
    async fn register_mentor(
        &self,
        login: &LoginIdentity,
        mentor: Mentor,
    ) -> Result<Mentor, RegistrationError> {
        self.service.register_mentor(login, mentor).await
    }

    async fn register_student(
        &self,
        login: &LoginIdentity,
        student: Student,
    ) -> Result<Student, RegistrationError> {
        self.service.register_student(login, student).await
    }
}
