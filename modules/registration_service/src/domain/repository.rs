//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Registrant;
use anyhow::Result;
use async_trait::async_trait;

/// Result of an insert that did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Row was written
    Inserted,
    /// Row was rejected by the username uniqueness constraint
    Duplicate,
}

/// Repository for one registrant collection, keyed by username
#[async_trait]
pub trait RegistrantRepository<R: Registrant>: Send + Sync {
    /// Find a registrant by username; `Ok(None)` when absent
    async fn find_by_username(&self, username: &str) -> Result<Option<R>>;

    /// Insert a new registrant
    async fn insert(&self, registrant: &R) -> Result<InsertOutcome>;
}
