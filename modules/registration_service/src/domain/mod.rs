//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{InsertOutcome, RegistrantRepository};
pub use service::Service;
