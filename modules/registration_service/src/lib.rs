//! Registration Service Module
//!
//! Mentor and student sign-up for the program backend. Each registration is
//! create-once, keyed by the login username, and only the logged-in user may
//! register themselves.

// Public exports
pub mod contract;
pub use contract::{
    client::RegistrationApi, error::RegistrationError, LoginIdentity, Mentor, Registrant,
    RegistrantKind, Student,
};

pub mod module;
pub use module::RegistrationServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
