//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{mentor, student};
use crate::contract::{Mentor, Student};
use sea_orm::ActiveValue::Set;

// ===== Mentor Conversions =====

impl From<mentor::Model> for Mentor {
    fn from(entity: mentor::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            email: entity.email,
        }
    }
}

impl From<&Mentor> for mentor::ActiveModel {
    fn from(model: &Mentor) -> Self {
        Self {
            username: Set(model.username.clone()),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
        }
    }
}

// ===== Student Conversions =====

impl From<student::Model> for Student {
    fn from(entity: student::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            email: entity.email,
            college: entity.college,
        }
    }
}

impl From<&Student> for student::ActiveModel {
    fn from(model: &Student) -> Self {
        Self {
            username: Set(model.username.clone()),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            college: Set(model.college.clone()),
        }
    }
}
