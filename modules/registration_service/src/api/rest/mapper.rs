//! Mapper implementations for converting REST DTOs into contract models

use super::dto::*;
use crate::contract;

impl From<RegisterMentorRequest> for contract::Mentor {
    fn from(req: RegisterMentorRequest) -> Self {
        Self {
            username: req.username,
            name: req.name,
            email: req.email,
        }
    }
}

impl From<RegisterStudentRequest> for contract::Student {
    fn from(req: RegisterStudentRequest) -> Self {
        Self {
            username: req.username,
            name: req.name,
            email: req.email,
            college: req.college,
        }
    }
}
