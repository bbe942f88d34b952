//! SeaORM repository implementations

use crate::contract::{Mentor, Student};
use crate::domain::repository::{InsertOutcome, RegistrantRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, SqlErr};
use std::sync::Arc;

use super::entity::{mentor, student};

/// Turn a uniqueness violation into `Duplicate`; every other error propagates
fn insert_outcome(result: Result<u64, DbErr>) -> Result<InsertOutcome> {
    match result {
        Ok(_) => Ok(InsertOutcome::Inserted),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Ok(InsertOutcome::Duplicate)
        }
        Err(err) => Err(err.into()),
    }
}

// ===== Mentor Repository =====

pub struct SeaOrmMentorRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMentorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrantRepository<Mentor> for SeaOrmMentorRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Mentor>> {
        let result = mentor::Entity::find_by_id(username)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, registrant: &Mentor) -> Result<InsertOutcome> {
        let active: mentor::ActiveModel = registrant.into();

        insert_outcome(
            mentor::Entity::insert(active)
                .exec_without_returning(&*self.db)
                .await,
        )
    }
}

// ===== Student Repository =====

pub struct SeaOrmStudentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStudentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrantRepository<Student> for SeaOrmStudentRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Student>> {
        let result = student::Entity::find_by_id(username)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, registrant: &Student) -> Result<InsertOutcome> {
        let active: student::ActiveModel = registrant.into();

        insert_outcome(
            student::Entity::insert(active)
                .exec_without_returning(&*self.db)
                .await,
        )
    }
}
