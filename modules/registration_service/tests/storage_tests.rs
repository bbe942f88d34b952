//! SeaORM repository tests against in-memory SQLite

use registration_service::contract::{LoginIdentity, Mentor, RegistrationError, Student};
use registration_service::domain::repository::{InsertOutcome, RegistrantRepository};
use registration_service::domain::Service;
use registration_service::infra::storage::migrations::Migrator;
use registration_service::infra::storage::repositories::{
    SeaOrmMentorRepository, SeaOrmStudentRepository,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

async fn setup_db() -> Arc<DatabaseConnection> {
    // A single pooled connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

fn mentor(username: &str) -> Mentor {
    Mentor {
        username: username.to_string(),
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
    }
}

fn student(username: &str) -> Student {
    Student {
        username: username.to_string(),
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
        college: "IIT Kharagpur".to_string(),
    }
}

#[tokio::test]
async fn test_mentor_insert_then_find() {
    let repo = SeaOrmMentorRepository::new(setup_db().await);

    assert_eq!(repo.find_by_username("alice").await.unwrap(), None);
    assert_eq!(
        repo.insert(&mentor("alice")).await.unwrap(),
        InsertOutcome::Inserted
    );
    assert_eq!(
        repo.find_by_username("alice").await.unwrap(),
        Some(mentor("alice"))
    );
}

#[tokio::test]
async fn test_student_insert_then_find() {
    let repo = SeaOrmStudentRepository::new(setup_db().await);

    repo.insert(&student("bob")).await.unwrap();

    let found = repo.find_by_username("bob").await.unwrap().unwrap();
    assert_eq!(found, student("bob"));
}

#[tokio::test]
async fn test_duplicate_insert_reports_duplicate() {
    let repo = SeaOrmMentorRepository::new(setup_db().await);

    repo.insert(&mentor("alice")).await.unwrap();
    let second = Mentor {
        name: "Impostor".to_string(),
        ..mentor("alice")
    };

    assert_eq!(
        repo.insert(&second).await.unwrap(),
        InsertOutcome::Duplicate
    );
    assert_eq!(
        repo.find_by_username("alice").await.unwrap(),
        Some(mentor("alice"))
    );
}

#[tokio::test]
async fn test_service_over_sqlite_registers_once() {
    let db = setup_db().await;
    let service = Service::new(
        Arc::new(SeaOrmMentorRepository::new(db.clone())),
        Arc::new(SeaOrmStudentRepository::new(db.clone())),
    );
    let login = LoginIdentity::new("alice");

    service.register_mentor(&login, mentor("alice")).await.unwrap();
    let err = service
        .register_mentor(&login, mentor("alice"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::AlreadyExists { .. }));
    let students = SeaOrmStudentRepository::new(db);
    assert_eq!(students.find_by_username("alice").await.unwrap(), None);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = setup_db().await;
    Migrator::up(db.as_ref(), None).await.unwrap();
}
