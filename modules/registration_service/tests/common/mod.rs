//! Common test utilities: in-memory repositories and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use registration_service::contract::{Mentor, Registrant, Student};
use registration_service::domain::repository::{InsertOutcome, RegistrantRepository};
use registration_service::domain::Service;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory registrant repository with call counters and failure injection
pub struct MockRegistrantRepo<R> {
    data: RwLock<HashMap<String, R>>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    fail_find: AtomicBool,
    fail_insert: AtomicBool,
    /// Report `Duplicate` on insert, as a uniqueness constraint would after a race
    race_on_insert: AtomicBool,
}

impl<R: Registrant> MockRegistrantRepo<R> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            fail_find: AtomicBool::new(false),
            fail_insert: AtomicBool::new(false),
            race_on_insert: AtomicBool::new(false),
        }
    }

    /// Put a record directly into the store
    pub fn seed(&self, registrant: R) {
        self.data
            .write()
            .insert(registrant.username().to_string(), registrant);
    }

    pub fn get(&self, username: &str) -> Option<R> {
        self.data.read().get(username).cloned()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn fail_find(&self) {
        self.fail_find.store(true, Ordering::SeqCst);
    }

    pub fn fail_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }

    pub fn race_on_insert(&self) {
        self.race_on_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R: Registrant> RegistrantRepository<R> for MockRegistrantRepo<R> {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<R>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_find.load(Ordering::SeqCst) {
            anyhow::bail!("connection reset by peer");
        }
        Ok(self.data.read().get(username).cloned())
    }

    async fn insert(&self, registrant: &R) -> anyhow::Result<InsertOutcome> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        if self.race_on_insert.load(Ordering::SeqCst) {
            return Ok(InsertOutcome::Duplicate);
        }

        let mut data = self.data.write();
        if data.contains_key(registrant.username()) {
            return Ok(InsertOutcome::Duplicate);
        }
        data.insert(registrant.username().to_string(), registrant.clone());
        Ok(InsertOutcome::Inserted)
    }
}

/// Service wired to fresh mock repositories
pub struct TestContext {
    pub service: Arc<Service>,
    pub mentors: Arc<MockRegistrantRepo<Mentor>>,
    pub students: Arc<MockRegistrantRepo<Student>>,
}

impl TestContext {
    pub fn new() -> Self {
        let mentors = Arc::new(MockRegistrantRepo::<Mentor>::new());
        let students = Arc::new(MockRegistrantRepo::<Student>::new());
        let service = Arc::new(Service::new(mentors.clone(), students.clone()));
        Self {
            service,
            mentors,
            students,
        }
    }
}

pub fn mentor(username: &str) -> Mentor {
    Mentor {
        username: username.to_string(),
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
    }
}

pub fn student(username: &str) -> Student {
    Student {
        username: username.to_string(),
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
        college: "IIT Kharagpur".to_string(),
    }
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}
