// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use octofit_tracker::config::Config;
use octofit_tracker::db::{Entity, EntityStore, Filter, FirestoreDb, MemoryStore};
use octofit_tracker::error::AppError;
use octofit_tracker::models::{Team, User};
use octofit_tracker::routes::create_router;
use octofit_tracker::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const NOW: &str = "2024-01-15T12:00:00Z";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState<MemoryStore>>) {
    create_test_app_with(Config::test_default(), MemoryStore::new())
}

#[allow(dead_code)]
pub fn create_test_app_with<S: EntityStore>(
    config: Config,
    store: S,
) -> (axum::Router, Arc<AppState<S>>) {
    let state = Arc::new(AppState::new(config, store));
    (create_router(state.clone()), state)
}

/// Seed a team and its members directly into a store.
#[allow(dead_code)]
pub async fn seed_team<S: EntityStore>(store: &S, team: &str, emails: &[&str]) {
    store
        .create(&Team::new(team, "Test team", NOW))
        .await
        .expect("create team");
    for email in emails {
        store
            .create(&User::new(email, email, Some(team), NOW))
            .await
            .expect("create user");
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store that passes through to `inner` until `writes_allowed` writes have
/// succeeded, then fails every further write with a database error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FailingStore<S> {
    pub inner: S,
    remaining: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl<S: EntityStore> FailingStore<S> {
    pub fn new(inner: S, writes_allowed: usize) -> Self {
        Self {
            inner,
            remaining: Arc::new(AtomicUsize::new(writes_allowed)),
        }
    }

    fn take_write(&self) -> Result<(), AppError> {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| AppError::Database("injected write failure".to_string()))
    }
}

impl<S: EntityStore> EntityStore for FailingStore<S> {
    async fn create<E: Entity>(&self, entity: &E) -> Result<E, AppError> {
        self.take_write()?;
        self.inner.create(entity).await
    }

    async fn delete_all<E: Entity>(&self) -> Result<usize, AppError> {
        self.take_write()?;
        self.inner.delete_all::<E>().await
    }

    async fn find<E: Entity>(&self, filter: Filter) -> Result<Vec<E>, AppError> {
        self.inner.find(filter).await
    }

    async fn save<E: Entity>(&self, entity: &E) -> Result<(), AppError> {
        self.take_write()?;
        self.inner.save(entity).await
    }

    async fn get<E: Entity>(&self, id: &str) -> Result<Option<E>, AppError> {
        self.inner.get(id).await
    }

    async fn delete<E: Entity>(&self, id: &str) -> Result<bool, AppError> {
        self.take_write()?;
        self.inner.delete::<E>(id).await
    }
}
