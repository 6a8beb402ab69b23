// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! Services only see the [`EntityStore`] trait: create, bulk delete, lookup
//! by field and save-by-identity. [`FirestoreDb`] backs production and
//! [`MemoryStore`] backs tests and local runs.

pub mod firestore;
pub mod memory;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

pub use self::firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";
    pub const ACTIVITIES: &str = "activities";
    pub const LEADERBOARD: &str = "leaderboard";
    pub const WORKOUTS: &str = "workouts";
}

/// A record stored in its own collection, keyed by a string identity.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    /// Document ID.
    fn id(&self) -> String;
}

/// Field predicate for [`EntityStore::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    FieldEq { field: &'static str, value: String },
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Filter::FieldEq {
            field,
            value: value.into(),
        }
    }

    /// Check a serialized document against the filter.
    pub fn matches(&self, document: &serde_json::Value) -> bool {
        match self {
            Filter::All => true,
            Filter::FieldEq { field, value } => {
                document.get(*field).and_then(|v| v.as_str()) == Some(value.as_str())
            }
        }
    }
}

/// Storage operations the services depend on.
///
/// Every call is a single awaited round-trip; nothing here wraps several
/// calls in a transaction.
pub trait EntityStore: Clone + Send + Sync + 'static {
    /// Insert a new record. Fails if the identity is already taken.
    fn create<E: Entity>(&self, entity: &E) -> impl Future<Output = Result<E, AppError>> + Send;

    /// Delete every record of a kind, returning how many were removed.
    fn delete_all<E: Entity>(&self) -> impl Future<Output = Result<usize, AppError>> + Send;

    /// All records of a kind matching the filter.
    fn find<E: Entity>(
        &self,
        filter: Filter,
    ) -> impl Future<Output = Result<Vec<E>, AppError>> + Send;

    /// Create or overwrite a record by identity.
    fn save<E: Entity>(&self, entity: &E) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Look up a single record by identity.
    fn get<E: Entity>(&self, id: &str) -> impl Future<Output = Result<Option<E>, AppError>> + Send;

    /// Delete a single record. Returns `false` if it did not exist.
    fn delete<E: Entity>(&self, id: &str) -> impl Future<Output = Result<bool, AppError>> + Send;
}
