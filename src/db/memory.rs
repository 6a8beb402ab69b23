// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process entity store.
//!
//! Documents are kept as JSON so the same field filters work as against
//! Firestore. Clones share the same underlying collections.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::db::{Entity, EntityStore, Filter};
use crate::error::AppError;

type Collection = BTreeMap<String, serde_json::Value>;

/// Entity store held entirely in memory.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<&'static str, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub fn count<E: Entity>(&self) -> usize {
        self.collections
            .get(E::COLLECTION)
            .map(|c| c.len())
            .unwrap_or(0)
    }
}

fn to_document<E: Entity>(entity: &E) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(entity).map_err(|e| {
        AppError::Database(format!("Failed to encode {} document: {}", E::COLLECTION, e))
    })
}

fn from_document<E: Entity>(document: &serde_json::Value) -> Result<E, AppError> {
    serde::Deserialize::deserialize(document).map_err(|e| {
        AppError::Database(format!("Failed to decode {} document: {}", E::COLLECTION, e))
    })
}

impl EntityStore for MemoryStore {
    async fn create<E: Entity>(&self, entity: &E) -> Result<E, AppError> {
        let document = to_document(entity)?;
        let id = entity.id();
        let mut collection = self.collections.entry(E::COLLECTION).or_default();

        if collection.contains_key(&id) {
            return Err(AppError::Conflict(format!("{}/{}", E::COLLECTION, id)));
        }
        collection.insert(id, document);

        Ok(entity.clone())
    }

    async fn delete_all<E: Entity>(&self) -> Result<usize, AppError> {
        let removed = self
            .collections
            .remove(E::COLLECTION)
            .map(|(_, c)| c.len())
            .unwrap_or(0);
        Ok(removed)
    }

    async fn find<E: Entity>(&self, filter: Filter) -> Result<Vec<E>, AppError> {
        let Some(collection) = self.collections.get(E::COLLECTION) else {
            return Ok(Vec::new());
        };

        collection
            .values()
            .filter(|doc| filter.matches(doc))
            .map(from_document::<E>)
            .collect()
    }

    async fn save<E: Entity>(&self, entity: &E) -> Result<(), AppError> {
        let document = to_document(entity)?;
        self.collections
            .entry(E::COLLECTION)
            .or_default()
            .insert(entity.id(), document);
        Ok(())
    }

    async fn get<E: Entity>(&self, id: &str) -> Result<Option<E>, AppError> {
        self.collections
            .get(E::COLLECTION)
            .and_then(|c| c.get(id).map(from_document::<E>))
            .transpose()
    }

    async fn delete<E: Entity>(&self, id: &str) -> Result<bool, AppError> {
        Ok(self
            .collections
            .get_mut(E::COLLECTION)
            .is_some_and(|mut c| c.remove(id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Team, User};

    fn user(email: &str, team: Option<&str>) -> User {
        User::new(email, "Test User", team, "2024-01-15T10:00:00Z")
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_identity() {
        let store = MemoryStore::new();
        store.create(&user("a@example.com", None)).await.unwrap();

        let err = store.create(&user("a@example.com", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_by_field() {
        let store = MemoryStore::new();
        store.create(&user("a@example.com", Some("Red"))).await.unwrap();
        store.create(&user("b@example.com", Some("Blue"))).await.unwrap();
        store.create(&user("c@example.com", None)).await.unwrap();

        let red = store.find::<User>(Filter::eq("team", "Red")).await.unwrap();
        assert_eq!(red.len(), 1);
        assert_eq!(red[0].email, "a@example.com");

        let all = store.find::<User>(Filter::All).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_save_overwrites_and_delete_all_counts() {
        let store = MemoryStore::new();
        let mut u = user("a@example.com", None);
        store.create(&u).await.unwrap();

        u.points = 42;
        store.save(&u).await.unwrap();
        let fetched = store.get::<User>("a@example.com").await.unwrap().unwrap();
        assert_eq!(fetched.points, 42);

        store
            .create(&Team::new("Red", "", "2024-01-15T10:00:00Z"))
            .await
            .unwrap();
        assert_eq!(store.delete_all::<User>().await.unwrap(), 1);
        assert_eq!(store.count::<User>(), 0);
        assert_eq!(store.count::<Team>(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.delete::<User>("nobody@example.com").await.unwrap());
    }
}
