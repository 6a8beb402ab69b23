// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper implementing [`EntityStore`].
//!
//! Every entity kind lives in its own top-level collection with the
//! entity's identity as document ID.

use crate::db::{Entity, EntityStore, Filter};
use crate::error::AppError;

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Delete documents by ID in chunks, one transaction per chunk.
    async fn batch_delete(&self, collection: &str, ids: &[String]) -> Result<(), AppError> {
        let client = self.get_client()?;

        for chunk in ids.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for doc_id in chunk {
                client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(doc_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction.commit().await.map_err(|e| {
                AppError::Database(format!("Failed to commit batch deletion: {}", e))
            })?;
        }

        Ok(())
    }
}

impl EntityStore for FirestoreDb {
    async fn create<E: Entity>(&self, entity: &E) -> Result<E, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(E::COLLECTION)
            .document_id(entity.id())
            .object(entity)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete_all<E: Entity>(&self) -> Result<usize, AppError> {
        let ids: Vec<String> = self
            .find::<E>(Filter::All)
            .await?
            .iter()
            .map(Entity::id)
            .collect();

        self.batch_delete(E::COLLECTION, &ids).await?;
        tracing::debug!(collection = E::COLLECTION, count = ids.len(), "Deleted all documents");

        Ok(ids.len())
    }

    async fn find<E: Entity>(&self, filter: Filter) -> Result<Vec<E>, AppError> {
        let query = self.get_client()?.fluent().select().from(E::COLLECTION);

        match filter {
            Filter::All => query.obj::<E>().query().await,
            Filter::FieldEq { field, value } => {
                query
                    .filter(move |q| q.field(field).eq(value.clone()))
                    .obj::<E>()
                    .query()
                    .await
            }
        }
        .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn save<E: Entity>(&self, entity: &E) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .update()
            .in_col(E::COLLECTION)
            .document_id(entity.id())
            .object(entity)
            .execute::<E>()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn get<E: Entity>(&self, id: &str) -> Result<Option<E>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(E::COLLECTION)
            .obj::<E>()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete<E: Entity>(&self, id: &str) -> Result<bool, AppError> {
        // Firestore deletes are idempotent, so look first to report existence.
        if self.get::<E>(id).await?.is_none() {
            return Ok(false);
        }

        self.get_client()?
            .fluent()
            .delete()
            .from(E::COLLECTION)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(true)
    }
}
