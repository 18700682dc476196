//! MongoDB access for the API.
//!
//! The store degrades instead of crashing: missing configuration or a bad
//! connection string yields a disabled handle, and every call against it
//! fails with a database error that the HTTP layer turns into a 500. The
//! server itself keeps serving.

use crate::config::ApiConfig;
use crate::error::AppError;
use futures::TryStreamExt;
use mongodb::{
    bson::{Bson, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone)]
pub struct DocumentStore {
    db: Option<Database>,
}

impl DocumentStore {
    /// Build a store handle from configuration. Never fails; an absent or
    /// unusable configuration produces a disabled handle.
    pub async fn connect(config: &ApiConfig) -> Self {
        let (uri, database) = match (&config.database_url, &config.database_name) {
            (Some(uri), Some(database)) => (uri, database),
            _ => {
                tracing::warn!(
                    "DATABASE_URL or DATABASE_NAME not set, document store disabled"
                );
                return Self { db: None };
            }
        };

        match MongoClient::with_uri_str(uri).await {
            Ok(client) => {
                tracing::info!(database = %database, "Connected to MongoDB");
                Self {
                    db: Some(client.database(database)),
                }
            }
            Err(e) => {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                Self { db: None }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.db.is_some()
    }

    fn db(&self) -> Result<&Database, AppError> {
        self.db.as_ref().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!("document store is not configured"))
        })
    }

    /// Insert one document and return the store-generated id as hex text.
    pub async fn insert<T>(&self, collection: &str, document: &T) -> Result<String, AppError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .db()?
            .collection::<T>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        Ok(id)
    }

    /// Fetch up to `limit` documents matching `filter`, in store-default
    /// order.
    pub async fn find<T>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db()?
            .collection::<T>(collection)
            .find(filter, options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::from(e)
        })
    }

    /// List collection names. Used only by diagnostics, which folds any
    /// failure here into a status string.
    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db()?
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }
}
