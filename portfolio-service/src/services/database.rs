use crate::services::store::DocumentStore;
use async_trait::async_trait;
use mongodb::{
    bson::{Bson, Document},
    Client as MongoClient, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    /// Builds a client for `uri`. The driver connects lazily, so an unreachable
    /// server only surfaces on the first operation.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self {
            db: client.database(database),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }
}
