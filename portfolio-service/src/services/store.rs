use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;

/// Minimal document-store surface the handlers rely on.
///
/// Implementations must be safe to share across concurrent requests; the
/// service holds a single `Arc<dyn DocumentStore>` for its whole lifetime.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database the store writes into.
    fn database_name(&self) -> &str;

    /// Inserts one document and returns its generated id as a string.
    async fn insert_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    /// Lists every collection visible to the client.
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}
