#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use mongodb::bson::{oid::ObjectId, Document};
use portfolio_service::config::{DatabaseConfig, PortfolioConfig, TelemetryConfig};
use portfolio_service::services::DocumentStore;
use portfolio_service::startup::{build_router, AppState, Application, StoreHandle};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_DATABASE: &str = "portfolio_test";

/// Document store kept in memory, keyed by collection name.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn with_collections<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        {
            let mut collections = store.collections.lock().unwrap();
            for name in names {
                collections.entry(name.into()).or_default();
            }
        }
        store
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        TEST_DATABASE
    }

    async fn insert_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }
}

/// Store whose every operation fails with `message`.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn database_name(&self) -> &str {
        TEST_DATABASE
    }

    async fn insert_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(self.message.clone())))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(self.message.clone())))
    }
}

pub fn test_config(database: DatabaseConfig) -> PortfolioConfig {
    PortfolioConfig {
        common: CoreConfig { port: 0 },
        database,
        telemetry: TelemetryConfig::default(),
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some(TEST_DATABASE.to_string()),
    }
}

pub fn router_with(store: StoreHandle, database: DatabaseConfig) -> Router {
    build_router(AppState {
        config: test_config(database),
        store,
    })
}

pub fn router_with_store(store: Arc<dyn DocumentStore>) -> Router {
    router_with(StoreHandle::Connected(store), configured_database())
}

pub fn router_without_store() -> Router {
    router_with(StoreHandle::NotConfigured, DatabaseConfig::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Serves the application on a random port with the given store.
    pub async fn spawn(store: StoreHandle, database: DatabaseConfig) -> Self {
        let app = Application::build_with_store(test_config(database), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the root endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
