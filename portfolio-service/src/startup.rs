//! Application startup and lifecycle management.

use crate::config::{DatabaseConfig, PortfolioConfig};
use crate::handlers;
use crate::services::{DocumentStore, MongoDb};
use axum::{
    http::Request,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Outcome of opening the document store at startup.
#[derive(Clone)]
pub enum StoreHandle {
    /// A client was built and is shared by all handlers.
    Connected(Arc<dyn DocumentStore>),
    /// `DATABASE_URL` or `DATABASE_NAME` is missing.
    NotConfigured,
    /// Configuration was present but the client could not be built.
    Failed(String),
}

impl StoreHandle {
    /// Opens the store described by `config`, never failing the caller.
    pub async fn open(config: &DatabaseConfig) -> Self {
        let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
            return StoreHandle::NotConfigured;
        };

        match MongoDb::connect(url, name).await {
            Ok(db) => StoreHandle::Connected(Arc::new(db)),
            Err(e) => {
                tracing::warn!("Database unavailable, continuing without it: {}", e);
                StoreHandle::Failed(e.to_string())
            }
        }
    }

    pub fn client(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            StoreHandle::Connected(store) => Some(store),
            _ => None,
        }
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Connected(store) => f
                .debug_tuple("Connected")
                .field(&store.database_name())
                .finish(),
            StoreHandle::NotConfigured => f.write_str("NotConfigured"),
            StoreHandle::Failed(msg) => f.debug_tuple("Failed").field(msg).finish(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: PortfolioConfig,
    pub store: StoreHandle,
}

/// Builds the full router, including middleware and the permissive CORS policy.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/test", get(handlers::diagnostics))
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// Credentials rule out the `*` wildcard, so the request's values are mirrored.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: PortfolioConfig) -> Result<Self, AppError> {
        let store = StoreHandle::open(&config.database).await;
        Self::build_with_store(config, store).await
    }

    /// Like [`Application::build`] but with a caller-provided store.
    pub async fn build_with_store(
        config: PortfolioConfig,
        store: StoreHandle,
    ) -> Result<Self, AppError> {
        let port = config.common.port;
        let state = AppState { config, store };

        tracing::info!(store = ?state.store, "Document store status");
        let app = build_router(state);

        // Port 0 picks a free port for tests.
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
