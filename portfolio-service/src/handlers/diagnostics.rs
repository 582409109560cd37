use crate::config::DatabaseConfig;
use crate::dtos::DiagnosticReport;
use crate::startup::{AppState, StoreHandle};
use axum::{extract::State, Json};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Reports backend and database state. Probe failures end up in the report,
/// so this always answers 200.
#[tracing::instrument(skip(state))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(build_report(&state.store, &state.config.database).await)
}

pub async fn build_report(store: &StoreHandle, config: &DatabaseConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(config.url_configured()),
        database_name: set_marker(config.name_configured()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store {
        StoreHandle::Connected(client) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match client.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_COLLECTIONS);
                    report.collections = names;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!("Diagnostic collection probe failed: {}", e);
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.source_message(), MAX_ERROR_CHARS)
                    );
                }
            }
        }
        StoreHandle::NotConfigured => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        StoreHandle::Failed(message) => {
            report.database = format!("❌ Error: {}", truncate_chars(message, MAX_ERROR_CHARS));
        }
    }

    report
}

fn set_marker(present: bool) -> String {
    let marker = if present { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
