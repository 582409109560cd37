use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
}

/// Connection settings for the document store.
///
/// Both values are optional: the service runs without a store and reports
/// that state from the diagnostic endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn url_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_configured(&self) -> bool {
        self.name.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl PortfolioConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;

        Ok(PortfolioConfig {
            common: common_config,
            database: DatabaseConfig {
                url: get_env("DATABASE_URL"),
                name: get_env("DATABASE_NAME"),
            },
            telemetry: TelemetryConfig {
                log_level: get_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                otlp_endpoint: get_env("OTLP_ENDPOINT"),
            },
        })
    }
}

/// Reads an environment variable. Unset, empty and non-UTF-8 values all read as absent.
fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
