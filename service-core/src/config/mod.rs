use crate::error::AppError;
use config::{Config as Cfg, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Loads `.env`, then the optional `configuration` file, `APP__*` variables
    /// and `PORT`, in increasing precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let builder = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        Self::with_port_override(builder, std::env::var("PORT").ok())
    }

    /// PORT is the conventional knob for hosted runtimes and wins over APP__PORT.
    fn with_port_override(
        builder: ConfigBuilder<DefaultState>,
        port: Option<String>,
    ) -> Result<Self, AppError> {
        let config = builder.set_override_option("port", port)?.build()?;
        Ok(config.try_deserialize()?)
    }
}
