use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Process configuration, read once at startup.
///
/// The database settings are deliberately optional: when either is absent
/// the document store runs disabled and the HTTP server stays up.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
}

fn default_port() -> u16 {
    8000
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
