use serde::Deserialize;
use std::env;
use crate::StoreError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed browser origins; `"*"` allows any.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_cors_origins() -> Vec<String> { vec!["http://localhost:5173".to_string()] }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in sample catalog is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SelectionConfig {
    #[serde(default = "default_price_ceiling_ratio")]
    pub price_ceiling_ratio: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { price_ceiling_ratio: default_price_ceiling_ratio() }
    }
}

fn default_price_ceiling_ratio() -> f64 { 1.2 }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WorkflowConfig {
    /// Fixed seed for seat and transaction draws. Every run repeats the same draws.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, StoreError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Built-in defaults cover every key, so all files are optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `WAYFARE_SERVER__PORT=9000` sets `server.port`
            .add_source(Self::environment())
            .build()?;

        Self::from_source(s)
    }

    pub(crate) fn environment() -> config::Environment {
        config::Environment::with_prefix("WAYFARE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
    }

    pub(crate) fn from_source(source: config::Config) -> Result<Self, StoreError> {
        let config: Config = source.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        let ratio = self.selection.price_ceiling_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(StoreError::Invalid(format!(
                "selection.price_ceiling_ratio must be a positive number, got {}",
                ratio
            )));
        }
        if self.server.cors_origins.is_empty() {
            return Err(StoreError::Invalid("server.cors_origins must not be empty".to_string()));
        }
        Ok(())
    }

    /// `"host:port"` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
