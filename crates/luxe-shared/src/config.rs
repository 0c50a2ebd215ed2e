//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_SESSION_TTL_HOURS, DEFAULT_UPLOAD_MAX_BYTES, MIN_PASSWORD_LENGTH};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub admin: AdminSettings,
    pub uploads: UploadSettings,
    pub cors: CorsSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// Empty selects the in-memory backend.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseSettings {
    pub fn is_in_memory(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminSettings {
    pub session_ttl_hours: i64,
    pub min_password_length: usize,
    /// Accept `?token=` on admin routes in addition to the bearer header.
    pub allow_query_token: bool,
    /// Hex SHA-256 of the admin password. Seeds the in-memory store.
    pub password_hash: Option<String>,
}

impl AdminSettings {
    /// Configured hash, or `None` when unset or blank.
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub dir: String,
    pub max_bytes: usize,
    pub public_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// Comma separated; `*` allows any origin.
    pub allowed_origins: String,
}

impl CorsSettings {
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect()
    }

    pub fn allows_any(&self) -> bool {
        self.origins().iter().any(|o| o == "*")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `json` or `pretty`
    pub format: String,
    pub dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Defaults only, no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8001)?
            .set_default("app.name", "luxe-server")?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("admin.session_ttl_hours", DEFAULT_SESSION_TTL_HOURS)?
            .set_default("admin.min_password_length", MIN_PASSWORD_LENGTH as i64)?
            .set_default("admin.allow_query_token", true)?
            .set_default("uploads.dir", "uploads")?
            .set_default("uploads.max_bytes", DEFAULT_UPLOAD_MAX_BYTES as i64)?
            .set_default("uploads.public_prefix", "/uploads")?
            .set_default("cors.allowed_origins", "*")?
            .set_default("log.format", "json")
    }
}
