use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use turfbook_core::MockIdentity;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub identity: MockIdentity,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Key the signed-in user record is stored under
    #[serde(default = "default_session_key")]
    pub session_key: String,
    pub file_path: Option<PathBuf>,
    pub redis_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            session_key: default_session_key(),
            file_path: None,
            redis_url: None,
        }
    }
}

fn default_session_key() -> String { "user".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

fn default_log_filter() -> String { "turfbook_api=debug,tower_http=debug".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let source = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&source("default")))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&source(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&source("local")).required(false))
            // e.g. `TURFBOOK_STORAGE__BACKEND=file`
            .add_source(config::Environment::with_prefix("TURFBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
