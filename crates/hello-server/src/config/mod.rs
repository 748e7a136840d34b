//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use hello_core::error::{HelloError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "HELLO_METRICS_CONFIG";
/// Config file used when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "hello-metrics.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HelloError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| HelloError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to built-in defaults when the file does not exist.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(HelloError::Internal(format!("read config failed: {e}"))),
    }
}

/// Resolve the config path from the environment.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into())
}
