//! Configuration management for LegalMind.
//!
//! Settings come from an optional TOML or JSON file, then environment
//! variables (including a `.env` file loaded at startup) override them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inference::InferenceConfig;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "legalmind.toml";

/// Default upload limit (25 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on (`PORT`, `HOST` or `HOST:PORT`)
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory served under `/static`; `index.html` in it replaces the built-in page
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<PathBuf>,
    /// Maximum accepted request body size
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("static"))
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// - `LEGALMIND_BIND`: listen address
    /// - `LEGALMIND_STATIC_DIR`: static directory (empty disables it)
    /// - `LEGALMIND_MAX_UPLOAD_BYTES`: body size limit
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind) = lookup("LEGALMIND_BIND") {
            self.bind = bind;
        }
        if let Some(dir) = lookup("LEGALMIND_STATIC_DIR") {
            self.static_dir = if dir.trim().is_empty() {
                None
            } else {
                Some(expand_path(&dir))
            };
        }
        if let Some(val) = lookup("LEGALMIND_MAX_UPLOAD_BYTES") {
            if let Ok(n) = val.parse() {
                self.max_upload_bytes = n;
            }
        }
        self
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    /// File this config was read from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with environment overrides.
    ///
    /// An explicit path must exist. Without one, `./legalmind.toml` and then
    /// `<config dir>/legalmind/config.toml` are tried; if neither exists the
    /// defaults are used.
    pub async fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => {
                let path = expand_path(&path.to_string_lossy());
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::load_from_path(&path).await?
            }
            None => match discover() {
                Some(path) => Self::load_from_path(&path).await?,
                None => Self::default(),
            },
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific file path.
    /// TOML for `.toml`, JSON otherwise.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        if let Some(dir) = config.server.static_dir.take() {
            config.server.static_dir = Some(resolve_relative(&dir, path));
        }
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        match ext {
            "json" => Ok(serde_json::from_str(contents)?),
            _ => Ok(toml::from_str(contents)?),
        }
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.server = self.server.with_overrides(&lookup);
        self.inference = self.inference.with_overrides(&lookup);
        self
    }

    /// Effective configuration as TOML with the credential hidden.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut copy = self.clone();
        copy.inference = copy.inference.redacted();
        toml::to_string_pretty(&copy)
    }
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("legalmind").join("config.toml"))
        .filter(|path| path.exists())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Resolve `path` against the directory holding the config file.
fn resolve_relative(path: &Path, config_file: &Path) -> PathBuf {
    let expanded = expand_path(&path.to_string_lossy());
    if expanded.is_absolute() {
        return expanded;
    }
    match config_file.parent() {
        Some(base) if !base.as_os_str().is_empty() => base.join(expanded),
        _ => expanded,
    }
}
