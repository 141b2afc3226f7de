use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_READ_CHUNK_SIZE: usize = 16384;
pub const DEFAULT_ROOT: &str = "www";
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Top-level server configuration.
///
/// Loaded from a YAML file when one is present; every field falls back to a
/// built-in default, so an empty (or absent) file yields a working config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind the listening socket to
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Upper bound on a single socket read while buffering request lines
    pub read_chunk_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory no served file may resolve outside of
    pub root: PathBuf,

    /// File substituted when the request path is exactly "/"
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by the `CONFIG` environment
    /// variable (default `config.yaml`). A missing file is not an error;
    /// defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("failed to parse config file {}", path))
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
