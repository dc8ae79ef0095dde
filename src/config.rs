use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Default config file location; override with the `CUBBY_CONFIG` env var.
pub const DEFAULT_CONFIG_PATH: &str = "cubby.yaml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
}

/// Engine settings: everything the request/response core needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory all request targets resolve under.
    pub root: String,

    /// Ingestion cap: request buffers longer than this are a parse failure.
    pub max_request_bytes: usize,

    /// Output capacity: a response that would exceed this becomes a 500.
    pub max_response_bytes: usize,

    /// Upload policy knobs.
    pub post: PostConfig,
}

/// Upload policy. Every flag defaults to off; the strictest behavior is
/// opt-in.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Store zero-length uploads as empty files instead of answering 204.
    pub create_empty_files: bool,

    /// Answer 411 when an upload carries no parseable Content-Length header.
    pub require_content_length: bool,

    /// Answer 415 when an upload declares no Content-Type and the target
    /// path classifies to the octet-stream fallback.
    pub restrict_media_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root: "public".to_string(),
            max_request_bytes: 8192,
            max_response_bytes: 1024 * 1024,
            post: PostConfig::default(),
        }
    }
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            create_empty_files: false,
            require_content_length: false,
            restrict_media_types: false,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `CUBBY_CONFIG` (or
    /// `cubby.yaml`), falling back to compiled defaults when the file does
    /// not exist. The `LISTEN` env var overrides the listen address either
    /// way.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CUBBY_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = if Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            Self::from_yaml(&text)
                .with_context(|| format!("parsing config file {path}"))?
        } else {
            Self::default()
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    /// Parses a configuration from YAML text. Missing keys take defaults.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid config YAML")
    }
}
