/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Canonical environment variables for the remote store
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Static web UI directory
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Supabase project URL; in-memory storage when unset
    #[serde(default)]
    pub supabase_url: Option<String>,

    #[serde(default)]
    pub supabase_anon_key: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl StorageSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ServerConfig {
    /// Load configuration from an explicit file, or `config.toml` if present,
    /// and the process environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::load_with_env(path, env)
    }

    /// Load configuration from a file and the given environment variables.
    ///
    /// Precedence, lowest first: file, `VIDLIST_*` variables (`__` nests,
    /// e.g. `VIDLIST_SERVER__PORT`), then `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    pub fn load_with_env(path: Option<&Path>, env: HashMap<String, String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        let supabase_url = env.get(SUPABASE_URL_VAR).cloned();
        let supabase_anon_key = env.get(SUPABASE_ANON_KEY_VAR).cloned();

        // Override with environment variables (prefixed with VIDLIST_)
        settings = settings.add_source(
            config::Environment::with_prefix("VIDLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.into_iter().collect())),
        );

        settings = settings
            .set_override_option("storage.supabase_url", supabase_url)
            .and_then(|s| s.set_override_option("storage.supabase_anon_key", supabase_anon_key))
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = self
            .storage
            .supabase_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ServerError::Config(format!(
                    "Supabase URL must start with http:// or https:// (got {})",
                    url
                )));
            }
        }

        if self.storage.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "storage.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        web_dir: default_web_dir(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        supabase_url: None,
        supabase_anon_key: None,
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
