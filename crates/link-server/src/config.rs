use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Wildcard entry in `allowed_origins` permitting any origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Upper bound on the time spent waiting while reading a request body.
    pub read_timeout_secs: u64,
    /// Upper bound on the time spent handling a single request.
    pub request_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            debug: false,
            read_timeout_secs: 2 * 60,
            request_timeout_secs: 10 * 60,
            allowed_origins: vec![ANY_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing fields take their default values.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// `host:port`, suitable for binding (the host may be a name).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}
