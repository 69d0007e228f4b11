use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{ConfigError, Result};

pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the display server lives. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    hostname: String,
    port: u16,
    timeout: Option<Duration>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            timeout: None,
        }
    }
}

/// On-disk shape of the config file. `port` may be written as a number or a string.
#[derive(Debug, Deserialize)]
struct RawConfig {
    hostname: Option<String>,
    port: Option<PortValue>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(i64),
    Text(String),
}

impl PortValue {
    fn to_port(&self) -> Result<u16> {
        let parsed = match self {
            Self::Number(value) => u16::try_from(*value).ok(),
            Self::Text(value) => value.trim().parse::<u16>().ok(),
        };
        parsed.ok_or_else(|| {
            ConfigError::InvalidPort(match self {
                Self::Number(value) => value.to_string(),
                Self::Text(value) => value.clone(),
            })
        })
    }
}

impl TryFrom<RawConfig> for DisplayConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let port = match raw.port {
            Some(port) => port.to_port()?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            hostname: raw.hostname.unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            port,
            timeout: raw.timeout_secs.map(Duration::from_secs),
        })
    }
}

impl DisplayConfig {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            timeout: None,
        }
    }

    /// `~/.display/config.json`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".display").join("config.json"))
    }

    /// Reads the default config file if it exists, otherwise returns defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(path),
            _ => {
                debug!("no display config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let raw = if matches!(extension.as_str(), "yaml" | "yml") {
            serde_yaml::from_str::<RawConfig>(&raw)?
        } else {
            serde_json::from_str::<RawConfig>(&raw)?
        };
        let config = Self::try_from(raw)?;
        debug!(path = %path.display(), url = %config.display_url(), "loaded display config");
        Ok(config)
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn display_url(&self) -> String {
        format!("http://{}:{}/events", self.hostname, self.port)
    }
}
