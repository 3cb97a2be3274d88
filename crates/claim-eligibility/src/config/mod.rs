use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::eligibility::{JurisdictionConfig, JurisdictionError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub jurisdiction_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let jurisdiction_file = env::var("APP_JURISDICTION_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            jurisdiction_file,
        })
    }

    /// Reference data for the court being served: the configured file, or King County.
    pub fn jurisdiction(&self) -> Result<JurisdictionConfig, ConfigError> {
        match &self.jurisdiction_file {
            Some(path) => load_jurisdiction(path),
            None => Ok(JurisdictionConfig::king_county()),
        }
    }
}

/// Read and validate a JSON jurisdiction dataset.
pub fn load_jurisdiction(path: &Path) -> Result<JurisdictionConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::JurisdictionRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: JurisdictionConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::JurisdictionParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate().map_err(ConfigError::InvalidJurisdiction)?;
    Ok(config)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    JurisdictionRead {
        path: PathBuf,
        source: std::io::Error,
    },
    JurisdictionParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidJurisdiction(JurisdictionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::JurisdictionRead { path, .. } => {
                write!(f, "unable to read jurisdiction file {}", path.display())
            }
            ConfigError::JurisdictionParse { path, source } => write!(
                f,
                "jurisdiction file {} is not valid: {}",
                path.display(),
                source
            ),
            ConfigError::InvalidJurisdiction(err) => {
                write!(f, "jurisdiction rejected: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::JurisdictionRead { source, .. } => Some(source),
            ConfigError::JurisdictionParse { source, .. } => Some(source),
            ConfigError::InvalidJurisdiction(err) => Some(err),
        }
    }
}
