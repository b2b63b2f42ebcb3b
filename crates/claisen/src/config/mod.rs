use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::telemetry::{self, TelemetryError};

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CLAISEN_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = match env::var("CLAISEN_DATA_DIR") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDataDir),
            Ok(raw) => PathBuf::from(raw.trim()),
            Err(_) => default_data_dir()?,
        };

        let log_level = env::var("CLAISEN_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        telemetry::level_filter(&log_level).map_err(ConfigError::InvalidLogLevel)?;

        Ok(Self {
            environment,
            storage: StorageConfig { data_dir },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let home = env::var("HOME").map_err(|_| ConfigError::MissingHome)?;
    Ok(PathBuf::from(home).join(".claisen"))
}

/// Location of the local symptom journal.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join("journal.json")
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDataDir,
    MissingHome,
    InvalidLogLevel(TelemetryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataDir => write!(f, "CLAISEN_DATA_DIR must not be empty"),
            ConfigError::MissingHome => {
                write!(f, "HOME is unset; set CLAISEN_DATA_DIR to choose a journal location")
            }
            ConfigError::InvalidLogLevel(err) => write!(f, "CLAISEN_LOG_LEVEL: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLogLevel(err) => Some(err),
            _ => None,
        }
    }
}
