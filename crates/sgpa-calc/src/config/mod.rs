use crate::grading::ProbabilityConfig;
use std::env;
use std::fmt;
use std::path::PathBuf;

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
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
    pub probability: ProbabilityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_path = match env::var("SGPA_CATALOG_PATH") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyCatalogPath),
            Ok(value) => Some(PathBuf::from(value.trim())),
            Err(_) => None,
        };

        let probability = match env::var("SGPA_PROBABILITY_CONFIG") {
            Ok(value) => load_probability_config(PathBuf::from(value.trim()))?,
            Err(_) => ProbabilityConfig::default(),
        };

        Ok(Self {
            environment,
            catalog: CatalogConfig { path: catalog_path },
            telemetry: TelemetryConfig { log_level },
            probability,
        })
    }
}

fn load_probability_config(path: PathBuf) -> Result<ProbabilityConfig, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::ProbabilityRead {
        path: path.clone(),
        source,
    })?;
    let config: ProbabilityConfig = serde_json::from_str(&raw).map_err(|source| {
        ConfigError::ProbabilityParse {
            path: path.clone(),
            source,
        }
    })?;
    config
        .validate()
        .map_err(|reason| ConfigError::ProbabilityInvalid { path, reason })?;
    Ok(config)
}

/// Where course definitions come from. `None` selects the built-in first-year catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyCatalogPath,
    ProbabilityRead {
        path: PathBuf,
        source: std::io::Error,
    },
    ProbabilityParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    ProbabilityInvalid {
        path: PathBuf,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCatalogPath => {
                write!(f, "SGPA_CATALOG_PATH is set but empty")
            }
            ConfigError::ProbabilityRead { path, .. } => write!(
                f,
                "SGPA_PROBABILITY_CONFIG could not be read from {}",
                path.display()
            ),
            ConfigError::ProbabilityParse { path, .. } => write!(
                f,
                "SGPA_PROBABILITY_CONFIG at {} is not a valid tuning table",
                path.display()
            ),
            ConfigError::ProbabilityInvalid { path, reason } => write!(
                f,
                "SGPA_PROBABILITY_CONFIG at {} is inconsistent: {reason}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::EmptyCatalogPath | ConfigError::ProbabilityInvalid { .. } => None,
            ConfigError::ProbabilityRead { source, .. } => Some(source),
            ConfigError::ProbabilityParse { source, .. } => Some(source),
        }
    }
}
