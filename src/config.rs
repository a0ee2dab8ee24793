use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::{MatcherConfig, ScoringConstants, RESAMPLE_POINTS};
use crate::models::{MatchAlgorithm, NormalizationPolicy};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> PathBuf { PathBuf::from("data/circuits.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,
    #[serde(default = "default_normalization")]
    pub normalization: String,
    #[serde(default = "default_resample_points")]
    pub resample_points: usize,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            normalization: default_normalization(),
            resample_points: default_resample_points(),
            parallel: default_parallel(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_algorithm() -> String { "frechet".to_string() }
fn default_normalization() -> String { "bounding_box".to_string() }
fn default_resample_points() -> usize { RESAMPLE_POINTS }
fn default_parallel() -> bool { true }
fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }

impl MatchingSettings {
    /// Algorithm used when a request does not name one
    pub fn algorithm(&self) -> Result<MatchAlgorithm, ConfigError> {
        self.default_algorithm
            .parse()
            .map_err(|e| ConfigError::Message(format!("matching.default_algorithm: {}", e)))
    }

    pub fn policy(&self) -> Result<NormalizationPolicy, ConfigError> {
        self.normalization
            .parse()
            .map_err(|e| ConfigError::Message(format!("matching.normalization: {}", e)))
    }

    /// Build the core matcher configuration
    pub fn matcher_config(&self, scoring: &ScoringSettings) -> Result<MatcherConfig, ConfigError> {
        if self.resample_points < 2 {
            return Err(ConfigError::Message(format!(
                "matching.resample_points must be at least 2, got {}",
                self.resample_points
            )));
        }

        Ok(MatcherConfig {
            policy: self.policy()?,
            resample_points: self.resample_points,
            constants: scoring.constants()?,
            parallel: self.parallel,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_hausdorff_decay")]
    pub hausdorff_decay: f64,
    #[serde(default = "default_frechet_decay")]
    pub frechet_decay: f64,
    #[serde(default = "default_turning_decay")]
    pub turning_decay: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            hausdorff_decay: default_hausdorff_decay(),
            frechet_decay: default_frechet_decay(),
            turning_decay: default_turning_decay(),
        }
    }
}

fn default_hausdorff_decay() -> f64 { 8.0 }
fn default_frechet_decay() -> f64 { 10.0 }
fn default_turning_decay() -> f64 { 10.0 }

impl ScoringSettings {
    /// Decay constants, each required to be finite and strictly positive
    pub fn constants(&self) -> Result<ScoringConstants, ConfigError> {
        for (key, decay) in [
            ("hausdorff_decay", self.hausdorff_decay),
            ("frechet_decay", self.frechet_decay),
            ("turning_decay", self.turning_decay),
        ] {
            if !decay.is_finite() || decay <= 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.{} must be a positive number, got {}",
                    key, decay
                )));
            }
        }

        Ok(ScoringConstants {
            hausdorff: self.hausdorff_decay,
            frechet: self.frechet_decay,
            turning_angle: self.turning_decay,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRACKMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRACKMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRACKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRACKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject selectors outside the known algorithms and policies up front
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.algorithm()?;
        self.matching.matcher_config(&self.scoring)?;
        Ok(())
    }
}
