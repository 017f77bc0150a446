mod file_config;

pub use file_config::{FileConfig, RecommendationsConfig};

use crate::recommend::{MAX_DIVERSITY, MIN_DIVERSITY};
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub artifacts_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub artifacts_dir: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,

    // Feature configs (with defaults)
    pub recommendations: RecommendationSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let artifacts_dir = file
            .artifacts_dir
            .map(PathBuf::from)
            .or_else(|| cli.artifacts_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("artifacts_dir must be specified via CLI or in config file")
            })?;

        if !artifacts_dir.exists() {
            bail!("Artifacts directory does not exist: {:?}", artifacts_dir);
        }
        if !artifacts_dir.is_dir() {
            bail!("artifacts_dir is not a directory: {:?}", artifacts_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let defaults = RecommendationSettings::default();
        let rec_file = file.recommendations.unwrap_or_default();
        let recommendations = RecommendationSettings {
            default_k: rec_file.default_k.unwrap_or(defaults.default_k),
            max_k: rec_file.max_k.unwrap_or(defaults.max_k),
            default_diversity: rec_file
                .default_diversity
                .unwrap_or(defaults.default_diversity),
        };
        recommendations.validate()?;

        Ok(Self {
            artifacts_dir,
            port,
            logging_level,
            frontend_dir_path,
            recommendations,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSettings {
    /// Number of recommendations when a request does not say.
    pub default_k: usize,
    /// Requests asking for more recommendations are rejected.
    pub max_k: usize,
    pub default_diversity: u8,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_k: 10,
            max_k: 50,
            default_diversity: 5,
        }
    }
}

impl RecommendationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_k == 0 {
            bail!("recommendations.default_k must be positive");
        }
        if self.max_k < self.default_k {
            bail!(
                "recommendations.max_k ({}) must not be lower than default_k ({})",
                self.max_k,
                self.default_k
            );
        }
        if !(MIN_DIVERSITY..=MAX_DIVERSITY).contains(&self.default_diversity) {
            bail!(
                "recommendations.default_diversity must be within [{}, {}], got {}",
                MIN_DIVERSITY,
                MAX_DIVERSITY,
                self.default_diversity
            );
        }
        Ok(())
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
