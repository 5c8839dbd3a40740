//! Configuration management for the resume ranker

use crate::error::{Result, RankerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub ranking: RankingConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of keywords kept per document
    pub top_n: usize,
    /// Score substituted for zero or NaN overlap scores
    pub default_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub job_description: PathBuf,
    pub resume_dir: PathBuf,
    pub resume_extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_FALLBACK_SCORE: f64 = 0.5;

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking: RankingConfig {
                top_n: DEFAULT_TOP_N,
                default_score: DEFAULT_FALLBACK_SCORE,
            },
            input: InputConfig {
                job_description: PathBuf::from("job_desc").join("job1.txt"),
                resume_dir: PathBuf::from("cvs"),
                resume_extension: "txt".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RankerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_n == 0 {
            return Err(RankerError::Configuration(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }

        let score = self.ranking.default_score;
        if score.is_nan() || !(0.0..=1.0).contains(&score) {
            return Err(RankerError::Configuration(format!(
                "ranking.default_score must be within [0, 1], got {}",
                score
            )));
        }

        if self.input.resume_extension.trim_start_matches('.').is_empty() {
            return Err(RankerError::Configuration(
                "input.resume_extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.ranking.top_n, 20);
        assert_eq!(config.ranking.default_score, 0.5);
        assert_eq!(config.input.resume_dir, PathBuf::from("cvs"));
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ranking.top_n = 10;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.ranking.top_n = 0;
        assert!(matches!(config.validate(), Err(RankerError::Configuration(_))));

        let mut config = Config::default();
        config.ranking.default_score = 1.5;
        assert!(config.validate().is_err());

        config.ranking.default_score = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ranking = [not toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(RankerError::Configuration(_))));
    }
}
