use crate::error::{ConfigError, ConfigResult};
use logo_core::{DESCRIPTOR_BITS, OrbConfig};
use logo_fast::FastDetector;
use logo_match::{DecisionPolicy, GOOD_MATCH_DISTANCE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_DIR: &str = "logo_dataset";

/// Everything the `logo` binary can be tuned with. Missing keys fall back
/// to the defaults, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_dir: PathBuf,
    /// Matches strictly below this Hamming distance count as good
    pub good_match_distance: u32,
    pub extractor: OrbConfig,
    pub policy: DecisionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
            good_match_distance: GOOD_MATCH_DISTANCE,
            extractor: OrbConfig::default(),
            policy: DecisionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        FastDetector::validate_config(&self.extractor)?;
        if self.good_match_distance == 0 || self.good_match_distance > DESCRIPTOR_BITS {
            return Err(ConfigError::InvalidMatchDistance(self.good_match_distance));
        }
        Ok(())
    }

    /// Load and validate; the format follows the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match format {
            Format::Toml => Self::from_toml(&content),
            Format::Json => Self::from_json(&content),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = match format_of(path)? {
            Format::Toml => self.to_toml()?,
            Format::Json => self.to_json()?,
        };
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.catalog_dir, PathBuf::from("logo_dataset"));
        assert_eq!(cfg.good_match_distance, 50);
        assert_eq!(cfg.policy.min_keypoints, 10);
        assert_eq!(cfg.policy.min_good_matches, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let cfg = AppConfig::from_toml(
            r#"
            catalog_dir = "brands"

            [policy]
            min_good_matches = 30

            [extractor]
            n_features = 800
            "#,
        )
        .unwrap();
        assert_eq!(cfg.catalog_dir, PathBuf::from("brands"));
        assert_eq!(cfg.policy.min_good_matches, 30);
        assert_eq!(cfg.policy.min_keypoints, 10);
        assert_eq!(cfg.extractor.n_features, 800);
        assert_eq!(cfg.extractor.threshold, 20);
        assert_eq!(cfg.good_match_distance, 50);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = AppConfig {
            good_match_distance: 64,
            ..AppConfig::default()
        };
        assert_eq!(AppConfig::from_toml(&cfg.to_toml().unwrap()).unwrap(), cfg);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{"good_match_distance": 0}"#),
            Err(ConfigError::InvalidMatchDistance(0))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"good_match_distance": 300}"#),
            Err(ConfigError::InvalidMatchDistance(300))
        ));
        assert!(matches!(
            AppConfig::from_toml("[extractor]\nscale_factor = 0.5"),
            Err(ConfigError::Extractor(_))
        ));
        assert!(matches!(AppConfig::from_toml("policy = 3"), Err(ConfigError::ParseToml(_))));
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig {
            catalog_dir: PathBuf::from("refs"),
            ..AppConfig::default()
        };
        for name in ["app.toml", "app.json", "APP.JSON"] {
            let path = dir.path().join(name);
            cfg.save(&path).unwrap();
            assert_eq!(AppConfig::load(&path).unwrap(), cfg);
        }
    }

    #[test]
    fn test_unknown_extension() {
        let result = AppConfig::default().save("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        assert!(matches!(AppConfig::load("missing.toml"), Err(ConfigError::Io { .. })));
    }
}
