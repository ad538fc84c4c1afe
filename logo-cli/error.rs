use logo_brief::BriefError;
use logo_fast::FastError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("detector error: {0}")]
    Detector(#[from] FastError),
    #[error("descriptor error: {0}")]
    Describe(#[from] BriefError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog root {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("cannot serialize config to TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid extractor settings: {0}")]
    Extractor(#[from] FastError),
    #[error("invalid good-match distance: {0} (must be 1-256)")]
    InvalidMatchDistance(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
