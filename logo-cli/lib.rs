//! High-level logo recognition: feature extraction, catalog construction
//! from a labelled directory tree, and the recognizer that ties them to the
//! matcher and decision policy.

pub mod catalog_builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod recognizer;

pub use catalog_builder::{CatalogBuilder, IMAGE_EXTENSIONS};
pub use config::AppConfig;
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult, ExtractError, ExtractResult};
pub use extractor::{FeatureExtractor, Features, load_image};
pub use recognizer::Recognizer;

pub use logo_core::{self, Descriptor, DescriptorSet, Keypoint, OrbConfig};
pub use logo_match::{self, Catalog, DecisionPolicy, Matcher, RejectReason, Verdict, VerdictReport};
