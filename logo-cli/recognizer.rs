use crate::error::ExtractResult;
use crate::extractor::FeatureExtractor;
use image::DynamicImage;
use log::debug;
use logo_core::Descriptor;
use logo_match::{Catalog, DecisionPolicy, Matcher, Verdict};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extract → match → decide, against one shared catalog.
///
/// Holds no per-query state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Recognizer {
    extractor: FeatureExtractor,
    catalog: Arc<Catalog>,
    matcher: Matcher,
    policy: DecisionPolicy,
}

impl Recognizer {
    pub fn new(extractor: FeatureExtractor, catalog: impl Into<Arc<Catalog>>, policy: DecisionPolicy) -> Self {
        Self {
            extractor,
            catalog: catalog.into(),
            matcher: Matcher::default(),
            policy,
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn identify_descriptors(&self, query: &[Descriptor]) -> Verdict {
        self.policy.decide(query, &self.catalog, &self.matcher)
    }

    pub fn identify_image(&self, img: &DynamicImage) -> ExtractResult<Verdict> {
        let query = self.extractor.extract_image(img)?;
        Ok(self.identify_descriptors(&query))
    }

    pub fn identify_bytes(&self, bytes: &[u8]) -> ExtractResult<Verdict> {
        let query = self.extractor.extract_bytes(bytes)?;
        Ok(self.identify_descriptors(&query))
    }

    pub fn identify_path(&self, path: impl AsRef<Path>) -> ExtractResult<Verdict> {
        let path = path.as_ref();
        let query = self.extractor.extract_path(path)?;
        debug!("{}: {} query descriptors", path.display(), query.len());
        Ok(self.identify_descriptors(&query))
    }

    /// Identify many files in parallel; results line up with `paths`
    pub fn identify_batch(&self, paths: &[PathBuf]) -> Vec<ExtractResult<Verdict>> {
        paths.par_iter().map(|p| self.identify_path(p)).collect()
    }
}
