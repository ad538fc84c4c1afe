use crate::error::{CatalogError, CatalogResult};
use crate::extractor::FeatureExtractor;
use log::{debug, info, warn};
use logo_core::DescriptorSet;
use logo_match::Catalog;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// File extensions treated as reference images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Builds a [`Catalog`] from `root/<label>/<image>` directory trees
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    extractor: FeatureExtractor,
}

impl CatalogBuilder {
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Each immediate subdirectory of `root` is a label; each image inside it
    /// replaces that label's descriptors. Files are visited in name order, so
    /// the last image (by name) with at least one descriptor wins.
    pub fn build(&self, root: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let root = root.as_ref();
        let meta = fs::metadata(root).map_err(|source| CatalogError::Root {
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(CatalogError::NotADirectory(root.to_path_buf()));
        }

        let mut labels: BTreeMap<String, DescriptorSet> = BTreeMap::new();
        let mut skipped = 0usize;

        for label_dir in sorted_children(root).filter(|e| e.file_type().is_dir()) {
            let label = label_dir.file_name().to_string_lossy().to_lowercase();
            let mut current = labels.remove(&label);

            for file in sorted_children(label_dir.path()).filter(is_image_file) {
                match self.extractor.extract_path(file.path()) {
                    Ok(descriptors) if descriptors.is_empty() => {
                        debug!("{}: no descriptors, keeping previous set", file.path().display());
                    }
                    Ok(descriptors) => {
                        debug!("{}: {} descriptors", file.path().display(), descriptors.len());
                        current = Some(descriptors);
                    }
                    Err(e) => {
                        warn!("skipping {}: {}", file.path().display(), e);
                        skipped += 1;
                    }
                }
            }

            match current {
                Some(descriptors) => {
                    labels.insert(label, descriptors);
                }
                None => debug!("label '{}' has no usable image", label),
            }
        }

        let catalog = Catalog::from_entries(labels);
        info!(
            "catalog built from {}: {} labels, {} descriptors, {} files skipped",
            root.display(),
            catalog.len(),
            catalog.descriptor_count(),
            skipped
        );
        Ok(catalog)
    }
}

fn sorted_children(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                None
            }
        })
}

fn is_image_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}
