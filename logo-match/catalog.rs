use logo_core::DescriptorSet;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference descriptors of one logo
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    pub label: String,
    pub descriptors: DescriptorSet,
}

/// Immutable label → descriptor-set mapping.
///
/// Labels are case-folded and unique; entries are kept in lexicographic
/// label order, which is also the order `iter` and the matcher visit them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>"))]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build from `(label, descriptors)` pairs. A later pair whose label
    /// case-folds to an existing one replaces it.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, DescriptorSet)>,
        S: AsRef<str>,
    {
        let mut by_label = BTreeMap::new();
        for (label, descriptors) in entries {
            by_label.insert(label.as_ref().to_lowercase(), descriptors);
        }

        Self {
            entries: by_label
                .into_iter()
                .map(|(label, descriptors)| CatalogEntry { label, descriptors })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Lookup by label; the argument is case-folded first
    pub fn get(&self, label: &str) -> Option<&DescriptorSet> {
        let label = label.to_lowercase();
        self.entries
            .binary_search_by(|e| e.label.as_str().cmp(label.as_str()))
            .ok()
            .map(|i| &self.entries[i].descriptors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Total descriptors over all labels
    pub fn descriptor_count(&self) -> usize {
        self.entries.iter().map(|e| e.descriptors.len()).sum()
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::from_entries(entries.into_iter().map(|e| (e.label, e.descriptors)))
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}
