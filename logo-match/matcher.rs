use crate::catalog::Catalog;
use crate::hamming::hamming;
use logo_core::Descriptor;

/// Candidates strictly closer than this many bits are good matches
pub const GOOD_MATCH_DISTANCE: u32 = 50;

/// A mutually-nearest pair of catalog (train) and query descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub train_idx: usize,
    pub query_idx: usize,
    pub distance: u32,
}

impl MatchCandidate {
    pub fn is_good(&self, threshold: u32) -> bool {
        self.distance < threshold
    }
}

/// Good-match count of one catalog label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelScore {
    pub label: String,
    pub good_matches: usize,
}

/// Per-label scores, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scores {
    entries: Vec<LabelScore>,
}

impl Scores {
    pub fn new(entries: Vec<LabelScore>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelScore> {
        self.entries.iter()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries.iter().find(|s| s.label == label).map(|s| s.good_matches)
    }

    /// First label with the strictly highest non-zero count
    pub fn best(&self) -> Option<&LabelScore> {
        let mut best: Option<&LabelScore> = None;
        for score in &self.entries {
            let current = best.map_or(0, |b| b.good_matches);
            if score.good_matches > current {
                best = Some(score);
            }
        }
        best
    }
}

impl FromIterator<(String, usize)> for Scores {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(label, good_matches)| LabelScore { label, good_matches })
                .collect(),
        )
    }
}

/// Produces per-label scores for a query against a catalog
pub trait LabelScorer {
    fn score(&self, query: &[Descriptor], catalog: &Catalog) -> Scores;
}

/// Brute-force Hamming matcher with cross-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    good_match_distance: u32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            good_match_distance: GOOD_MATCH_DISTANCE,
        }
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_good_match_distance(mut self, distance: u32) -> Self {
        self.good_match_distance = distance;
        self
    }

    pub fn good_match_distance(&self) -> u32 {
        self.good_match_distance
    }

    /// Pairs (t, q) where q is the nearest query descriptor of train
    /// descriptor t and t is the nearest train descriptor of q. The first
    /// minimum wins on equal distances in both directions.
    pub fn cross_check_matches(train: &[Descriptor], query: &[Descriptor]) -> Vec<MatchCandidate> {
        if train.is_empty() || query.is_empty() {
            return Vec::new();
        }

        let m = query.len();
        let mut distances = Vec::with_capacity(train.len() * m);
        for t in train {
            distances.extend(query.iter().map(|q| hamming(t, q)));
        }

        // nearest train row for every query column
        let mut reverse = vec![(0usize, u32::MAX); m];
        for (t_idx, row) in distances.chunks_exact(m).enumerate() {
            for (q_idx, &d) in row.iter().enumerate() {
                if d < reverse[q_idx].1 {
                    reverse[q_idx] = (t_idx, d);
                }
            }
        }

        distances
            .chunks_exact(m)
            .enumerate()
            .filter_map(|(t_idx, row)| {
                let (q_idx, distance) = row
                    .iter()
                    .copied()
                    .enumerate()
                    .fold((0usize, u32::MAX), |best, (i, d)| if d < best.1 { (i, d) } else { best });
                (reverse[q_idx].0 == t_idx).then_some(MatchCandidate {
                    train_idx: t_idx,
                    query_idx: q_idx,
                    distance,
                })
            })
            .collect()
    }

    /// Number of cross-checked candidates under the good-match distance
    pub fn good_match_count(&self, train: &[Descriptor], query: &[Descriptor]) -> usize {
        Self::cross_check_matches(train, query)
            .iter()
            .filter(|c| c.is_good(self.good_match_distance))
            .count()
    }
}

impl LabelScorer for Matcher {
    fn score(&self, query: &[Descriptor], catalog: &Catalog) -> Scores {
        catalog
            .iter()
            .map(|entry| (entry.label.clone(), self.good_match_count(&entry.descriptors, query)))
            .collect()
    }
}
