use crate::catalog::Catalog;
use crate::matcher::{LabelScorer, Scores};
use log::debug;
use logo_core::Descriptor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Queries with fewer descriptors are rejected before matching
pub const MIN_KEYPOINTS: usize = 10;

/// The best label needs at least this many good matches
pub const MIN_GOOD_MATCHES: usize = 20;

pub const REJECTED_MESSAGE: &str = "This is not a valid logo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooFewKeypoints { found: usize },
    InsufficientMatches { best: usize },
}

/// Outcome of one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { label: String, match_count: usize },
    Rejected { reason: RejectReason },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Verdict::Accepted { label, .. } => Some(label),
            Verdict::Rejected { .. } => None,
        }
    }

    /// Good matches of the accepted label; 0 for every rejection
    pub fn match_count(&self) -> usize {
        match self {
            Verdict::Accepted { match_count, .. } => *match_count,
            Verdict::Rejected { .. } => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::Accepted { label, .. } => format!("This logo belongs to {}", label),
            Verdict::Rejected { .. } => REJECTED_MESSAGE.to_string(),
        }
    }

    pub fn report(&self) -> VerdictReport {
        VerdictReport {
            accepted: self.is_accepted(),
            label: self.label().map(str::to_string),
            match_count: self.match_count(),
        }
    }
}

/// Caller-facing shape of a verdict
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VerdictReport {
    pub accepted: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub label: Option<String>,
    pub match_count: usize,
}

/// Keypoint gate, then scoring, then match-count gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecisionPolicy {
    pub min_keypoints: usize,
    pub min_good_matches: usize,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            min_keypoints: MIN_KEYPOINTS,
            min_good_matches: MIN_GOOD_MATCHES,
        }
    }
}

impl DecisionPolicy {
    pub fn decide<S: LabelScorer + ?Sized>(&self, query: &[Descriptor], catalog: &Catalog, scorer: &S) -> Verdict {
        if query.len() < self.min_keypoints {
            debug!("rejecting query: {} descriptors < {}", query.len(), self.min_keypoints);
            return Verdict::Rejected {
                reason: RejectReason::TooFewKeypoints { found: query.len() },
            };
        }

        let scores = scorer.score(query, catalog);
        self.resolve(&scores)
    }

    /// Apply the match-count gate to already computed scores
    pub fn resolve(&self, scores: &Scores) -> Verdict {
        debug!(
            "scores: {}",
            scores
                .iter()
                .map(|s| format!("{}={}", s.label, s.good_matches))
                .collect::<Vec<_>>()
                .join(", ")
        );

        match scores.best() {
            Some(best) if best.good_matches >= self.min_good_matches => Verdict::Accepted {
                label: best.label.clone(),
                match_count: best.good_matches,
            },
            best => Verdict::Rejected {
                reason: RejectReason::InsufficientMatches {
                    best: best.map_or(0, |b| b.good_matches),
                },
            },
        }
    }
}
