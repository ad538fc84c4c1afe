//! Matching side of logo recognition: the immutable reference catalog,
//! cross-checked brute-force Hamming matching, and the two-gate
//! accept/reject policy.

pub mod catalog;
pub mod decision;
pub mod hamming;
pub mod matcher;

pub use catalog::{Catalog, CatalogEntry};
pub use decision::{DecisionPolicy, RejectReason, Verdict, VerdictReport, MIN_GOOD_MATCHES, MIN_KEYPOINTS};
pub use hamming::hamming;
pub use matcher::{LabelScore, LabelScorer, MatchCandidate, Matcher, Scores, GOOD_MATCH_DISTANCE};
