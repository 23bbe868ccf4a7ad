//! Job matching — token-set similarity scoring and posting ranking.
//!
//! Default scorer: `TokenSetScorer` (pure-Rust, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn SimilarityScorer>` so the backend
//! can be swapped without touching handlers or callers.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::catalog::JobPosting;

/// A posting scored against the candidate's extracted skills.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub job_title: String,
    /// Token-set similarity, 0–100.
    pub score: u32,
    pub required_skills: Vec<String>,
    /// required_skills minus the candidate set, posting order preserved.
    pub missing_skills: Vec<String>,
}

/// Scores two skill collections on a 0–100 scale. Implement this to swap
/// similarity backends without touching the matching pipeline.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, left: &[String], right: &[String]) -> u32;
}

/// Token-set ratio scorer.
///
/// Algorithm: lowercase both collections into sorted token sets, join each
/// with single spaces into a canonical string, then score the two strings
/// with Sørensen–Dice bigram similarity ×100 (strsim). Two fixed points:
/// equal non-empty strings score 100 and any empty operand scores 0.
///
/// Identical sets produce identical canonical strings, hence 100. Shared
/// tokens earn partial credit even when the set sizes differ, but a strict
/// subset stays below 100 so missing requirements always show in the score.
pub struct TokenSetScorer;

impl SimilarityScorer for TokenSetScorer {
    fn score(&self, left: &[String], right: &[String]) -> u32 {
        token_set_ratio(left, right)
    }
}

pub fn token_set_ratio(left: &[String], right: &[String]) -> u32 {
    let a: BTreeSet<String> = left.iter().map(|s| s.to_lowercase()).collect();
    let b: BTreeSet<String> = right.iter().map(|s| s.to_lowercase()).collect();

    let canonical_a = a.into_iter().collect::<Vec<_>>().join(" ");
    let canonical_b = b.into_iter().collect::<Vec<_>>().join(" ");
    ratio(&canonical_a, &canonical_b)
}

/// Bigram Dice similarity ×100, rounded. Empty operands score 0 so an empty
/// candidate set never looks like a perfect match.
fn ratio(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }
    (strsim::sorensen_dice(a, b) * 100.0).round() as u32
}

/// Scores every posting against the candidate's skills, ranks descending by
/// score (stable: ties keep catalog order), and returns the top 3.
pub fn match_jobs(
    candidate_skills: &[String],
    postings: &[JobPosting],
    scorer: &dyn SimilarityScorer,
) -> Vec<MatchResult> {
    let candidate_set: HashSet<String> =
        candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut results: Vec<MatchResult> = postings
        .iter()
        .map(|posting| {
            let score = scorer.score(candidate_skills, &posting.skills);
            let missing_skills = posting
                .skills
                .iter()
                .filter(|s| !candidate_set.contains(&s.to_lowercase()))
                .cloned()
                .collect();
            MatchResult {
                job_title: posting.title.clone(),
                score,
                required_skills: posting.skills.clone(),
                missing_skills,
            }
        })
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(3);
    results
}
