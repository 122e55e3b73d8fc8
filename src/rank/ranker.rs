// Rank candidates by similarity to the reference vector.
//
// Ties keep input order: `slice::sort_by` is a stable sort, and the
// comparator only looks at the score.

use std::cmp::Ordering;

use serde::Serialize;

use super::similarity::cosine_similarity;
use crate::error::RankError;

/// A candidate's position in the input and its similarity to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Index into the candidate list (0-based, reference excluded)
    pub index: usize,
    /// Cosine similarity, 0.0 to 1.0
    pub score: f64,
}

/// Candidates ordered by descending score.
pub type RankedResult = Vec<ScoredCandidate>;

/// Score every candidate against `reference` and sort descending.
///
/// Every candidate must have the reference's dimension; a mismatch fails the
/// whole call with `RankError::InvalidInput` and no partial result. An empty
/// candidate list yields an empty result.
pub fn rank<C: AsRef<[f64]>>(
    reference: &[f64],
    candidates: &[C],
) -> Result<RankedResult, RankError> {
    if let Some((index, candidate)) = candidates
        .iter()
        .enumerate()
        .find(|(_, c)| c.as_ref().len() != reference.len())
    {
        return Err(RankError::invalid(format!(
            "candidate {index} has dimension {} but the reference has dimension {}",
            candidate.as_ref().len(),
            reference.len()
        )));
    }

    let mut ranked: RankedResult = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| ScoredCandidate {
            index,
            score: cosine_similarity(reference, candidate.as_ref()),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(ranked)
}
