// Screen a set of candidate documents against a reference document.
//
// This is the request/response boundary around the ranking core: strings in,
// ranked results out, nothing held between calls. The vocabulary is rebuilt
// from scratch on every call because its columns only mean something for the
// corpus that produced them.

use std::iter;

use serde::Serialize;
use tracing::info;

use super::limits::Limits;
use crate::error::RankError;
use crate::rank::{rank, RankedResult, ScoredCandidate};
use crate::source::SourceDocument;
use crate::vectorize::Vectorizer;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking
    pub rank: usize,
    pub identifier: String,
    /// Position in the caller's candidate list
    pub index: usize,
    pub score: f64,
    /// Extraction produced no text for this document
    pub unreadable: bool,
    /// Reference terms that also appear in this candidate, in vocabulary order
    pub matched_keywords: Vec<String>,
}

/// Result of a screening call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Screening {
    /// Distinct terms across the reference and all candidates
    pub vocabulary_size: usize,
    /// Distinct terms retained from the reference
    pub reference_terms: usize,
    /// Candidates in descending score order
    pub candidates: Vec<RankedCandidate>,
}

impl Screening {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The highest-scoring candidate, if there is one.
    pub fn top(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }

    /// Candidates sharing at least one term with the reference, in ranked order.
    pub fn keyword_matches(&self) -> Vec<&RankedCandidate> {
        self.candidates
            .iter()
            .filter(|c| !c.matched_keywords.is_empty())
            .collect()
    }

    /// Candidates whose text could not be extracted.
    pub fn unreadable(&self) -> Vec<&RankedCandidate> {
        self.candidates.iter().filter(|c| c.unreadable).collect()
    }

    /// The bare (index, score) ranking.
    pub fn scores(&self) -> RankedResult {
        self.candidates
            .iter()
            .map(|c| ScoredCandidate {
                index: c.index,
                score: c.score,
            })
            .collect()
    }
}

/// Vectorize the reference with every candidate, rank, and attach identifiers.
///
/// Fails with `RankError::InvalidInput` if `limits` are exceeded or the
/// vectorizer hands back a malformed matrix. Zero candidates is a valid call
/// and returns an empty screening.
pub fn screen(
    vectorizer: &dyn Vectorizer,
    limits: &Limits,
    reference: &str,
    candidates: &[SourceDocument],
) -> Result<Screening, RankError> {
    limits.check(reference, candidates)?;

    let corpus: Vec<&str> = iter::once(reference)
        .chain(candidates.iter().map(|doc| doc.text.as_str()))
        .collect();

    let matrix = vectorizer.vectorize(&corpus)?;
    if matrix.len() != corpus.len() {
        return Err(RankError::invalid(format!(
            "vectorizer returned {} rows for {} documents",
            matrix.len(),
            corpus.len()
        )));
    }

    let scored = rank(matrix.reference(), matrix.candidates())?;

    let ranked: Vec<RankedCandidate> = scored
        .iter()
        .enumerate()
        .map(|(position, sc)| {
            let doc = &candidates[sc.index];
            RankedCandidate {
                rank: position + 1,
                identifier: doc.identifier.clone(),
                index: sc.index,
                score: sc.score,
                unreadable: doc.unreadable,
                matched_keywords: matrix
                    .shared_terms(0, sc.index + 1)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }
        })
        .collect();

    let reference_terms = matrix.reference().iter().filter(|&&w| w > 0.0).count();

    info!(
        candidates = ranked.len(),
        vocabulary = matrix.dimension(),
        reference_terms,
        top_score = ranked.first().map(|c| c.score).unwrap_or(0.0),
        "Ranked candidates"
    );

    Ok(Screening {
        vocabulary_size: matrix.dimension(),
        reference_terms,
        candidates: ranked,
    })
}
