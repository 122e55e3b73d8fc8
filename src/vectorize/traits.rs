// Vectorizer trait: swap-ready abstraction.
//
// The screening pipeline only needs "corpus in, matrix out". TF-IDF is the
// one implementation today; a different weighting scheme can slot in without
// touching the ranker or the pipeline.

use super::matrix::DocumentMatrix;
use crate::error::RankError;

/// Trait for turning a corpus into comparable row vectors.
///
/// `documents[0]` is the reference document. Implementations must return
/// one row per document, in input order, all of the same length, and must
/// reject an empty corpus with `RankError::InvalidInput`.
pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, documents: &[&str]) -> Result<DocumentMatrix, RankError>;
}
