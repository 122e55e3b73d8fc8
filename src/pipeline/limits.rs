// Size caps checked before a corpus reaches the vectorizer.

use crate::error::RankError;
use crate::source::SourceDocument;

pub const DEFAULT_MAX_CANDIDATES: usize = 500;
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 2 * 1024 * 1024;

/// Upper bounds on a single screening call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_candidates: usize,
    /// Applies to the reference and to each candidate
    pub max_document_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl Limits {
    /// Reject the call before any work is done if it exceeds a cap.
    pub fn check(&self, reference: &str, candidates: &[SourceDocument]) -> Result<(), RankError> {
        if candidates.len() > self.max_candidates {
            return Err(RankError::invalid(format!(
                "{} candidates exceeds the limit of {}",
                candidates.len(),
                self.max_candidates
            )));
        }

        if reference.len() > self.max_document_bytes {
            return Err(RankError::invalid(format!(
                "reference document is {} bytes, over the limit of {}",
                reference.len(),
                self.max_document_bytes
            )));
        }

        if let Some(doc) = candidates
            .iter()
            .find(|doc| doc.text.len() > self.max_document_bytes)
        {
            return Err(RankError::invalid(format!(
                "{} is {} bytes, over the limit of {}",
                doc.identifier,
                doc.text.len(),
                self.max_document_bytes
            )));
        }

        Ok(())
    }
}
