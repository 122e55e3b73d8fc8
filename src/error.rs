// Error type for the ranking core.
//
// The vectorizer and ranker are pure functions, so the only failure mode is
// being handed input they cannot work with. Everything outside the core
// (file loading, reports, the CLI) uses anyhow.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RankError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RankError::InvalidInput(msg.into())
    }
}
