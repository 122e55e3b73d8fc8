// Ranking: cosine similarity against the reference and a stable ordering.

pub mod ranker;
pub mod similarity;

pub use ranker::{rank, RankedResult, ScoredCandidate};
pub use similarity::cosine_similarity;
