// resumerank: rank resumes against a job description by lexical similarity
//
// This is the library root. `vectorize` and `rank` are the pure ranking core;
// `pipeline` joins them to named documents, `source` loads those documents
// from disk, and `output` renders the result.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod source;
pub mod vectorize;

pub use error::RankError;
pub use rank::{rank, RankedResult, ScoredCandidate};
pub use vectorize::{vectorize, DocumentMatrix};
