// Screening pipeline: limits, vectorize, rank, and join results back to
// document identifiers.

pub mod limits;
pub mod screen;

pub use limits::Limits;
pub use screen::{screen, RankedCandidate, Screening};
