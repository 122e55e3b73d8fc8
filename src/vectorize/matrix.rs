// DocumentMatrix: the vectorized corpus for a single ranking call.

use serde::Serialize;

/// One row per input document (row 0 is the reference), one column per
/// vocabulary term. The vocabulary is sorted, so column order is stable for
/// a given corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DocumentMatrix {
    /// Rows must be non-empty and each row as long as the vocabulary.
    pub(crate) fn new(vocabulary: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == vocabulary.len()));
        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The reference document's vector (row 0).
    pub fn reference(&self) -> &[f64] {
        &self.rows[0]
    }

    /// Candidate vectors, in input order (rows 1..).
    pub fn candidates(&self) -> &[Vec<f64>] {
        &self.rows[1..]
    }

    /// Vector length shared by every row.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents, reference included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a matrix produced by a vectorizer.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column of `term`, if it is in this corpus's vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|known| known.as_str().cmp(term))
            .ok()
    }

    /// Terms with non-zero weight in both documents, in vocabulary order.
    pub fn shared_terms(&self, left: usize, right: usize) -> Vec<&str> {
        let (Some(a), Some(b)) = (self.row(left), self.row(right)) else {
            return Vec::new();
        };

        a.iter()
            .zip(b)
            .zip(&self.vocabulary)
            .filter(|((x, y), _)| **x > 0.0 && **y > 0.0)
            .map(|(_, term)| term.as_str())
            .collect()
    }
}
