// TF-IDF vectorizer.
//
// Every call builds its own vocabulary from the corpus it is given: the
// reference document plus the candidates. Weights are raw term counts times a
// smoothed inverse document frequency,
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// where n is the number of documents and df(t) the number of documents that
// contain t. The +1 terms keep idf finite and non-zero even for a term that
// appears everywhere. Each row is then scaled to unit Euclidean length.
//
// Tokenizing and weighting are independent per document, so both run on the
// rayon pool. Collecting from an indexed parallel iterator keeps row i tied to
// document i.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use super::matrix::DocumentMatrix;
use super::tokenizer::{tokenize, TokenizerConfig};
use super::traits::Vectorizer;
use crate::error::RankError;

/// TF-IDF vectorizer with a sorted, per-call vocabulary.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// How documents are split into terms
    pub tokenizer: TokenizerConfig,
    /// Replace raw term counts with 1 + ln(count)
    pub sublinear_tf: bool,
}

impl TfIdfVectorizer {
    pub fn new(tokenizer: TokenizerConfig) -> Self {
        Self {
            tokenizer,
            sublinear_tf: false,
        }
    }

    fn term_weight(&self, count: usize) -> f64 {
        if self.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn vectorize(&self, documents: &[&str]) -> Result<DocumentMatrix, RankError> {
        if documents.is_empty() {
            return Err(RankError::invalid(
                "cannot vectorize an empty corpus: the reference document is required",
            ));
        }

        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize(doc, &self.tokenizer))
            .collect();

        let counts: Vec<HashMap<&str, usize>> = tokenized
            .par_iter()
            .map(|tokens| {
                let mut tf: HashMap<&str, usize> = HashMap::new();
                for token in tokens {
                    *tf.entry(token.as_str()).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Document frequency per term; BTreeMap iteration gives the sorted vocabulary
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *doc_freq.entry(*term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut columns: HashMap<&str, usize> = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (column, (term, df)) in doc_freq.iter().enumerate() {
            columns.insert(*term, column);
            idf.push(((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0);
        }

        let dimension = idf.len();
        let rows: Vec<Vec<f64>> = counts
            .par_iter()
            .map(|tf| {
                let mut row = vec![0.0; dimension];
                for (term, &count) in tf {
                    if let Some(&column) = columns.get(term) {
                        row[column] = self.term_weight(count) * idf[column];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = dimension,
            "Vectorized corpus"
        );

        let vocabulary = doc_freq.into_keys().map(str::to_string).collect();
        Ok(DocumentMatrix::new(vocabulary, rows))
    }
}

/// Scale `row` to unit length in place. A zero row is left as is.
fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}

/// Vectorize with the default policy (minimum token length 2, no stop words,
/// raw term counts).
pub fn vectorize(documents: &[&str]) -> Result<DocumentMatrix, RankError> {
    TfIdfVectorizer::default().vectorize(documents)
}
