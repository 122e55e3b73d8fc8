// Vectorization: tokenizing a corpus and weighting it with TF-IDF.

pub mod matrix;
pub mod tfidf;
pub mod tokenizer;
pub mod traits;

pub use matrix::DocumentMatrix;
pub use tfidf::{vectorize, TfIdfVectorizer};
pub use tokenizer::{tokenize, TokenizerConfig};
pub use traits::Vectorizer;
