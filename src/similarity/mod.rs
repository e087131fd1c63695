//! Lexical and term-frequency estimators.
//!
//! Both operate on light-normalized tokens, are symmetric in their arguments, and return
//! scores in `[0, 1]` (`0.0` whenever either side normalizes to nothing).

pub mod lexical;
pub mod vector;

#[cfg(test)]
mod tests;

pub use lexical::{jaccard, jaccard_sets};
pub use vector::{cosine_similarity, cosine_tf, sparse_cosine, term_frequencies};
