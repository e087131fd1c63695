//! `compute_matches`: score one document against the rest of its owner's documents.

mod error;
mod matcher;
mod types;


pub use error::{ErrorBody, MatchError};
pub use matcher::MatchService;
pub use types::{MatchEntry, MatchReport};
