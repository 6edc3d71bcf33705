//! Tokenization, scoring and ranking module

pub mod document;
pub mod ranker;
pub mod scorer;
pub mod session;
pub mod tokenizer;

pub use document::{Document, ScoredDocument};
pub use ranker::Ranker;
pub use scorer::SimilarityScorer;
pub use session::Session;
pub use tokenizer::Tokenizer;
