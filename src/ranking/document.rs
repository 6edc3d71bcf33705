//! Document structures for the ranking pipeline

use serde::{Deserialize, Serialize};

/// A decoded CV: display name plus raw text content.
///
/// Created when a file is successfully decoded, removed when the user
/// discards it, never mutated after creation. The name is a display
/// identifier and is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// A document augmented with its similarity against a specific job
/// description. The similarity is only meaningful relative to that job
/// description and must be recomputed when either input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub name: String,
    pub content: String,
    /// Fraction of the job description's unique terms present in this
    /// document, in [0.0, 1.0], rounded to two decimals.
    pub similarity: f64,
}

impl ScoredDocument {
    pub fn from_document(document: &Document, similarity: f64) -> Self {
        Self {
            name: document.name.clone(),
            content: document.content.clone(),
            similarity,
        }
    }

    /// Similarity as a display percentage.
    pub fn similarity_percent(&self) -> f64 {
        self.similarity * 100.0
    }
}
