//! Lexical similarity scoring between a job description and a document

use crate::error::Result;
use crate::ranking::tokenizer::Tokenizer;
use std::collections::HashSet;

/// Scores a document by the fraction of the job description's unique terms
/// that also appear in the document.
///
/// Deliberately asymmetric: the score is normalized by the size of the job
/// vocabulary, not by document length and not as a Jaccard measure. A short
/// but highly relevant CV can outscore a long one that repeats a few
/// matching terms amid much irrelevant text.
pub struct SimilarityScorer {
    tokenizer: Tokenizer,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Score `content` against `job_description`, returning a value in
    /// [0.0, 1.0] rounded to two decimals.
    ///
    /// Exactly 0.0 when either raw input is empty or the job description
    /// tokenizes to nothing.
    pub fn score(&self, job_description: &str, content: &str) -> Result<f64> {
        if job_description.is_empty() || content.is_empty() {
            return Ok(0.0);
        }

        let job_terms: HashSet<String> =
            self.tokenizer.tokenize(job_description).into_iter().collect();
        if job_terms.is_empty() {
            return Ok(0.0);
        }

        let document_terms: HashSet<String> =
            self.tokenizer.tokenize(content).into_iter().collect();

        // Each unique document term counts at most once.
        let common = document_terms
            .iter()
            .filter(|term| job_terms.contains(*term))
            .count();

        Ok(round_two_decimals(common as f64 / job_terms.len() as f64))
    }
}

/// Round half away from zero to two decimal places.
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
