//! Deterministic ranking of documents against a job description

use crate::ranking::document::{Document, ScoredDocument};
use crate::ranking::scorer::SimilarityScorer;
use log::warn;

/// Ranks a document collection against a job description.
///
/// A pure function of (job description, documents); it owns no long-lived
/// state and is safe to re-run on every input change.
pub struct Ranker {
    scorer: SimilarityScorer,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            scorer: SimilarityScorer::new(),
        }
    }

    /// Produce the ranked list, sorted by similarity descending.
    ///
    /// Returns an empty list when the trimmed job description is empty or
    /// there are no documents: "nothing to classify yet", distinct from
    /// everything scoring zero.
    ///
    /// Failure policy: per-document isolation. A document whose scoring
    /// fails is logged and excluded; the rest of the batch proceeds.
    pub fn rank(&self, job_description: &str, documents: &[Document]) -> Vec<ScoredDocument> {
        if job_description.trim().is_empty() || documents.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<ScoredDocument> = documents
            .iter()
            .filter_map(|document| {
                match self.scorer.score(job_description, &document.content) {
                    Ok(similarity) => Some(ScoredDocument::from_document(document, similarity)),
                    Err(e) => {
                        warn!("Excluding '{}' from ranking: {}", document.name, e);
                        None
                    }
                }
            })
            .collect();

        // sort_by is stable: equal scores keep their input order
        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(pairs: &[(&str, &str)]) -> Vec<Document> {
        pairs
            .iter()
            .map(|(name, content)| Document::new(*name, *content))
            .collect()
    }

    #[test]
    fn test_descending_order_with_stable_ties() {
        let ranker = Ranker::new();
        let documents = docs(&[("A", "java"), ("B", "python"), ("C", "python java")]);

        let ranked = ranker.rank("python", &documents);

        let names: Vec<&str> = ranked.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(ranked[0].similarity, 1.0);
        assert_eq!(ranked[1].similarity, 1.0);
        assert_eq!(ranked[2].similarity, 0.0);
    }

    #[test]
    fn test_empty_job_description_yields_empty_list() {
        let ranker = Ranker::new();
        let documents = docs(&[("A", "java"), ("B", "python")]);

        assert!(ranker.rank("", &documents).is_empty());
        assert!(ranker.rank("   \n\t", &documents).is_empty());
    }

    #[test]
    fn test_no_documents_yields_empty_list() {
        let ranker = Ranker::new();
        assert!(ranker.rank("python developer", &[]).is_empty());
    }

    #[test]
    fn test_idempotence() {
        let ranker = Ranker::new();
        let documents = docs(&[
            ("A", "rust and go"),
            ("B", "rust and go"),
            ("C", "go only"),
        ]);

        let first = ranker.rank("rust go", &documents);
        let second = ranker.rank("rust go", &documents);
        assert_eq!(first, second);
        // tied A and B keep input order on every run
        assert_eq!(first[0].name, "A");
        assert_eq!(first[1].name, "B");
    }

    #[test]
    fn test_scored_documents_preserve_content() {
        let ranker = Ranker::new();
        let documents = docs(&[("A", "senior python engineer")]);

        let ranked = ranker.rank("python", &documents);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].content, "senior python engineer");
    }

    #[test]
    fn test_empty_document_scores_zero_but_stays_listed() {
        let ranker = Ranker::new();
        let documents = docs(&[("A", ""), ("B", "python")]);

        let ranked = ranker.rank("python", &documents);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "B");
        assert_eq!(ranked[1].similarity, 0.0);
    }
}
