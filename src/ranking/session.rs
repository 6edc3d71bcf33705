//! Single-owner session holding the job description and document collection

use crate::ranking::document::{Document, ScoredDocument};
use crate::ranking::ranker::Ranker;
use log::{debug, info};

/// Owns the (job description, document collection) pair and keeps the
/// ranked list in sync with it.
///
/// Every mutation re-runs the ranking pipeline, so the ranked list is
/// never stale relative to its inputs. All operations are serialized
/// through this single owner; there are no concurrent writers.
pub struct Session {
    job_description: String,
    documents: Vec<Document>,
    ranker: Ranker,
    ranked: Vec<ScoredDocument>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            job_description: String::new(),
            documents: Vec::new(),
            ranker: Ranker::new(),
            ranked: Vec::new(),
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
        self.reclassify();
    }

    /// Append newly decoded documents to the collection.
    pub fn add_documents(&mut self, documents: Vec<Document>) {
        if documents.is_empty() {
            return;
        }
        info!("Adding {} document(s) to the session", documents.len());
        self.documents.extend(documents);
        self.reclassify();
    }

    /// Remove a document by its position in the collection. Out-of-range
    /// indices are a no-op.
    pub fn remove_document(&mut self, index: usize) -> Option<Document> {
        if index >= self.documents.len() {
            return None;
        }
        let removed = self.documents.remove(index);
        info!("Removed document '{}'", removed.name);
        self.reclassify();
        Some(removed)
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The current ranked list, sorted by similarity descending. Empty
    /// until both a job description and at least one document are present.
    pub fn ranked(&self) -> &[ScoredDocument] {
        &self.ranked
    }

    fn reclassify(&mut self) {
        self.ranked = self.ranker.rank(&self.job_description, &self.documents);
        debug!(
            "Reclassified {} document(s) into {} ranked result(s)",
            self.documents.len(),
            self.ranked.len()
        );
    }
}
