//! Batch ingestion of CV files into documents

use crate::error::{CvRankerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::ranking::document::Document;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

/// Default maximum number of files accepted in a single batch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 20;

/// Outcome of ingesting one batch of files.
///
/// Unsupported files are skipped with a notice, decode failures are
/// per-file diagnostics; neither aborts the batch. Only a batch-size
/// violation rejects the whole batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub documents: Vec<Document>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl BatchOutcome {
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} CV(s) loaded", self.documents.len())];
        if !self.skipped.is_empty() {
            parts.push(format!("{} unsupported file(s) skipped", self.skipped.len()));
        }
        if !self.failed.is_empty() {
            parts.push(format!("{} file(s) failed to decode", self.failed.len()));
        }
        parts.join(", ")
    }
}

enum FileResult {
    Loaded(Document),
    Skipped(String),
    Failed(String, String),
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_batch_size: usize,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = max;
        self
    }

    /// Ingest a batch of files, decoding them concurrently.
    ///
    /// Rejects the entire batch when it exceeds the batch-size bound;
    /// nothing is ingested in that case. Results are merged back in input
    /// order so downstream tie-breaking stays deterministic.
    pub async fn load_batch(&mut self, paths: &[PathBuf]) -> Result<BatchOutcome> {
        if paths.len() > self.max_batch_size {
            return Err(CvRankerError::BatchTooLarge {
                count: paths.len(),
                max: self.max_batch_size,
            });
        }

        let mut outcome = BatchOutcome::default();
        let mut tasks: JoinSet<(usize, FileResult)> = JoinSet::new();
        let mut results: Vec<Option<FileResult>> = Vec::new();

        for (index, path) in paths.iter().enumerate() {
            let name = display_name(path);

            if self.enable_cache {
                if let Some(cached) = self.cache.get(&path.to_string_lossy().to_string()) {
                    info!("Using cached text for: {}", path.display());
                    results.push(Some(FileResult::Loaded(Document::new(name, cached.clone()))));
                    continue;
                }
            }

            results.push(None);
            let path = path.clone();
            tasks.spawn(async move { (index, decode_file(&path, name).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| {
                CvRankerError::InvalidInput(format!("Decode task failed: {}", e))
            })?;
            results[index] = Some(result);
        }

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Some(FileResult::Loaded(document)) => {
                    if self.enable_cache {
                        self.cache.insert(
                            paths[index].to_string_lossy().to_string(),
                            document.content.clone(),
                        );
                    }
                    outcome.documents.push(document);
                }
                Some(FileResult::Skipped(name)) => {
                    warn!("Unsupported file type, skipping: {}", name);
                    outcome.skipped.push(name);
                }
                Some(FileResult::Failed(name, diagnostic)) => {
                    warn!("Failed to decode '{}': {}", name, diagnostic);
                    outcome.failed.push((name, diagnostic));
                }
                None => unreachable!("every batch entry produces a result"),
            }
        }

        info!("Batch ingested: {}", outcome.summary());
        Ok(outcome)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

async fn decode_file(path: &Path, name: String) -> FileResult {
    let decoded = match FileType::from_path(path) {
        FileType::Pdf => {
            info!("Extracting text from PDF: {}", path.display());
            PdfExtractor.extract(path).await
        }
        FileType::Text => {
            info!("Reading plain text file: {}", path.display());
            PlainTextExtractor.extract(path).await
        }
        FileType::Unknown => return FileResult::Skipped(name),
    };

    match decoded {
        Ok(content) => FileResult::Loaded(Document::new(name, content)),
        Err(e) => FileResult::Failed(name, e.to_string()),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
