//! Input processing module
//! Handles file detection, text extraction, and batch ingestion

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::{BatchOutcome, InputManager};
