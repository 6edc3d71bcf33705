//! CV ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ranking;

pub use config::Config;
pub use error::{CvRankerError, Result};
