//! Report building and output formatting module

pub mod formatter;
pub mod report;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, ReportGenerator};
pub use report::{RankedEntry, RankingReport};
