//! Ranking report structures

use crate::ranking::document::ScoredDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of content characters shown in the preview of a ranked entry.
const PREVIEW_LENGTH: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub total_documents: usize,
    pub results: Vec<RankedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub similarity: f64,
    pub preview: String,
    pub content: String,
}

impl RankingReport {
    pub fn from_ranked(ranked: &[ScoredDocument]) -> Self {
        let results = ranked
            .iter()
            .enumerate()
            .map(|(index, scored)| RankedEntry {
                rank: index + 1,
                name: scored.name.clone(),
                similarity: scored.similarity,
                preview: preview(&scored.content),
                content: scored.content.clone(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            total_documents: ranked.len(),
            results,
        }
    }
}

/// First characters of the content with whitespace collapsed for one-line
/// display.
fn preview(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= PREVIEW_LENGTH {
        collapsed
    } else {
        let truncated: String = collapsed.chars().take(PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_ranked() {
        let ranked = vec![
            ScoredDocument {
                name: "B".to_string(),
                content: "python".to_string(),
                similarity: 1.0,
            },
            ScoredDocument {
                name: "A".to_string(),
                content: "java".to_string(),
                similarity: 0.0,
            },
        ];

        let report = RankingReport::from_ranked(&ranked);
        assert_eq!(report.total_documents, 2);
        assert_eq!(report.results[0].rank, 1);
        assert_eq!(report.results[0].name, "B");
        assert_eq!(report.results[1].rank, 2);
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("python\n\n  developer\t here"), "python developer here");
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "word ".repeat(100);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 203);
    }
}
