//! Output formatters for the ranking report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RankingReport;
use colored::Colorize;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored percentages
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn format_percent(&self, similarity: f64) -> String {
        let percent = similarity * 100.0;
        let text = format!("{:.0}%", percent);
        if !self.use_colors {
            return text;
        }
        if percent >= 70.0 {
            text.green().bold().to_string()
        } else if percent >= 40.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();

        let title = "CV Ranking Results";
        out.push_str(&format!(
            "{}\n{}\n\n",
            if self.use_colors {
                title.bold().to_string()
            } else {
                title.to_string()
            },
            "=".repeat(title.len())
        ));

        if report.results.is_empty() {
            out.push_str("Nothing to classify yet: add CVs and a job description.\n");
            return Ok(out);
        }

        for entry in &report.results {
            out.push_str(&format!(
                "{:>3}. {}  {}\n",
                entry.rank,
                entry.name,
                self.format_percent(entry.similarity)
            ));
            if self.detailed && !entry.preview.is_empty() {
                out.push_str(&format!("     {}\n", entry.preview));
            }
        }

        out.push_str(&format!(
            "\n{} CV(s) ranked at {}\n",
            report.total_documents,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::document::ScoredDocument;

    fn sample_report() -> RankingReport {
        RankingReport::from_ranked(&[
            ScoredDocument {
                name: "ana.pdf".to_string(),
                content: "senior python developer".to_string(),
                similarity: 0.75,
            },
            ScoredDocument {
                name: "bob.txt".to_string(),
                content: "java engineer".to_string(),
                similarity: 0.25,
            },
        ])
    }

    #[test]
    fn test_console_output_lists_ranked_entries() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("1. ana.pdf  75%"));
        assert!(output.contains("2. bob.txt  25%"));
    }

    #[test]
    fn test_console_detailed_includes_preview() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("senior python developer"));
    }

    #[test]
    fn test_console_empty_report_message() {
        let formatter = ConsoleFormatter::new(false, false);
        let report = RankingReport::from_ranked(&[]);
        let output = formatter.format_report(&report).unwrap();

        assert!(output.contains("Nothing to classify yet"));
    }

    #[test]
    fn test_json_output_roundtrips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        let parsed: RankingReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.total_documents, 2);
        assert_eq!(parsed.results[0].similarity, 0.75);
    }
}
