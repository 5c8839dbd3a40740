//! Output formatters for ranking reports

use crate::config::OutputFormat;
use crate::error::{Result, RankerError};
use crate::output::report::RankingReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter: one `name: score` line per candidate
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that dispatches to the formatter supporting the requested format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("{}\n", title.color(Color::Blue).bold())
        } else {
            format!("{}\n", title)
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 0.75 => Color::Green,
            s if s >= 0.5 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        if self.detailed {
            output.push_str(&self.format_header("Job Keywords:"));
            output.push_str(&format!("  {}\n\n", report.job_keywords.join(", ")));
        }

        output.push_str(&self.format_header("Ranked Candidates:"));
        for candidate in &report.candidates {
            let score = format!("{:.2}", candidate.score);
            output.push_str(&format!(
                "{}: {}\n",
                candidate.name,
                self.colorize(&score, Self::score_color(candidate.score))
            ));

            if self.detailed {
                if candidate.masked {
                    output.push_str(&format!(
                        "    {}\n",
                        self.colorize("no keyword overlap, default score applied", Color::BrightBlack)
                    ));
                } else {
                    output.push_str(&format!(
                        "    matched: {}\n",
                        candidate.matched_keywords.join(", ")
                    ));
                }
            }
        }

        if self.detailed {
            output.push_str(&format!(
                "\n{} candidates, {} with default score (top_n = {})\n",
                report.metadata.candidate_count, report.metadata.masked_count, report.metadata.top_n
            ));
        }

        Ok(output)
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
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
            ],
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        self.formatters
            .iter()
            .find(|f| f.supports_format() == *format)
            .ok_or_else(|| RankerError::OutputFormatting(format!("No formatter for {:?}", format)))?
            .format_report(report)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, job_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(job_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ranking{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ranking{}.json", base_name, timestamp_suffix),
    }
}
