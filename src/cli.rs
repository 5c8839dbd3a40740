//! CLI interface for the resume ranker

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Rank resumes against a job description by keyword overlap")]
#[command(long_about = "Extract the top TF-IDF keywords of a job description and of every resume in a folder, then rank candidates by the share of job keywords they cover")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a folder of resumes against a job description
    Rank {
        /// Path to job description file (TXT)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Folder containing resume files
        #[arg(short, long)]
        resumes: Option<PathBuf>,

        /// Number of keywords extracted per document
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Score given to candidates with zero keyword overlap
        #[arg(long)]
        default_score: Option<f64>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Show job keywords and matched terms per candidate
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the keyword set of a single document
    Keywords {
        /// Path to a text file
        file: PathBuf,

        /// Number of keywords to extract
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank_command() {
        let cli = Cli::parse_from([
            "resume-ranker", "rank", "--job", "job.txt", "--resumes", "cvs", "-n", "10", "--detailed",
        ]);
        match cli.command {
            Commands::Rank { job, resumes, top_n, detailed, .. } => {
                assert_eq!(job, Some(PathBuf::from("job.txt")));
                assert_eq!(resumes, Some(PathBuf::from("cvs")));
                assert_eq!(top_n, Some(10));
                assert!(detailed);
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(Path::new("job.TXT"), &["txt"]).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), &["txt"]).is_err());
        assert!(validate_file_extension(Path::new("job"), &["txt"]).is_err());
    }
}
