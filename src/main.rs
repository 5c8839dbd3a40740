//! Resume ranker: rank resumes against a job description by keyword overlap

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info, warn};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::Config;
use resume_ranker::input::encoding::detect_encoding;
use resume_ranker::input::file_detector::{self, FileType};
use resume_ranker::input::DocumentLoader;
use resume_ranker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ranker::output::report::RankingReport;
use resume_ranker::processing::keywords::KeywordExtractor;
use resume_ranker::processing::observer::LogObserver;
use resume_ranker::processing::ranker::CandidateRanker;
use resume_ranker::RankerError;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            top_n,
            default_score,
            output,
            detailed,
            save,
            no_color,
        } => {
            if let Some(job) = job {
                config.input.job_description = job;
            }
            if let Some(resumes) = resumes {
                config.input.resume_dir = resumes;
            }
            if let Some(top_n) = top_n {
                config.ranking.top_n = top_n;
            }
            if let Some(default_score) = default_score {
                config.ranking.default_score = default_score;
            }
            if let Some(output) = output {
                config.output.format = cli::parse_output_format(&output)
                    .map_err(RankerError::InvalidInput)?;
            }
            config.output.detailed |= detailed;
            config.output.color_output &= !no_color;
            config.validate()?;

            rank(&config, save.as_deref())?;
        }

        Commands::Keywords { file, top_n } => {
            let top_n = top_n.unwrap_or(config.ranking.top_n);
            if top_n == 0 {
                return Err(RankerError::InvalidInput("--top-n must be at least 1".to_string()).into());
            }
            if file_detector::detect(&file) == FileType::Unknown {
                warn!("{} does not look like a plain text file", file.display());
            }

            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let keywords = KeywordExtractor::new(top_n).extract_weighted(&text);
            if keywords.is_empty() {
                println!("No keywords found in {}", file.display());
            }
            for (i, keyword) in keywords.iter().enumerate() {
                println!("{:>3}. {:<24} {:.4}", i + 1, keyword.term, keyword.weight);
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| RankerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    let default_config = Config::default();
                    match &config_path {
                        Some(path) => default_config.save_to(path)
                            .with_context(|| format!("Failed to write {}", path.display()))?,
                        None => default_config.save().context("Failed to write configuration")?,
                    }
                    println!("Configuration reset to defaults");
                }

                Some(ConfigAction::Path) => {
                    let path = config_path.unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn rank(config: &Config, save: Option<&Path>) -> anyhow::Result<()> {
    let observer = LogObserver;
    let loader = DocumentLoader::new(config.input.resume_extension.clone()).with_observer(&observer);

    if let Err(e) = cli::validate_file_extension(&config.input.job_description, &["txt", "text"]) {
        warn!("Job description file: {}", e);
    }

    let job = loader
        .load_job_description(&config.input.job_description)
        .with_context(|| format!("Failed to load job description {}", config.input.job_description.display()))?;
    let resumes = loader
        .load_resumes(&config.input.resume_dir)
        .with_context(|| format!("Failed to load resumes from {}", config.input.resume_dir.display()))?;
    info!("Loaded {} resumes from {}", resumes.len(), config.input.resume_dir.display());

    if let Some(first) = resumes.first() {
        let path = config.input.resume_dir.join(&first.name);
        match detect_encoding(&path) {
            Ok(encoding) => debug!("Detected encoding of {}: {}", first.name, encoding.name()),
            Err(e) => debug!("Encoding probe failed for {}: {}", first.name, e),
        }
    }

    let ranker = CandidateRanker::new(
        KeywordExtractor::new(config.ranking.top_n),
        config.ranking.default_score,
    )
    .with_observer(&observer);
    let outcome = ranker.run(&job, &resumes)?;

    let report = RankingReport::from_outcome(
        job.name.clone(),
        outcome,
        ranker.extractor().top_n(),
        ranker.default_score(),
    );
    if let Some(best) = report.best_candidate() {
        info!("Top candidate: {} ({:.2})", best.name, best.score);
    }

    let generator = ReportGenerator::with_options(
        config.output.color_output,
        config.output.detailed,
        true,
    );
    let rendered = generator.generate_report(&report, &config.output.format)?;
    print!("{}", rendered);

    if let Some(path) = save {
        // Saved copies never carry terminal color codes
        let plain = ReportGenerator::with_options(false, config.output.detailed, true)
            .generate_report(&report, &config.output.format)?;
        let path = if path.is_dir() {
            path.join(suggest_filename(&config.output.format, &job.name, true))
        } else {
            path.to_path_buf()
        };
        save_report_to_file(&plain, &path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        info!("Report saved to {}", path.display());
    }

    Ok(())
}
