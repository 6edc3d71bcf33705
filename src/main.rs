//! CV ranker: rank candidate CVs against a job description by lexical overlap

mod cli;
mod config;
mod error;
mod input;
mod output;
mod ranking;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{CvRankerError, Result};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::RankingReport;
use ranking::session::Session;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            job_text,
            cvs,
            output,
            detailed,
            save,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(CvRankerError::InvalidInput)?;

            let job_description = resolve_job_description(job, job_text).await?;
            if job_description.trim().is_empty() {
                return Err(CvRankerError::InvalidInput(
                    "Job description is empty; nothing to classify".to_string(),
                ));
            }

            info!("Ingesting {} CV file(s)", cvs.len());
            let mut input_manager = InputManager::new()
                .with_cache(config.processing.enable_caching)
                .with_max_batch_size(config.processing.max_batch_size);
            let outcome = input_manager.load_batch(&cvs).await?;

            for name in &outcome.skipped {
                eprintln!("Skipped unsupported file: {}", name);
            }
            for (name, diagnostic) in &outcome.failed {
                eprintln!("Failed to decode {}: {}", name, diagnostic);
            }

            let batch_summary = outcome.summary();
            let mut session = Session::new();
            session.add_documents(outcome.documents);
            session.set_job_description(job_description);

            let report = RankingReport::from_ranked(session.ranked());
            let generator = ReportGenerator::new(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
            );
            let rendered = generator.generate(&report, &output_format)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            println!("{}", batch_summary);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Max batch size: {}", config.processing.max_batch_size);
                println!("Caching: {}", config.processing.enable_caching);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

async fn resolve_job_description(
    job: Option<PathBuf>,
    job_text: Option<String>,
) -> Result<String> {
    match (job, job_text) {
        (Some(path), None) => Ok(tokio::fs::read_to_string(&path).await?),
        (None, Some(text)) => Ok(text),
        _ => Err(CvRankerError::InvalidInput(
            "Provide the job description with --job <FILE> or --job-text <TEXT>".to_string(),
        )),
    }
}
