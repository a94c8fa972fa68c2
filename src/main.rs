//! Feedback insights: turn raw feedback files into sentiment-labeled CSV data

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;
mod sentiment;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{FeedbackError, Result};
use log::{error, info};
use output::{exporter, summary};
use processing::pipeline;
use sentiment::SentimentAnalyzer;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            input,
            output,
            detailed,
            no_export,
        } => {
            info!("Starting feedback sentiment analysis");

            cli::validate_file_extension(&input, cli::SUPPORTED_EXTENSIONS)
                .map_err(FeedbackError::UnsupportedFormat)?;

            println!("📄 Feedback file: {}", input.display());

            // The analyzer is the one process-lifetime resource: built once
            // here and passed by reference into the pipeline.
            let analyzer = SentimentAnalyzer::new();

            let table = pipeline::process_file(&input, &analyzer, &config.processing).await?;
            println!(
                "✅ Labeled {} record(s) across {} column(s)\n",
                table.row_count(),
                table.columns().len()
            );

            let preview_rows = if detailed {
                table.row_count()
            } else {
                config.output.preview_rows
            };
            summary::print_preview(&table, preview_rows, config.output.color_output);
            summary::print_distribution(&table, config.output.color_output);

            if !no_export {
                let path = output
                    .unwrap_or_else(|| PathBuf::from(&config.output.default_filename));
                exporter::write_csv(&table, &path)?;
                println!("\n💾 Structured CSV written to {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Text column: {}", config.processing.text_column);
                println!("Include polarity: {}", config.processing.include_polarity);
                println!("Default export: {}", config.output.default_filename);
                println!("Preview rows: {}", config.output.preview_rows);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
