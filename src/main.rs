//! Condensa CLI - chat and conversation summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use condensa::{agent::RemoteSummarizer, local, stats, ui, Config, SummaryMode, SummaryRecord};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "condensa")]
#[command(author, version, about = "CLI for chat and conversation summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text from a file, or stdin when no file is given
    Summarise {
        /// File containing the text to summarise
        file: Option<PathBuf>,
        /// Summary mode: brief, detailed, bullet, action or technical
        #[arg(long, default_value = "brief")]
        mode: SummaryMode,
        /// Use the Gemini API instead of the local engine
        #[arg(long)]
        remote: bool,
        /// Emit the summary record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available summary modes
    Modes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Summarise {
            file,
            mode,
            remote,
            json,
        }) => {
            let text = read_input(file.as_deref())?;
            if text.trim().is_empty() {
                anyhow::bail!("no text to summarise");
            }

            let summary = if remote {
                let config = Config::load()?;
                let summarizer = RemoteSummarizer::from_config(&config);
                summarizer.summarize(&text, mode).await?
            } else {
                local::summarize(&text, mode)
            };

            let record = SummaryRecord::new(&text, summary, mode);

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("=== {} ===\n", record.mode.label());
                println!("{}\n", record.summary);
                println!(
                    "{}",
                    format!(
                        "{} words -> {} words ({}% of the original)",
                        record.word_count,
                        record.summary_word_count,
                        stats::compression_ratio(record.word_count, record.summary_word_count)
                    )
                    .dimmed()
                );
            }
        }
        Some(Commands::Modes) => {
            for mode in SummaryMode::ALL {
                println!(
                    "{:<10} {:<14} {}",
                    mode.to_string().bold(),
                    mode.label(),
                    mode.description()
                );
            }
        }
        None => {
            // Default: launch the interactive session
            ui::run().await?;
        }
    }

    Ok(())
}

/// Read the input text from a file, or stdin when none is given
fn read_input(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
