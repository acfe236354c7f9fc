//! Interactive session for summarisation.
//!
//! A dialoguer-driven menu loop: summarise pasted or editor-composed text,
//! then browse, search and total up the summaries made this session.

use crate::agent::RemoteSummarizer;
use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::history::{History, SummaryRecord};
use crate::local;
use crate::mode::SummaryMode;
use crate::stats;
use colored::Colorize;
use dialoguer::{Input, Select};

/// Run the interactive session until the user quits
pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let remote = RemoteSummarizer::from_config(&config);
    let mut history = History::new();

    println!("{}", "condensa - chat summarisation".bold());
    println!("History lives in memory and is discarded when you quit.\n");

    loop {
        let choice = Select::new()
            .with_prompt("What next")
            .items(&[
                "Summarise text",
                "View history",
                "Search history",
                "Session stats",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => summarise(&remote, &mut history).await?,
            1 => show_history(&history),
            2 => search_history(&history)?,
            3 => show_stats(&history),
            _ => break,
        }
    }

    Ok(())
}

async fn summarise(
    remote: &RemoteSummarizer<GeminiClient>,
    history: &mut History,
) -> anyhow::Result<()> {
    let text = read_text()?;
    if text.trim().is_empty() {
        println!("{}", "Please enter some text to summarise.".red());
        return Ok(());
    }

    let mode = pick_mode()?;

    let engine = Select::new()
        .with_prompt("Engine")
        .items(&["Local (offline)", "Remote (Gemini)"])
        .default(0)
        .interact()?;

    let summary = if engine == 0 {
        local::summarize(&text, mode)
    } else {
        match remote.summarize(&text, mode).await {
            Ok(summary) => summary,
            Err(e) => {
                // Surface the failure and return to the menu
                println!("{}", e.to_string().red());
                return Ok(());
            }
        }
    };

    let record = SummaryRecord::new(&text, summary, mode);
    print_record(&record);
    history.add(record);

    Ok(())
}

/// Collect the text to summarise, inline or via $EDITOR
fn read_text() -> anyhow::Result<String> {
    let method = Select::new()
        .with_prompt("Input")
        .items(&["Type or paste a line", "Compose in $EDITOR"])
        .default(0)
        .interact()?;

    let text = if method == 0 {
        Input::<String>::new()
            .with_prompt("Text")
            .allow_empty(true)
            .interact_text()?
    } else {
        edit::edit("")?
    };

    Ok(text)
}

fn pick_mode() -> anyhow::Result<SummaryMode> {
    let items: Vec<String> = SummaryMode::ALL
        .iter()
        .map(|m| format!("{} - {}", m.label(), m.description()))
        .collect();

    let index = Select::new()
        .with_prompt("Summary mode")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(SummaryMode::ALL[index])
}

fn print_record(record: &SummaryRecord) {
    println!("\n=== {} ===\n", record.mode.label().bold());
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
    println!();
}

fn show_history(history: &History) {
    if history.is_empty() {
        println!("No summaries yet this session.\n");
        return;
    }

    println!("Session summaries ({}):\n", history.len());
    for record in history.list() {
        println!(
            "📄 {} ({})",
            record.title,
            record.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("   {} · {} words\n", record.mode.label(), record.summary_word_count);
    }
}

fn search_history(history: &History) -> anyhow::Result<()> {
    let query: String = Input::new().with_prompt("Search for").interact_text()?;

    let results = history.search(&query);
    if results.is_empty() {
        println!("No results found for: {}\n", query);
        return Ok(());
    }

    println!("Search results for '{}':\n", query);
    for record in results {
        println!("📄 {} · {}", record.title, record.mode.label());
        println!("   {}\n", first_line(&record.summary));
    }

    Ok(())
}

fn show_stats(history: &History) {
    let stats = history.stats();
    println!("Summaries:          {}", stats.total_summaries);
    println!("Words processed:    {}", stats.words_processed);
    println!("Words in summaries: {}", stats.words_in_summaries);
    println!("Avg compression:    {}%\n", stats.average_compression);
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
