//! In-memory history of generated summaries.
//!
//! Records live for the session only; persisting them is a concern of
//! whatever embeds this crate.

use crate::mode::SummaryMode;
use crate::stats::{self, HistoryStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum characters of the original text used as a record title
const TITLE_CHARS: usize = 50;

/// One summarisation, with enough metadata to browse later
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Title derived from the start of the original text
    pub title: String,
    /// Mode the summary was generated with
    pub mode: SummaryMode,
    /// The summary itself
    pub summary: String,
    /// Words in the original text
    pub word_count: usize,
    /// Words in the summary
    pub summary_word_count: usize,
    /// When the summary was created
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    /// Create a record for a summary of `original_text`
    pub fn new(original_text: &str, summary: String, mode: SummaryMode) -> Self {
        Self {
            title: derive_title(original_text),
            mode,
            word_count: stats::word_count(original_text),
            summary_word_count: stats::word_count(&summary),
            summary,
            created_at: Utc::now(),
        }
    }
}

/// Session-scoped collection of summary records.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<SummaryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the history
    pub fn add(&mut self, record: SummaryRecord) {
        self.records.push(record);
    }

    /// All records, newest first
    pub fn list(&self) -> Vec<&SummaryRecord> {
        let mut results: Vec<&SummaryRecord> = self.records.iter().collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        results
    }

    /// Case-insensitive substring search over titles and summaries
    pub fn search(&self, query: &str) -> Vec<&SummaryRecord> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.title.to_lowercase().contains(&query_lower)
                    || record.summary.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Records generated with the given mode
    pub fn by_mode(&self, mode: SummaryMode) -> Vec<&SummaryRecord> {
        self.records.iter().filter(|r| r.mode == mode).collect()
    }

    /// Aggregate statistics over all records
    pub fn stats(&self) -> HistoryStats {
        stats::aggregate(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// First characters of the text, with an ellipsis when truncated
fn derive_title(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= TITLE_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(TITLE_CHARS).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, summary: &str, mode: SummaryMode) -> SummaryRecord {
        SummaryRecord::new(text, summary.to_string(), mode)
    }

    #[test]
    fn derives_short_titles_verbatim() {
        let r = record("Quick standup notes.", "Notes.", SummaryMode::Brief);
        assert_eq!(r.title, "Quick standup notes.");
    }

    #[test]
    fn truncates_long_titles_with_ellipsis() {
        let text = "x".repeat(80);
        let r = record(&text, "s", SummaryMode::Brief);
        assert_eq!(r.title.chars().count(), 53);
        assert!(r.title.ends_with("..."));
    }

    #[test]
    fn counts_words_of_both_texts() {
        let r = record("one two three four", "one two", SummaryMode::Brief);
        assert_eq!(r.word_count, 4);
        assert_eq!(r.summary_word_count, 2);
    }

    #[test]
    fn search_matches_title_and_summary() {
        let mut history = History::new();
        history.add(record("Budget meeting notes", "Totals agreed.", SummaryMode::Brief));
        history.add(record("Planning sync", "Roadmap drafted.", SummaryMode::Bullet));

        assert_eq!(history.search("budget").len(), 1);
        assert_eq!(history.search("ROADMAP").len(), 1);
        assert!(history.search("unrelated").is_empty());
    }

    #[test]
    fn filters_by_mode() {
        let mut history = History::new();
        history.add(record("a", "a", SummaryMode::Brief));
        history.add(record("b", "b", SummaryMode::Bullet));
        history.add(record("c", "c", SummaryMode::Bullet));

        assert_eq!(history.by_mode(SummaryMode::Bullet).len(), 2);
        assert_eq!(history.by_mode(SummaryMode::Action).len(), 0);
    }
}
