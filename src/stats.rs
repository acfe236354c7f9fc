//! Word statistics for summaries and history.

use crate::history::SummaryRecord;
use serde::Serialize;

/// Number of whitespace-separated words in the text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Summary length as a percentage of the original, rounded.
///
/// Returns 0 when the original is empty.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> u32 {
    if original_words == 0 {
        return 0;
    }
    ((summary_words as f64 / original_words as f64) * 100.0).round() as u32
}

/// Aggregate statistics over a set of summary records
#[derive(Debug, Clone, Serialize)]
pub struct HistoryStats {
    /// Number of summaries generated
    pub total_summaries: usize,
    /// Total words across the original texts
    pub words_processed: usize,
    /// Total words across the summaries
    pub words_in_summaries: usize,
    /// Mean compression ratio across records, in percent
    pub average_compression: u32,
}

/// Compute aggregate statistics for the given records
pub fn aggregate(records: &[SummaryRecord]) -> HistoryStats {
    let total_summaries = records.len();
    let words_processed = records.iter().map(|r| r.word_count).sum();
    let words_in_summaries = records.iter().map(|r| r.summary_word_count).sum();

    let average_compression = if total_summaries == 0 {
        0
    } else {
        let sum: u32 = records
            .iter()
            .map(|r| compression_ratio(r.word_count, r.summary_word_count))
            .sum();
        sum / total_summaries as u32
    };

    HistoryStats {
        total_summaries,
        words_processed,
        words_in_summaries,
        average_compression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::SummaryMode;

    #[test]
    fn counts_whitespace_separated_words() {
        assert_eq!(word_count("one  two\nthree\t four"), 4);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn compression_is_a_rounded_percentage() {
        assert_eq!(compression_ratio(100, 25), 25);
        assert_eq!(compression_ratio(3, 1), 33);
        assert_eq!(compression_ratio(0, 5), 0);
    }

    #[test]
    fn aggregates_over_records() {
        let records = vec![
            SummaryRecord::new("one two three four", "one two".to_string(), SummaryMode::Brief),
            SummaryRecord::new("a b c d e f g h", "a b".to_string(), SummaryMode::Bullet),
        ];

        let stats = aggregate(&records);
        assert_eq!(stats.total_summaries, 2);
        assert_eq!(stats.words_processed, 12);
        assert_eq!(stats.words_in_summaries, 4);
        // (50 + 25) / 2
        assert_eq!(stats.average_compression, 37);
    }

    #[test]
    fn empty_history_aggregates_to_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_summaries, 0);
        assert_eq!(stats.average_compression, 0);
    }
}
