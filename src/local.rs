//! Local summarisation without network access.
//!
//! A deterministic sentence-truncation transform: the input is segmented on
//! sentence-terminating punctuation and each mode keeps a fixed prefix of the
//! sentences, formatted to match the mode.

use crate::mode::SummaryMode;

/// Sentences kept in a brief summary
const BRIEF_SENTENCES: usize = 2;
/// Sentences kept in a bullet summary
const BULLET_SENTENCES: usize = 5;
/// Sentences kept in a detailed summary
const DETAILED_SENTENCES: usize = 8;
/// Sentences per paragraph in a detailed summary
const PARAGRAPH_SENTENCES: usize = 2;
/// Sentences kept in action and technical summaries
const FOCUSED_SENTENCES: usize = 5;

/// Marker prefixed to each line of a bullet summary
const BULLET_MARKER: &str = "• ";

const DETAILED_TRAILER: &str = "This comprehensive analysis covers the key aspects discussed in the original text, providing context and relevant details for better understanding.";
const ACTION_TRAILER: &str = "Action items and next steps are highlighted for follow-up.";
const TECHNICAL_TRAILER: &str = "Technical specifications and implementation details are highlighted for precise understanding.";

/// Summarise `text` according to `mode`.
///
/// Pure and deterministic: the same input always yields the same output. If
/// the text contains fewer sentences than the mode's target, all available
/// sentences are used. Empty or whitespace-only input returns an empty
/// string; this function never fails.
pub fn summarize(text: &str, mode: SummaryMode) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    match mode {
        SummaryMode::Brief => join_as_prose(take(&sentences, BRIEF_SENTENCES)),
        SummaryMode::Bullet => take(&sentences, BULLET_SENTENCES)
            .iter()
            .map(|s| format!("{}{}", BULLET_MARKER, s))
            .collect::<Vec<_>>()
            .join("\n"),
        SummaryMode::Detailed => {
            // Paragraphs of two sentences, trailer as a closing paragraph
            let mut paragraphs: Vec<String> = take(&sentences, DETAILED_SENTENCES)
                .chunks(PARAGRAPH_SENTENCES)
                .map(join_as_prose)
                .collect();
            paragraphs.push(DETAILED_TRAILER.to_string());
            paragraphs.join("\n\n")
        }
        SummaryMode::Action => {
            format!(
                "{} {}",
                join_as_prose(take(&sentences, FOCUSED_SENTENCES)),
                ACTION_TRAILER
            )
        }
        SummaryMode::Technical => {
            format!(
                "{} {}",
                join_as_prose(take(&sentences, FOCUSED_SENTENCES)),
                TECHNICAL_TRAILER
            )
        }
    }
}

/// Split text into trimmed, non-empty sentences.
///
/// Sentences are delimited by `.`, `!` or `?`; runs of terminators collapse
/// because the empty pieces between them are discarded. Original order is
/// preserved. Text without any terminator yields a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// First `n` sentences, or all of them if fewer exist
fn take<'a>(sentences: &'a [&'a str], n: usize) -> &'a [&'a str] {
    &sentences[..sentences.len().min(n)]
}

/// Join sentences with ". " and close with a period
fn join_as_prose(sentences: &[&str]) -> String {
    format!("{}.", sentences.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_terminators() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn runs_of_terminators_collapse() {
        let sentences = split_sentences("Wow!! Really?! Yes...");
        assert_eq!(sentences, vec!["Wow", "Really", "Yes"]);
    }

    #[test]
    fn no_terminator_yields_one_sentence() {
        assert_eq!(split_sentences("  hello world  "), vec!["hello world"]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(split_sentences("   \n\t  ").is_empty());
    }
}
