//! Summary modes - the core policy selector for both summarisation engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown summary mode: {0} (expected one of brief, detailed, bullet, action, technical)")]
pub struct ParseModeError(String);

/// A named summarisation style.
///
/// This is a closed set: the local engine dispatches its transform policy on
/// it and the remote engine interpolates the lowercase name into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Brief,
    Detailed,
    Bullet,
    Action,
    Technical,
}

impl SummaryMode {
    /// All modes, in menu order
    pub const ALL: [SummaryMode; 5] = [
        SummaryMode::Brief,
        SummaryMode::Detailed,
        SummaryMode::Bullet,
        SummaryMode::Action,
        SummaryMode::Technical,
    ];

    /// Human-readable label for menus and output headers
    pub fn label(&self) -> &'static str {
        match self {
            SummaryMode::Brief => "Brief",
            SummaryMode::Detailed => "Detailed",
            SummaryMode::Bullet => "Bullet Points",
            SummaryMode::Action => "Action Items",
            SummaryMode::Technical => "Technical",
        }
    }

    /// Short description of what the mode produces
    pub fn description(&self) -> &'static str {
        match self {
            SummaryMode::Brief => "Quick overview in 2-3 sentences",
            SummaryMode::Detailed => "Comprehensive analysis with context",
            SummaryMode::Bullet => "Key points in a list format",
            SummaryMode::Action => "Actionable tasks and next steps",
            SummaryMode::Technical => "Technical details and specifications",
        }
    }
}

impl fmt::Display for SummaryMode {
    /// The lowercase mode name, as used in prompts and serialised records
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SummaryMode::Brief => "brief",
            SummaryMode::Detailed => "detailed",
            SummaryMode::Bullet => "bullet",
            SummaryMode::Action => "action",
            SummaryMode::Technical => "technical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SummaryMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "quick" is the legacy name for brief summaries
            "brief" | "quick" => Ok(SummaryMode::Brief),
            "detailed" => Ok(SummaryMode::Detailed),
            "bullet" => Ok(SummaryMode::Bullet),
            "action" => Ok(SummaryMode::Action),
            "technical" => Ok(SummaryMode::Technical),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for mode in SummaryMode::ALL {
            let parsed: SummaryMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn quick_is_an_alias_for_brief() {
        assert_eq!("quick".parse::<SummaryMode>().unwrap(), SummaryMode::Brief);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "Bullet".parse::<SummaryMode>().unwrap(),
            SummaryMode::Bullet
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!("haiku".parse::<SummaryMode>().is_err());
    }

    #[test]
    fn serialises_to_lowercase_name() {
        let json = serde_json::to_string(&SummaryMode::Action).unwrap();
        assert_eq!(json, "\"action\"");
    }
}
