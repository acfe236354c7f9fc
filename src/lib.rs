//! # Condensa
//!
//! A library and CLI for chat and conversation summarisation.
//!
//! ## Features
//!
//! - **Local engine**: deterministic sentence-based digests, no network access
//! - **Remote engine**: Gemini-backed summaries with mode-aware prompts and
//!   typed error reporting
//! - **Session history**: in-memory records with search and aggregate stats

pub mod agent;
pub mod config;
pub mod gemini;
pub mod history;
pub mod local;
pub mod mode;
pub mod stats;
pub mod ui;

pub use config::Config;
pub use history::{History, SummaryRecord};
pub use mode::SummaryMode;
