//! wiki-phrase
//!
//! Interactive Wikipedia lookup for a phrase:
//! - Search results filtered by whether titles contain the phrase
//! - Article list selection and first-paragraph excerpts
//! - Highlighting of the phrase when no title matches it exactly
//! - Per-session caching of searches and summaries

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, Phrase, PhraseSearchSession, Prompter, SearchProvider, SearchResult};
