//! CLI module for wiki-phrase
//!
//! Parses the command line, applies it on top of the loaded configuration and
//! hands over to the interactive lookup in [`lookup`].

pub mod lookup;

use clap::Parser;

use crate::config::AppConfig;

/// wiki-phrase - look up a phrase on Wikipedia and read the matching excerpt
#[derive(Debug, Parser)]
#[command(name = "wiki-phrase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Phrase to look up (asked for interactively when omitted)
    pub phrase: Vec<String>,

    /// Wikipedia language edition, e.g. `cs` or `en`
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Maximum number of articles requested per search
    #[arg(short = 'n', long)]
    pub results: Option<u32>,

    /// Column width excerpts are wrapped to
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// The phrase given on the command line, words joined by single spaces
    pub fn phrase(&self) -> Option<String> {
        if self.phrase.is_empty() {
            None
        } else {
            Some(self.phrase.join(" "))
        }
    }

    /// Override configuration values with the ones given as flags
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(lang) = &self.lang {
            config.wikipedia.language = lang.clone();
        }
        if let Some(results) = self.results {
            config.wikipedia.results = results;
        }
        if let Some(width) = self.width {
            config.display.wrap_width = width;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
