//! Session-scoped memoization of searches and summaries

use std::collections::HashMap;

use crate::domain::search::{Phrase, SearchResult};

/// Search results keyed by phrase. Entries are never replaced.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: HashMap<Phrase, SearchResult>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, phrase: &Phrase) -> Option<&SearchResult> {
        self.entries.get(phrase)
    }

    pub fn insert(&mut self, phrase: Phrase, result: SearchResult) {
        self.entries.entry(phrase).or_insert(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Article summaries keyed by title. Entries are never replaced.
#[derive(Debug, Default)]
pub struct SummaryCache {
    entries: HashMap<String, String>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries.get(title).map(String::as_str)
    }

    pub fn insert(&mut self, title: impl Into<String>, summary: impl Into<String>) {
        self.entries.entry(title.into()).or_insert_with(|| summary.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
