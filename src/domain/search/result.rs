//! Filtered search results and the relevance split

use super::Phrase;

/// Article titles found for a phrase, paired with their relevance.
///
/// `relevant` is true when at least one returned title contains the phrase.
/// In that case `titles` holds only those titles; otherwise it holds the
/// full, unfiltered list returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub titles: Vec<String>,
    pub relevant: bool,
}

impl SearchResult {
    /// Split raw provider titles into the relevant subset, if there is one.
    pub fn from_titles(phrase: &Phrase, titles: Vec<String>) -> Self {
        let (matching, other): (Vec<String>, Vec<String>) =
            titles.into_iter().partition(|title| phrase.is_in(title));

        if matching.is_empty() {
            Self {
                titles: other,
                relevant: false,
            }
        } else {
            Self {
                titles: matching,
                relevant: true,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Message shown above the article list
    pub fn selection_message(&self, phrase: &Phrase) -> String {
        if self.relevant {
            "Found articles - choose an article".to_string()
        } else {
            format!(
                "No article titled '{}' was found, but the phrase appears in these articles - choose an article",
                phrase
            )
        }
    }
}
