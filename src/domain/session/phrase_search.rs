//! Interactive phrase search loop

use std::io::Write;

use tracing::{debug, info, warn};

use super::cache::{SearchCache, SummaryCache};
use super::menu::MenuChoice;
use super::render::{magenta_bold, render_excerpt};
use crate::domain::prompt::Prompter;
use crate::domain::search::{Phrase, SearchProvider, SearchResult};
use crate::domain::DomainError;

/// Default column width for printed excerpts
pub const DEFAULT_WRAP_WIDTH: usize = 90;

pub const PHRASE_PROMPT: &str = "Enter a search phrase:";

/// Where the loop goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Search,
    Choose,
    Menu { articles_found: bool },
    End,
}

/// One interactive lookup session.
///
/// Owns both caches for its whole lifetime: a phrase is sent to the provider
/// at most once, and so is each article summary.
pub struct PhraseSearchSession<S, P, W> {
    provider: S,
    prompter: P,
    out: W,
    phrase: Phrase,
    searches: SearchCache,
    summaries: SummaryCache,
    found: Option<SearchResult>,
    wrap_width: usize,
    highlight: fn(&str) -> String,
    finished: bool,
}

impl<S, P, W> PhraseSearchSession<S, P, W>
where
    S: SearchProvider,
    P: Prompter,
    W: Write,
{
    pub fn new(provider: S, prompter: P, out: W, phrase: Phrase) -> Self {
        Self {
            provider,
            prompter,
            out,
            phrase,
            searches: SearchCache::new(),
            summaries: SummaryCache::new(),
            found: None,
            wrap_width: DEFAULT_WRAP_WIDTH,
            highlight: magenta_bold,
            finished: false,
        }
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Replace the terminal styling applied to highlighted words
    pub fn with_highlighter(mut self, highlight: fn(&str) -> String) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run the interactive loop for the current phrase until the user ends it.
    ///
    /// A cancelled prompt ends the session like choosing "End search" does.
    pub async fn search(&mut self) -> Result<(), DomainError> {
        let mut step = Step::Search;

        while !self.finished {
            let next = match step {
                Step::Search => self.search_step().await,
                Step::Choose => self.choose_step().await,
                Step::Menu { articles_found } => self.menu_step(articles_found),
                Step::End => {
                    self.finished = true;
                    continue;
                }
            };

            step = match next {
                Ok(next) => next,
                Err(DomainError::Cancelled) => {
                    debug!("Prompt cancelled, ending session");
                    Step::End
                }
                Err(e) => return Err(e),
            };
        }

        info!(
            searches = self.searches.len(),
            summaries = self.summaries.len(),
            "Search session ended"
        );
        Ok(())
    }

    /// Titles for `phrase`, filtered by relevance, served from cache when possible
    pub async fn lookup(&mut self, phrase: &Phrase) -> Result<SearchResult, DomainError> {
        if let Some(cached) = self.searches.get(phrase) {
            debug!(phrase = %phrase, "Search cache hit");
            return Ok(cached.clone());
        }

        debug!(phrase = %phrase, "Search cache miss, querying provider");
        let titles = self.provider.search(phrase.as_str()).await?;
        let result = SearchResult::from_titles(phrase, titles);
        debug!(
            phrase = %phrase,
            titles = result.titles.len(),
            relevant = result.relevant,
            "Search results filtered"
        );

        self.searches.insert(phrase.clone(), result.clone());
        Ok(result)
    }

    /// Full summary of `title`, fetched from the provider at most once
    pub async fn summary(&mut self, title: &str) -> Result<String, DomainError> {
        if let Some(cached) = self.summaries.get(title) {
            debug!(title, "Summary cache hit");
            return Ok(cached.to_string());
        }

        debug!(title, "Summary cache miss, querying provider");
        let summary = self.provider.summary(title).await?;
        self.summaries.insert(title, summary.clone());
        Ok(summary)
    }

    async fn search_step(&mut self) -> Result<Step, DomainError> {
        let phrase = self.phrase.clone();

        match self.lookup(&phrase).await {
            Ok(result) if result.is_empty() => {
                self.found = None;
                self.print(&format!("Sorry, the phrase '{}' was not found", phrase))?;
                Ok(Step::Menu {
                    articles_found: false,
                })
            }
            Ok(result) => {
                self.found = Some(result);
                Ok(Step::Choose)
            }
            Err(e) if e.is_recoverable() => {
                self.found = None;
                self.report_failure(&e)?;
                Ok(Step::Menu {
                    articles_found: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn choose_step(&mut self) -> Result<Step, DomainError> {
        let Some(found) = self.found.as_ref() else {
            return Ok(Step::Menu {
                articles_found: false,
            });
        };

        let relevant = found.relevant;
        let message = found.selection_message(&self.phrase);
        let title = self.prompter.select(&message, &found.titles)?;

        match self.summary(&title).await {
            Ok(summary) => {
                let excerpt = render_excerpt(
                    &summary,
                    &self.phrase,
                    relevant,
                    self.wrap_width,
                    self.highlight,
                );
                self.print(&excerpt)?;
            }
            Err(e) if e.is_recoverable() => self.report_failure(&e)?,
            Err(e) => return Err(e),
        }

        Ok(Step::Menu {
            articles_found: true,
        })
    }

    fn menu_step(&mut self, articles_found: bool) -> Result<Step, DomainError> {
        self.print("\n")?;

        let labels = MenuChoice::labels(articles_found);
        let picked = self.prompter.select(MenuChoice::MESSAGE, &labels)?;

        match MenuChoice::from_label(&picked) {
            Some(MenuChoice::NewSearch) => {
                self.phrase = self.ask_phrase()?;
                Ok(Step::Search)
            }
            Some(MenuChoice::BackToArticles) => Ok(Step::Choose),
            Some(MenuChoice::EndSearch) => Ok(Step::End),
            None => Err(DomainError::terminal(format!(
                "Unknown menu option '{}'",
                picked
            ))),
        }
    }

    fn ask_phrase(&mut self) -> Result<Phrase, DomainError> {
        loop {
            let input = self.prompter.text(PHRASE_PROMPT)?;

            match Phrase::new(input) {
                Ok(phrase) => return Ok(phrase),
                Err(e) => self.print(&e.to_string())?,
            }
        }
    }

    fn report_failure(&mut self, error: &DomainError) -> Result<(), DomainError> {
        warn!(phrase = %self.phrase, error = %error, "Lookup failed");
        self.print(&format!("Search failed: {}", error))
    }

    fn print(&mut self, text: &str) -> Result<(), DomainError> {
        writeln!(self.out, "{}", text)
            .map_err(|e| DomainError::terminal(format!("Failed to write output: {}", e)))
    }
}
