//! Interactive lookup command

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;

use super::Cli;
use crate::config::AppConfig;
use crate::domain::session::PHRASE_PROMPT;
use crate::domain::{DomainError, Phrase, PhraseSearchSession, Prompter, SearchProvider};
use crate::infrastructure::logging;
use crate::infrastructure::terminal::InquirePrompter;
use crate::infrastructure::wikipedia::WikipediaProvider;

/// Run a search session until the user ends it
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    cli.apply_to(&mut config);
    config.validate()?;
    init_logging(&config);

    let provider = WikipediaProvider::from_config(&config.wikipedia)?;
    info!(
        provider = provider.provider_name(),
        api_url = provider.api_url(),
        "Starting search session"
    );

    let mut prompter = InquirePrompter::new().with_page_size(config.display.page_size);

    let mut out = io::stdout();

    let phrase = match initial_phrase(&cli, &mut prompter, &mut out) {
        Ok(phrase) => phrase,
        Err(DomainError::Cancelled) => return Ok(()),
        Err(e) => return Err(e).context("Failed to read the search phrase"),
    };

    let mut session = PhraseSearchSession::new(provider, prompter, out, phrase)
        .with_wrap_width(config.display.wrap_width);

    session.search().await.context("Search session failed")?;

    Ok(())
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

/// Phrase from the command line, or asked for until a non-blank one is given.
///
/// Rejected input is reported on `out`, the same stream the session prints to.
fn initial_phrase<P, W>(cli: &Cli, prompter: &mut P, out: &mut W) -> Result<Phrase, DomainError>
where
    P: Prompter,
    W: Write,
{
    if let Some(raw) = cli.phrase() {
        match Phrase::new(raw) {
            Ok(phrase) => return Ok(phrase),
            Err(e) => report_rejected(out, &e)?,
        }
    }

    loop {
        match Phrase::new(prompter.text(PHRASE_PROMPT)?) {
            Ok(phrase) => return Ok(phrase),
            Err(e) => report_rejected(out, &e)?,
        }
    }
}

fn report_rejected<W: Write>(out: &mut W, error: &DomainError) -> Result<(), DomainError> {
    writeln!(out, "{}", error)
        .map_err(|e| DomainError::terminal(format!("Failed to write output: {}", e)))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::domain::prompt::mock::ScriptedPrompter;

    #[test]
    fn test_phrase_from_command_line_skips_prompt() {
        let cli = Cli::try_parse_from(["wiki-phrase", "Prague", "CASTLE"]).unwrap();
        let mut prompter = ScriptedPrompter::new();

        let mut out: Vec<u8> = Vec::new();

        let phrase = initial_phrase(&cli, &mut prompter, &mut out).unwrap();

        assert_eq!(phrase.as_str(), "prague castle");
        assert!(prompter.shown.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_phrase_is_asked_for() {
        let cli = Cli::try_parse_from(["wiki-phrase"]).unwrap();
        let mut prompter = ScriptedPrompter::new().then_text("").then_text("Brno");

        let mut out: Vec<u8> = Vec::new();

        let phrase = initial_phrase(&cli, &mut prompter, &mut out).unwrap();

        assert_eq!(phrase.as_str(), "brno");
        assert_eq!(prompter.shown.len(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Validation error: Search phrase cannot be empty\n"
        );
    }

    #[test]
    fn test_blank_command_line_phrase_is_asked_again() {
        let cli = Cli::try_parse_from(["wiki-phrase", "   "]).unwrap();
        let mut prompter = ScriptedPrompter::new().then_text("brno");
        let mut out: Vec<u8> = Vec::new();

        let phrase = initial_phrase(&cli, &mut prompter, &mut out).unwrap();

        assert_eq!(phrase.as_str(), "brno");
        assert_eq!(prompter.shown.len(), 1);
        assert_eq!(prompter.shown[0].message, PHRASE_PROMPT);
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Search phrase cannot be empty"));
    }

    #[test]
    fn test_cancelled_initial_prompt() {
        let cli = Cli::try_parse_from(["wiki-phrase"]).unwrap();
        let mut prompter = ScriptedPrompter::new().then_cancel();

        assert!(matches!(
            initial_phrase(&cli, &mut prompter, &mut Vec::<u8>::new()),
            Err(DomainError::Cancelled)
        ));
    }
}
