//! Excerpt rendering: first paragraph, phrase highlighting, wrapping

use colored::Colorize;

use crate::domain::search::Phrase;

/// Text before the first newline of a summary
pub fn first_paragraph(summary: &str) -> &str {
    summary
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r')
}

/// Style every whitespace-delimited word that contains `phrase`.
///
/// When at least one word matches, words are re-joined with single spaces.
/// Text without a match is returned untouched.
pub fn highlight_phrase<F>(text: &str, phrase: &Phrase, style: F) -> String
where
    F: Fn(&str) -> String,
{
    if !text.split_whitespace().any(|word| phrase.is_in(word)) {
        return text.to_string();
    }

    text.split_whitespace()
        .map(|word| {
            if phrase.is_in(word) {
                style(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bold magenta, as used for inexact matches on the terminal
pub fn magenta_bold(word: &str) -> String {
    word.magenta().bold().to_string()
}

/// Build the printable excerpt for an article summary.
///
/// Only inexact matches (`relevant == false`) get highlighting, since a
/// relevant article already carries the phrase in its title.
pub fn render_excerpt<F>(
    summary: &str,
    phrase: &Phrase,
    relevant: bool,
    width: usize,
    style: F,
) -> String
where
    F: Fn(&str) -> String,
{
    let paragraph = first_paragraph(summary);
    let paragraph = if relevant {
        paragraph.to_string()
    } else {
        highlight_phrase(paragraph, phrase, style)
    };

    textwrap::fill(&paragraph, width)
}
