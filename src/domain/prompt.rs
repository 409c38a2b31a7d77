//! Interactive prompt abstraction

use crate::domain::DomainError;

/// Blocking terminal prompts used by the search session.
///
/// Implementations return [`DomainError::Cancelled`] when the user backs out
/// of a prompt (Esc / Ctrl-C).
pub trait Prompter {
    /// Present `choices` under `message` and return the selected one
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String, DomainError>;

    /// Ask for a line of free text
    fn text(&mut self, message: &str) -> Result<String, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;

    use super::*;

    /// A canned answer for the next prompt
    #[derive(Debug, Clone)]
    pub enum ScriptedAnswer {
        Select(String),
        Text(String),
        Cancel,
    }

    /// A prompt the session showed
    #[derive(Debug, Clone, PartialEq)]
    pub struct ShownPrompt {
        pub message: String,
        pub choices: Option<Vec<String>>,
    }

    /// Prompter that replays a fixed script and records what it was shown
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<ScriptedAnswer>,
        pub shown: Vec<ShownPrompt>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn then_select(mut self, choice: impl Into<String>) -> Self {
            self.answers.push_back(ScriptedAnswer::Select(choice.into()));
            self
        }

        pub fn then_text(mut self, input: impl Into<String>) -> Self {
            self.answers.push_back(ScriptedAnswer::Text(input.into()));
            self
        }

        pub fn then_cancel(mut self) -> Self {
            self.answers.push_back(ScriptedAnswer::Cancel);
            self
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next_answer(&mut self) -> Result<ScriptedAnswer, DomainError> {
            self.answers
                .pop_front()
                .ok_or_else(|| DomainError::terminal("No scripted answer left"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, message: &str, choices: &[String]) -> Result<String, DomainError> {
            self.shown.push(ShownPrompt {
                message: message.to_string(),
                choices: Some(choices.to_vec()),
            });

            match self.next_answer()? {
                ScriptedAnswer::Select(choice) if choices.contains(&choice) => Ok(choice),
                ScriptedAnswer::Select(choice) => Err(DomainError::terminal(format!(
                    "'{}' is not one of {:?}",
                    choice, choices
                ))),
                ScriptedAnswer::Text(_) => {
                    Err(DomainError::terminal("Expected a selection, script has text"))
                }
                ScriptedAnswer::Cancel => Err(DomainError::Cancelled),
            }
        }

        fn text(&mut self, message: &str) -> Result<String, DomainError> {
            self.shown.push(ShownPrompt {
                message: message.to_string(),
                choices: None,
            });

            match self.next_answer()? {
                ScriptedAnswer::Text(input) => Ok(input),
                ScriptedAnswer::Select(_) => {
                    Err(DomainError::terminal("Expected text, script has a selection"))
                }
                ScriptedAnswer::Cancel => Err(DomainError::Cancelled),
            }
        }
    }
}
