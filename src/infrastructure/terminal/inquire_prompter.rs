use inquire::error::InquireError;
use inquire::{Select, Text};

use crate::domain::{DomainError, Prompter};

/// Terminal prompts backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompter {
    page_size: Option<usize>,
}

impl InquirePrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of list entries visible at once
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Prompter for InquirePrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String, DomainError> {
        let mut select = Select::new(message, choices.to_vec());
        if let Some(page_size) = self.page_size {
            select = select.with_page_size(page_size);
        }

        select.prompt().map_err(map_inquire_error)
    }

    fn text(&mut self, message: &str) -> Result<String, DomainError> {
        Text::new(message).prompt().map_err(map_inquire_error)
    }
}

fn map_inquire_error(error: InquireError) -> DomainError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            DomainError::Cancelled
        }
        other => DomainError::terminal(format!("Prompt failed: {}", other)),
    }
}
