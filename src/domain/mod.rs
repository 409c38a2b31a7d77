//! Domain layer - Core lookup logic and collaborator traits

pub mod error;
pub mod prompt;
pub mod search;
pub mod session;

pub use error::DomainError;
pub use prompt::Prompter;
pub use search::{Phrase, SearchProvider, SearchResult};
pub use session::{MenuChoice, PhraseSearchSession};
