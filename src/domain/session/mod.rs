//! Search session - the interactive lookup loop and its caches

mod cache;
mod menu;
mod phrase_search;
pub mod render;

pub use cache::{SearchCache, SummaryCache};
pub use menu::MenuChoice;
pub use phrase_search::{PhraseSearchSession, DEFAULT_WRAP_WIDTH, PHRASE_PROMPT};
