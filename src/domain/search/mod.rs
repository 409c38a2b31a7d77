//! Search domain - phrases, provider abstraction and relevance filtering

mod phrase;
mod provider;
mod result;

pub use phrase::Phrase;
pub use provider::SearchProvider;
pub use result::SearchResult;

#[cfg(test)]
pub use provider::MockSearchProvider;
