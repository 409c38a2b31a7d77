//! Wikipedia search provider

mod http_client;
mod provider;

pub use http_client::{HttpClient, HttpClientTrait};
pub use provider::WikipediaProvider;
