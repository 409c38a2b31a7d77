use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::{HttpClient, HttpClientTrait};
use crate::config::WikipediaConfig;
use crate::domain::{DomainError, SearchProvider};

const PROVIDER_NAME: &str = "wikipedia";

/// Wikipedia search and summary lookup over the MediaWiki Action API
#[derive(Debug)]
pub struct WikipediaProvider<C: HttpClientTrait> {
    client: C,
    api_url: String,
    results: String,
}

impl WikipediaProvider<HttpClient> {
    /// Build a provider backed by a real HTTP client
    pub fn from_config(config: &WikipediaConfig) -> Result<Self, DomainError> {
        let client = HttpClient::new(&config.user_agent, config.timeout())?;
        Ok(Self::new(client, config.api_url(), config.results))
    }
}

impl<C: HttpClientTrait> WikipediaProvider<C> {
    pub fn new(client: C, api_url: impl Into<String>, results: u32) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            results: results.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn query<T>(&self, params: &[(&str, &str)]) -> Result<T, DomainError>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let mut query = vec![("action", "query"), ("format", "json"), ("formatversion", "2")];
        query.extend_from_slice(params);

        let json = self.client.get_json(&self.api_url, &query).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(PROVIDER_NAME, format!("Failed to parse response: {}", e))
        })?;

        if let Some(error) = envelope.error {
            return Err(DomainError::provider(
                PROVIDER_NAME,
                format!("{}: {}", error.code, error.info),
            ));
        }

        Ok(envelope.query.unwrap_or_default())
    }
}

#[async_trait]
impl<C: HttpClientTrait> SearchProvider for WikipediaProvider<C> {
    async fn search(&self, phrase: &str) -> Result<Vec<String>, DomainError> {
        debug!(phrase, api_url = %self.api_url, "Searching Wikipedia");

        let result: SearchQuery = self
            .query(&[
                ("list", "search"),
                ("srsearch", phrase),
                ("srlimit", self.results.as_str()),
                ("srprop", ""),
            ])
            .await?;

        Ok(result.search.into_iter().map(|hit| hit.title).collect())
    }

    async fn summary(&self, title: &str) -> Result<String, DomainError> {
        debug!(title, api_url = %self.api_url, "Fetching Wikipedia summary");

        let result: PagesQuery = self
            .query(&[
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;

        let page = result
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(format!("Article '{}' does not exist", title)))?;

        if page.missing || page.invalid {
            return Err(DomainError::not_found(format!(
                "Article '{}' does not exist",
                page.title.unwrap_or_else(|| title.to_string())
            )));
        }

        Ok(page.extract.unwrap_or_default())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

// MediaWiki API types (formatversion=2)

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    query: Option<T>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::http_client::mock::MockHttpClient;
    use super::*;

    const API_URL: &str = "https://cs.wikipedia.org/w/api.php";

    fn mock_provider(client: MockHttpClient) -> WikipediaProvider<MockHttpClient> {
        WikipediaProvider::new(client, API_URL, 10)
    }

    #[tokio::test]
    async fn test_search_returns_titles_in_order() {
        let client = MockHttpClient::new().with_response(
            "srsearch",
            "praha",
            json!({
                "batchcomplete": true,
                "query": {
                    "searchinfo": { "totalhits": 2 },
                    "search": [
                        { "ns": 0, "title": "Praha", "pageid": 1 },
                        { "ns": 0, "title": "Pražský hrad", "pageid": 2 }
                    ]
                }
            }),
        );

        let titles = mock_provider(client).search("praha").await.unwrap();
        assert_eq!(titles, vec!["Praha".to_string(), "Pražský hrad".to_string()]);
    }

    #[tokio::test]
    async fn test_search_without_query_block_is_empty() {
        let client =
            MockHttpClient::new().with_response("srsearch", "xyzzy", json!({ "batchcomplete": true }));

        let titles = mock_provider(client).search("xyzzy").await.unwrap();
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_api_error_becomes_provider_error() {
        let client = MockHttpClient::new().with_response(
            "srsearch",
            "bad",
            json!({ "error": { "code": "maxlag", "info": "Waiting for a database server" } }),
        );

        let error = mock_provider(client).search("bad").await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "Provider error: wikipedia - maxlag: Waiting for a database server"
        );
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = MockHttpClient::new().with_error("srsearch", "praha", "connection refused");

        let error = mock_provider(client).search("praha").await.unwrap_err();
        assert!(matches!(error, DomainError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_summary_returns_extract() {
        let client = MockHttpClient::new().with_response(
            "titles",
            "Praha",
            json!({
                "query": {
                    "pages": [
                        { "pageid": 1, "ns": 0, "title": "Praha", "extract": "Praha je hlavní město.\nDruhý odstavec." }
                    ]
                }
            }),
        );

        let summary = mock_provider(client).summary("Praha").await.unwrap();
        assert_eq!(summary, "Praha je hlavní město.\nDruhý odstavec.");
    }

    #[tokio::test]
    async fn test_summary_of_missing_page_is_not_found() {
        let client = MockHttpClient::new().with_response(
            "titles",
            "Nonexistent",
            json!({ "query": { "pages": [ { "ns": 0, "title": "Nonexistent", "missing": true } ] } }),
        );

        let error = mock_provider(client).summary("Nonexistent").await.unwrap_err();
        assert!(matches!(error, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_http_client_against_server() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("action", "query"))
            .and(query_param("list", "search"))
            .and(query_param("srsearch", "kočka"))
            .and(query_param("srlimit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "search": [ { "title": "Kočka domácí" } ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new("wiki-phrase-test/0.1", Duration::from_secs(5)).unwrap();
        let provider =
            WikipediaProvider::new(client, format!("{}/w/api.php", server.uri()), 5);

        let titles = provider.search("kočka").await.unwrap();
        assert_eq!(titles, vec!["Kočka domácí".to_string()]);
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = HttpClient::new("wiki-phrase-test/0.1", Duration::from_secs(5)).unwrap();
        let provider =
            WikipediaProvider::new(client, format!("{}/w/api.php", server.uri()), 10);

        let error = provider.summary("Praha").await.unwrap_err();
        assert!(error.to_string().contains("HTTP 503"));
    }
}
