#![allow(dead_code)]

use coreinsights::InsightsClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const QUOTE_KEY: &str = "quote-test-key";
pub const NEWS_KEY: &str = "news-test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Client with all three providers pointed at `server`.
pub fn client_for(server: &MockServer) -> InsightsClient {
    InsightsClient::builder()
        .base_quote(Url::parse(&format!("{}/quote", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .base_wiki(Url::parse(&format!("{}/page/summary/", server.base_url())).unwrap())
        .quote_api_key(QUOTE_KEY)
        .news_api_key(NEWS_KEY)
        .build()
        .unwrap()
}

pub fn mock_quote<'a>(server: &'a MockServer, symbol: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/quote")
            .query_param("symbol", symbol)
            .header("authorization", format!("apikey {QUOTE_KEY}"));
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_news<'a>(server: &'a MockServer, query: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", query)
            .query_param("sortBy", "publishedAt")
            .query_param("language", "en")
            .query_param("apiKey", NEWS_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_wiki<'a>(server: &'a MockServer, page: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/page/summary/{page}"));
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn wiki_missing<'a>(server: &'a MockServer, page: &str) -> Mock<'a> {
    mock_wiki(server, page, 404, &fixture("wiki", "not_found", "json"))
}
