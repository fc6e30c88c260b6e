use crate::common::{client_for, fixture, mock_news, mock_quote, mock_wiki, setup_server};
use coreinsights::{InsightsError, ReportBuilder, report::UNKNOWN_COMPANY};
use httpmock::Method::GET;

const ACME_NEWS: &str = r#"{"status":"ok","totalResults":2,"articles":[
    {"source":{"id":null,"name":"Trade Weekly"},"title":"Acme ships anvils",
     "description":"Big week.",
     "url":"https://example.com/acme/1","publishedAt":"2025-03-12T08:00:00Z"},
    {"source":{"id":null,"name":"Desert Post"},"title":"Acme under review","description":null,
     "url":"https://example.com/acme/2","publishedAt":"2025-03-10T08:00:00Z"}
]}"#;

const ACME_WIKI: &str = r#"{"title":"Acme Corporation","description":"Fictional company",
    "extract":"The Acme Corporation is a fictional corporation.",
    "content_urls":{"desktop":{"page":"https://en.wikipedia.org/wiki/Acme_Corporation"}}}"#;

#[tokio::test]
async fn ticker_only_adopts_quote_name_for_news_and_wiki() {
    let server = setup_server();
    let quote = mock_quote(&server, "AAPL", 200, &fixture("quote", "AAPL", "json"));
    let news = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "Apple Inc.")
            .query_param("pageSize", "5");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news", "Apple", "json"));
    });
    // "Apple Inc." and its suffixed forms contain a space and miss; the underscore form hits
    let wiki = mock_wiki(&server, "Apple_Inc.", 200, &fixture("wiki_summary", "Apple", "json"));

    let client = client_for(&server);
    let report = ReportBuilder::new(&client)
        .ticker("aapl")
        .company_name("")
        .page_name("")
        .fetch()
        .await
        .unwrap();

    quote.assert();
    news.assert();
    wiki.assert();

    assert_eq!(report.company.name, "Apple Inc.");
    assert_eq!(report.company.ticker, "AAPL");
    assert_eq!(report.company.exchange, "NASDAQ");
    assert_eq!(report.stock.as_ref().map(|q| q.symbol.as_str()), Some("AAPL"));
    assert_eq!(report.news.len(), 4);
    assert_eq!(
        report.wikipedia.as_ref().map(|w| w.title.as_str()),
        Some("Apple Inc.")
    );
}

#[tokio::test]
async fn company_only_skips_quote() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/quote");
        then.status(200).body("{}");
    });
    let news = mock_news(&server, "Acme", 200, ACME_NEWS);
    let wiki = mock_wiki(&server, "Acme", 200, ACME_WIKI);

    let client = client_for(&server);
    let report = ReportBuilder::new(&client)
        .company_name("Acme")
        .fetch()
        .await
        .unwrap();

    assert_eq!(quote.calls(), 0);
    news.assert();
    wiki.assert();

    assert!(report.stock.is_none());
    assert_eq!(report.company.name, "Acme");
    assert_eq!(report.company.ticker, "N/A");
    assert_eq!(report.company.exchange, "N/A");
    assert_eq!(report.news.len(), 2);
    assert_eq!(report.news[1].description, "No description");
    assert!(report.has_data());
}

#[tokio::test]
async fn blank_inputs_are_rejected_without_network() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let err = ReportBuilder::new(&client)
        .ticker("")
        .company_name(" ")
        .page_name("")
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, InsightsError::MissingSearchInput));
    assert_eq!(any.calls(), 0);
}

#[tokio::test]
async fn page_name_only_fetches_just_the_summary() {
    let server = setup_server();
    let news = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(ACME_NEWS);
    });
    let wiki = mock_wiki(&server, "Acme_Corporation", 200, ACME_WIKI);

    let client = client_for(&server);
    let report = ReportBuilder::new(&client)
        .page_name("Acme_Corporation")
        .fetch()
        .await
        .unwrap();

    wiki.assert();
    assert_eq!(news.calls(), 0);
    assert_eq!(report.company.name, UNKNOWN_COMPANY);
    assert_eq!(
        report.wikipedia.map(|w| w.url),
        Some("https://en.wikipedia.org/wiki/Acme_Corporation".to_string())
    );
}

#[tokio::test]
async fn explicit_company_name_wins_over_quote_for_news() {
    let server = setup_server();
    let quote = mock_quote(&server, "AAPL", 200, &fixture("quote", "AAPL", "json"));
    let news = mock_news(&server, "Apple", 200, &fixture("news", "Apple", "json"));
    let wiki = mock_wiki(&server, "Apple_Inc.", 200, &fixture("wiki_summary", "Apple", "json"));

    let client = client_for(&server);
    let report = ReportBuilder::new(&client)
        .ticker("AAPL")
        .company_name("Apple")
        .page_name("Apple_Inc.")
        .news_count(3)
        .fetch()
        .await
        .unwrap();

    quote.assert();
    news.assert();
    wiki.assert();
    // identity still shows the quoted display name
    assert_eq!(report.company.name, "Apple Inc.");
    assert_eq!(report.news.len(), 3);
}

#[tokio::test]
async fn every_provider_failing_still_builds_a_report() {
    let server = setup_server();
    let quote = mock_quote(&server, "ZZZZ", 500, "");
    let news = mock_news(
        &server,
        "Nobody Corp",
        429,
        r#"{"status":"error","code":"rateLimited","message":"slow down"}"#,
    );
    // spaced variants get the mock server's default 404; the underscore form fails with 502
    let wiki = mock_wiki(&server, "Nobody_Corp", 502, "");

    let client = client_for(&server);
    let report = ReportBuilder::new(&client)
        .ticker("zzzz")
        .company_name("Nobody Corp")
        .fetch()
        .await
        .unwrap();

    quote.assert();
    news.assert();
    wiki.assert();

    assert!(!report.has_data());
    assert_eq!(report.company.name, "Nobody Corp");
    assert_eq!(report.company.ticker, "ZZZZ");
    assert_eq!(report.company.exchange, "N/A");
    assert!(report.to_json().is_ok());
}
