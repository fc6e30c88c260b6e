use crate::common::{client_for, mock_news, mock_wiki, setup_server};
use coreinsights::{InsightsError, ReportRequest, Session};

const EMPTY_NEWS: &str = r#"{"status":"ok","totalResults":0,"articles":[]}"#;
const GLOBEX_WIKI: &str = r#"{"title":"Globex","extract":"Globex is a company.",
    "content_urls":{"desktop":{"page":"https://en.wikipedia.org/wiki/Globex"}}}"#;

fn request(company: &str) -> ReportRequest {
    ReportRequest {
        company_name: Some(company.to_string()),
        ..ReportRequest::default()
    }
}

#[tokio::test]
async fn session_remembers_last_report_until_reset() {
    let server = setup_server();
    let _news = mock_news(&server, "Globex", 200, EMPTY_NEWS);
    let _wiki = mock_wiki(&server, "Globex", 200, GLOBEX_WIKI);
    let client = client_for(&server);

    let mut session = Session::new();
    assert!(!session.has_report());

    let report = session.generate(&client, request("Globex")).await.unwrap();
    assert_eq!(report.company.name, "Globex");
    assert!(report.news.is_empty());
    assert!(session.has_report());

    session.reset();
    assert!(!session.has_report());
    assert!(session.last_report().is_none());
}

#[tokio::test]
async fn validation_error_keeps_previous_report() {
    let server = setup_server();
    let _news = mock_news(&server, "Globex", 200, EMPTY_NEWS);
    let _wiki = mock_wiki(&server, "Globex", 200, GLOBEX_WIKI);
    let client = client_for(&server);

    let mut session = Session::new();
    session.generate(&client, request("Globex")).await.unwrap();

    let err = session
        .generate(&client, ReportRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, InsightsError::MissingSearchInput));
    assert_eq!(
        session.last_report().map(|r| r.company.name.as_str()),
        Some("Globex")
    );
}
