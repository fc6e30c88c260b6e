use crate::common::{client_for, fixture, mock_news, mock_quote, mock_wiki, setup_server};
use coreinsights::{Report, ReportBuilder};

async fn apple_report() -> Report {
    let server = setup_server();
    let _quote = mock_quote(&server, "AAPL", 200, &fixture("quote", "AAPL", "json"));
    let _news = mock_news(&server, "Apple", 200, &fixture("news", "Apple", "json"));
    let _wiki = mock_wiki(&server, "Apple_Inc.", 200, &fixture("wiki_summary", "Apple", "json"));

    ReportBuilder::new(&client_for(&server))
        .ticker("AAPL")
        .company_name("Apple")
        .page_name("Apple_Inc.")
        .fetch()
        .await
        .unwrap()
}

#[tokio::test]
async fn serialization_is_byte_identical_across_calls() {
    let report = apple_report().await;
    let a = report.to_json().unwrap();
    let b = report.clone().to_json().unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn exported_json_has_sections_in_order() {
    let report = apple_report().await;
    let json = report.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    // the parsed map may reorder keys, so order is checked on the text
    assert_eq!(keys.len(), 5);
    let idx = |k: &str| json.find(&format!("\"{k}\":")).unwrap();
    assert!(idx("company") < idx("stock"));
    assert!(idx("stock") < idx("news"));
    assert!(idx("news") < idx("wikipedia"));
    assert!(idx("wikipedia") < idx("generated_at"));

    assert_eq!(value["company"]["ticker"], "AAPL");
    assert_eq!(value["stock"]["price"], 213.49001);
    assert_eq!(value["stock"]["range"], "209.58000 - 213.95000");
    assert_eq!(value["news"].as_array().unwrap().len(), 4);
    assert_eq!(value["wikipedia"]["url"], "https://en.wikipedia.org/wiki/Apple_Inc.");
    assert_eq!(
        value["generated_at"].as_str().unwrap(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    );
}

#[tokio::test]
async fn write_to_dir_uses_export_file_name() {
    let report = apple_report().await;
    let dir = tempfile::tempdir().unwrap();

    let path = report.write_to_dir(dir.path()).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert_eq!(name, report.export_file_name());
    assert!(name.starts_with("AAPL_report_"));
    assert!(name.ends_with(".json"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report.to_json().unwrap());
}
