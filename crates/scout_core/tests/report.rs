use pretty_assertions::assert_eq;
use scout_core::{
    format_value, report, DataRecord, ErrorRecord, Extraction, FetchResult, Format, SuccessFlag,
    Timestamp,
};
use serde_json::{json, Map, Value};

fn init_logging() {
    scout_logging::initialize_for_tests();
}

fn render(result: &FetchResult) -> String {
    let mut out = Vec::new();
    report(result, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn record() -> DataRecord {
    DataRecord {
        company: "vercel".to_string(),
        timestamp: Timestamp::parse("20240101_120000").unwrap(),
        url: "https://www.vercel.com".to_string(),
        success: SuccessFlag::Succeeded,
        metadata: Some(map(json!({"title": "Vercel", "statusCode": 200}))),
        content: None,
        extraction: Some(Extraction::Data(map(json!({
            "company_mission": "Build the web",
            "supports_sso": true,
        })))),
    }
}

#[test]
fn data_summary_is_in_fixed_order() {
    init_logging();
    let text = render(&FetchResult::Data(record()));
    let expected = "\n\
Saved Data Summary:\n\
------------------------------\n\
Company: vercel\n\
URL: https://www.vercel.com\n\
Success: true\n\
\n\
Metadata available:\n\
title: Vercel\n\
statusCode: 200\n\
\n\
Extracted Data:\n\
company_mission: Build the web\n\
supports_sso: true\n";
    assert_eq!(text, expected);
}

#[test]
fn extraction_error_is_reported_last() {
    init_logging();
    let data = DataRecord {
        metadata: None,
        success: SuccessFlag::Unknown,
        extraction: Some(Extraction::Error("bad payload".to_string())),
        ..record()
    };
    let text = render(&FetchResult::Data(data));
    assert!(text.contains("Success: unknown\n"));
    assert!(!text.contains("Metadata available:"));
    assert!(!text.contains("Extracted Data:"));
    assert!(text.ends_with("\nExtraction Error: bad payload\n"));
}

#[test]
fn raw_content_reports_sizes() {
    init_logging();
    let mut content = std::collections::BTreeMap::new();
    content.insert(Format::Html, "<p>hé</p>".to_string());
    content.insert(Format::Markdown, "hé".to_string());
    let data = DataRecord {
        content: Some(content),
        extraction: None,
        ..record()
    };
    let text = render(&FetchResult::Data(data));
    assert!(text.contains("\nContent:\nmarkdown: 2 chars\nhtml: 9 chars\n"));
}

#[test]
fn error_summary_names_the_error() {
    init_logging();
    let result = FetchResult::Error(ErrorRecord {
        company: "vercel".to_string(),
        timestamp: Timestamp::parse("20240101_120000").unwrap(),
        url: "https://www.vercel.com".to_string(),
        error: "rate limit exceeded".to_string(),
    });
    assert_eq!(render(&result), "\nError during scraping: rate limit exceeded\n");
}

#[test]
fn values_print_bare_strings_and_compact_json() {
    assert_eq!(format_value(&json!("plain")), "plain");
    assert_eq!(format_value(&json!(false)), "false");
    assert_eq!(format_value(&json!(["a", 1])), r#"["a",1]"#);
    assert_eq!(format_value(&Value::Null), "null");
}
