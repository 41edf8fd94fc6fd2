use std::time::Duration;

use pretty_assertions::assert_eq;
use scout_core::{CompanyProfile, Format};
use scout_engine::{
    ClientSettings, Config, ExtractionClient, FailureKind, FirecrawlClient, ScrapeRequest,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config::from_lookup(|name| match name {
        "API_KEY" => Some("fc-test".to_string()),
        "FIRECRAWL_API_URL" => Some(server.uri()),
        _ => None,
    })
    .unwrap()
}

fn client_for(server: &MockServer) -> FirecrawlClient {
    FirecrawlClient::new(&config_for(server), ClientSettings::default()).unwrap()
}

#[tokio::test]
async fn extraction_request_is_authorized_and_decoded() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(header("Authorization", "Bearer fc-test"))
        .and(body_partial_json(json!({
            "url": "https://www.vercel.com",
            "formats": ["json"],
            "jsonOptions": {"mode": "llm-extraction", "pageOptions": {"onlyMainContent": true}},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "metadata": {"title": "Vercel", "statusCode": 200},
                "json": {
                    "company_mission": "Build the web",
                    "supports_sso": true,
                    "is_open_source": false,
                    "is_in_yc": true,
                },
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .fetch("https://www.vercel.com", &ScrapeRequest::extract::<CompanyProfile>())
        .await
        .expect("fetch ok");

    assert_eq!(response.success, Some(true));
    assert_eq!(
        response.extract,
        Some(json!({
            "company_mission": "Build the web",
            "supports_sso": true,
            "is_open_source": false,
            "is_in_yc": true,
        }))
    );
    let metadata = response.metadata.expect("metadata");
    assert_eq!(metadata.get("title"), Some(&json!("Vercel")));
}

#[tokio::test]
async fn content_request_returns_each_format() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(body_partial_json(json!({"formats": ["markdown", "html"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"markdown": "# Firecrawl", "html": "<h1>Firecrawl</h1>"},
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .fetch(
            "https://firecrawl.dev",
            &ScrapeRequest::content(&[Format::Markdown, Format::Html]),
        )
        .await
        .expect("fetch ok");

    assert_eq!(response.content.get(&Format::Markdown).map(String::as_str), Some("# Firecrawl"));
    assert_eq!(
        response.content.get(&Format::Html).map(String::as_str),
        Some("<h1>Firecrawl</h1>")
    );
    assert_eq!(response.extract, None);
}

#[tokio::test]
async fn http_error_carries_api_message() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"success": false, "error": "rate limit exceeded"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("https://www.vercel.com", &ScrapeRequest::extract::<CompanyProfile>())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(429));
    assert_eq!(err.to_string(), "rate limit exceeded");
}

#[tokio::test]
async fn http_error_without_body_uses_status() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("https://www.vercel.com", &ScrapeRequest::content(&[Format::Markdown]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert!(err.message.contains("502"));
}

#[tokio::test]
async fn reported_failure_in_ok_response_is_an_api_error() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "page blocked"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("https://www.vercel.com", &ScrapeRequest::content(&[Format::Markdown]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Api);
    assert_eq!(err.message, "page blocked");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("https://www.vercel.com", &ScrapeRequest::content(&[Format::Html]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn invalid_target_url_never_reaches_the_service() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("not a url", &ScrapeRequest::content(&[Format::Markdown]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn slow_service_times_out() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"success": true})),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = FirecrawlClient::new(&config_for(&server), settings).unwrap();
    let err = client
        .fetch("https://www.vercel.com", &ScrapeRequest::content(&[Format::Markdown]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    scout_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"success\": true}"))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_bytes: 8,
        ..ClientSettings::default()
    };
    let client = FirecrawlClient::new(&config_for(&server), settings).unwrap();
    let err = client
        .fetch("https://www.vercel.com", &ScrapeRequest::content(&[Format::Markdown]))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 8, .. }));
}
