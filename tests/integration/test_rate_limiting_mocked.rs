//! Integration tests verifying that every outbound request waits for the
//! rate limiter, including chunked sub-requests and paged continuations.

use std::time::{Duration, Instant};

use entrez_client::{ClientConfig, EntrezClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_RESPONSE: &str = r#"<?xml version="1.0" ?>
<eSearchResult>
    <Count>1</Count>
    <IdList>
        <Id>25554862</Id>
    </IdList>
</eSearchResult>"#;

const EMPTY_CATALOG_RESPONSE: &str = r#"<?xml version="1.0" ?>
<NLMCatalogRecordSet>
</NLMCatalogRecordSet>"#;

fn create_mock_client(mock_server: &MockServer, interval: Duration) -> EntrezClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_interval(interval);
    EntrezClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_consecutive_searches_are_throttled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_RESPONSE))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server, Duration::from_millis(100));

    let start = Instant::now();
    for _ in 0..3 {
        client
            .search("wishart", &client.options())
            .await
            .expect("Search should succeed");
    }

    // Two full intervals separate the three requests.
    assert!(start.elapsed() >= Duration::from_millis(180));
}

#[tokio::test]
#[traced_test]
async fn test_first_request_is_not_delayed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_RESPONSE))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server, Duration::from_secs(5));

    let start = Instant::now();
    client
        .search("wishart", &client.options())
        .await
        .expect("Search should succeed");

    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
#[traced_test]
async fn test_chunked_sub_requests_each_wait() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_CATALOG_RESPONSE))
        .expect(2)
        .mount(&mock_server)
        .await;

    // 600 ids => 2 chunks => at least one full interval between requests.
    let ids: Vec<String> = (1..=600).map(|n| n.to_string()).collect();

    let client = create_mock_client(&mock_server, Duration::from_millis(100));

    let start = Instant::now();
    client
        .fetch_journals(&ids)
        .await
        .expect("Chunked fetch should succeed");

    assert!(start.elapsed() >= Duration::from_millis(90));
}
