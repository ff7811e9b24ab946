//! Integration tests for full-text link lookup using mocked HTTP responses.

use std::time::Duration;

use entrez_client::{ClientConfig, EntrezClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRLINKS_RESPONSE: &str = r#"<?xml version="1.0" ?>
<eLinkResult>
<LinkSet>
    <DbFrom>pubmed</DbFrom>
    <IdUrlList>
        <IdUrlSet>
            <Id>25554862</Id>
            <ObjUrl>
                <Url>https://journals.aps.org/prl/abstract/10.1103/PhysRevLett.113.250201</Url>
                <Category>Full-Text Sources</Category>
                <Provider>
                    <Name>American Physical Society</Name>
                    <Id>3243</Id>
                </Provider>
            </ObjUrl>
            <ObjUrl>
                <Url>https://arxiv.org/abs/1410.4719</Url>
                <Category>Free Resources</Category>
                <Provider>
                    <Name>arXiv</Name>
                    <Id>6045</Id>
                </Provider>
            </ObjUrl>
        </IdUrlSet>
    </IdUrlList>
</LinkSet>
</eLinkResult>"#;

fn create_mock_client(mock_server: &MockServer) -> EntrezClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_interval(Duration::from_millis(1));
    EntrezClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_links_keyed_by_pmid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/elink\.fcgi"))
        .and(query_param("cmd", "prlinks"))
        .and(query_param("dbfrom", "pubmed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRLINKS_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let links = client
        .fetch_full_text_links(&["25554862".to_string(), "99999999".to_string()])
        .await
        .expect("Link lookup should succeed");

    // Multiple links per paper, in provider order.
    let wishart = &links["25554862"];
    assert_eq!(wishart.len(), 2);
    assert_eq!(wishart[0].provider_name, "American Physical Society");
    assert_eq!(wishart[0].provider_id, "3243");
    assert_eq!(wishart[0].category, "Full-Text Sources");
    assert_eq!(wishart[1].url, "https://arxiv.org/abs/1410.4719");

    // An id without links never appears as a key; absent-key lookup yields
    // an empty sequence rather than an error.
    assert!(!links.contains_key("99999999"));
    assert!(links
        .get("99999999")
        .cloned()
        .unwrap_or_default()
        .is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_empty_input_makes_no_requests() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    let links = client
        .fetch_full_text_links(&[])
        .await
        .expect("Empty lookup is Ok");
    assert!(links.is_empty());

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_link_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/elink\.fcgi"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client
        .fetch_full_text_links(&["25554862".to_string()])
        .await;

    assert!(result.is_err());
}
