//! Integration tests for odd journal id and ISSN resolution using mocked
//! HTTP responses.

use std::time::Duration;

use entrez_client::{ClientConfig, EntrezClient, EntrezError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_body(ids: &[&str]) -> String {
    let id_elements: String = ids
        .iter()
        .map(|id| format!("        <Id>{}</Id>\n", id))
        .collect();
    format!(
        r#"<?xml version="1.0" ?>
<eSearchResult>
    <Count>{}</Count>
    <IdList>
{}    </IdList>
</eSearchResult>"#,
        ids.len(),
        id_elements
    )
}

fn create_mock_client(mock_server: &MockServer) -> EntrezClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_interval(Duration::from_millis(1));
    EntrezClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_resolve_odd_journal_id() {
    let mock_server = MockServer::start().await;

    // Resolution searches the catalog database with a wide recency window.
    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .and(query_param("db", "nlmcatalog"))
        .and(query_param("reldate", "100000"))
        .and(query_param("term", "19620690R"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&["100381"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let resolved = client
        .resolve_odd_journal_id("19620690R")
        .await
        .expect("Resolution should succeed");

    assert_eq!(resolved, "100381");
}

#[tokio::test]
#[traced_test]
async fn test_resolve_journal_id_from_issn() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .and(query_param("db", "nlmcatalog"))
        .and(query_param("term", "1361-6633[ISSN]"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&["100381"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let resolved = client
        .resolve_journal_id_from_issn("1361-6633")
        .await
        .expect("Resolution should succeed");

    assert_eq!(resolved, "100381");
}

#[tokio::test]
#[traced_test]
async fn test_zero_matches_is_ambiguous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&[])))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client.resolve_odd_journal_id("19620690R").await;

    match result {
        Err(EntrezError::AmbiguousJournalId { id, matches }) => {
            assert_eq!(id, "19620690R");
            assert_eq!(matches, 0);
        }
        other => panic!("Expected AmbiguousJournalId, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn test_multiple_matches_are_ambiguous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&["100381", "100382"])))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client.resolve_journal_id_from_issn("1361-6633").await;

    match result {
        Err(EntrezError::AmbiguousJournalId { id, matches }) => {
            assert_eq!(id, "1361-6633");
            assert_eq!(matches, 2);
        }
        other => panic!("Expected AmbiguousJournalId, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn test_unresolvable_id_does_not_abort_sibling_journal_fetch() {
    let mock_server = MockServer::start().await;

    // The odd id resolves to nothing...
    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // ...but the numeric sibling is still fetched.
    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi"))
        .and(query_param("db", "nlmcatalog"))
        .and(query_param("id", "0401141"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0" ?>
<NLMCatalogRecordSet>
<NLMCatalogRecord>
    <NlmUniqueID>0401141</NlmUniqueID>
    <TitleMain><Title>Physical review letters.</Title></TitleMain>
</NLMCatalogRecord>
</NLMCatalogRecordSet>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let journals = client
        .fetch_journals(&["19620690R".to_string(), "0401141".to_string()])
        .await
        .expect("Sibling fetch should succeed");

    assert_eq!(journals.len(), 1);
    assert_eq!(journals[0].nlm_id, "0401141");
}

#[tokio::test]
#[traced_test]
async fn test_odd_id_is_resolved_before_journal_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi"))
        .and(query_param("term", "19620690R"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_body(&["100381"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The fetch must use the resolved id, not the odd one.
    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi"))
        .and(query_param("id", "100381"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0" ?>
<NLMCatalogRecordSet>
<NLMCatalogRecord>
    <NlmUniqueID>100381</NlmUniqueID>
    <TitleMain><Title>Reports on progress in physics.</Title></TitleMain>
</NLMCatalogRecord>
</NLMCatalogRecordSet>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let journals = client
        .fetch_journals(&["19620690R".to_string()])
        .await
        .expect("Fetch should succeed");

    assert_eq!(journals.len(), 1);
    assert_eq!(journals[0].nlm_id, "100381");
    assert_eq!(journals[0].title_long, "Reports on progress in physics.");
}
