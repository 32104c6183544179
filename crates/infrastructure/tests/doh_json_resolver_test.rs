use mta_sts_application::ports::MxResolver;
use mta_sts_domain::{DomainError, MailDomain};
use mta_sts_infrastructure::dns::DohJsonResolver;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(server: &MockServer) -> DohJsonResolver {
    DohJsonResolver::new(format!("{}/dns-query", server.uri()), None).unwrap()
}

#[tokio::test]
async fn test_lookup_sends_json_mx_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "example.com"))
        .and(query_param("type", "MX"))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                { "name": "example.com", "type": 15, "TTL": 300, "data": "10 mail1.example.com." },
                { "name": "example.com", "type": 15, "TTL": 300, "data": "20 mail2.example.com." }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = resolver_for(&server)
        .lookup_mx(&MailDomain::from_host("mta-sts.example.com"))
        .await
        .unwrap();

    assert!(answer.is_success());
    let hosts: Vec<String> = answer
        .mx_records()
        .unwrap()
        .iter()
        .map(|mx| mx.host().to_string())
        .collect();
    assert_eq!(hosts, vec!["mail1.example.com", "mail2.example.com"]);
}

#[tokio::test]
async fn test_lookup_returns_nonzero_status_as_answer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Status": 2 })))
        .mount(&server)
        .await;

    let answer = resolver_for(&server)
        .lookup_mx(&MailDomain::from_host("example.com"))
        .await
        .unwrap();

    assert_eq!(answer.status, 2);
    assert!(answer.answer.is_none());
}

#[tokio::test]
async fn test_lookup_malformed_json_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = resolver_for(&server)
        .lookup_mx(&MailDomain::from_host("example.com"))
        .await;

    assert!(matches!(result, Err(DomainError::MalformedAnswer(_))));
}

#[tokio::test]
async fn test_lookup_http_error_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = resolver_for(&server)
        .lookup_mx(&MailDomain::from_host("example.com"))
        .await;

    match result {
        Err(DomainError::ResolverTransport(msg)) => assert!(msg.contains("502")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Status": 0 }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let resolver = DohJsonResolver::new(
        format!("{}/dns-query", server.uri()),
        Some(Duration::from_millis(100)),
    )
    .unwrap();

    let result = resolver
        .lookup_mx(&MailDomain::from_host("example.com"))
        .await;

    assert!(matches!(result, Err(DomainError::ResolverTransport(_))));
}

#[tokio::test]
async fn test_lookup_unreachable_resolver_is_transport_error() {
    let resolver =
        DohJsonResolver::new("http://127.0.0.1:1/dns-query".to_string(), None).unwrap();

    let result = resolver
        .lookup_mx(&MailDomain::from_host("example.com"))
        .await;

    assert!(matches!(result, Err(DomainError::ResolverTransport(_))));
}
