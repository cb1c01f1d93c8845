//! End-to-end tests against a mock UltraDNS API

use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use udns_sdk::http::HttpClientConfig;
use udns_sdk::{ClientConfig, ErrorKind, RRSetKey, RetryPolicy, UdnsClient};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALERTS: &str = "/zones/example.com./rrsets/A/www/alerts";
const EVENTS: &str = "/zones/example.com./rrsets/A/www/events";

fn key() -> RRSetKey {
    RRSetKey::new("example.com.", "A", "www")
}

fn alerts_body(records: &[&str], offset: u32, total: u32) -> Value {
    json!({
        "alerts": records
            .iter()
            .map(|r| json!({"poolRecord": r, "probeType": "PING", "status": "ACTIVE"}))
            .collect::<Vec<_>>(),
        "resultInfo": {"totalCount": total, "offset": offset, "returnedCount": records.len()}
    })
}

fn client(server: &MockServer, policy: RetryPolicy) -> UdnsClient {
    let http = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .build();
    UdnsClient::new(http, policy).unwrap()
}

#[tokio::test]
async fn test_full_sweep_from_yaml_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ALERTS))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alerts_body(&["a", "b"], 0, 3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ALERTS))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alerts_body(&["c"], 2, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let yaml = format!(
        "base_url: {}\nrate_limit: null\nretry:\n  max_retries: 5\n  backoff_ms: 0\n",
        server.uri()
    );
    let config = ClientConfig::from_yaml_str(&yaml).unwrap();
    let client = UdnsClient::from_config(&config).unwrap();

    let key = key();
    let alerts = assert_ok!(client.alerts().select(&key).await);
    let records: Vec<_> = alerts.iter().map(|a| a.pool_record.clone()).collect();
    assert_eq!(records, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_forbidden_surfaces_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EVENTS))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, RetryPolicy::new(5, Duration::from_secs(60)));
    let key = key();
    let started = std::time::Instant::now();

    let err = assert_err!(client.events().select(&key, "").await);

    assert_eq!(err.error().kind(), ErrorKind::Client);
    assert!(err.partial().is_empty());
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let http = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .no_rate_limit()
        .build();
    let client = UdnsClient::new(http, RetryPolicy::new(5, Duration::from_secs(60))).unwrap();
    let key = key();

    let err = assert_err!(client.alerts().select(&key).await);

    assert_eq!(err.error().kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_caller_deadline_wraps_sweep() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ALERTS))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server, RetryPolicy::new(5, Duration::from_secs(30)));
    let key = key();

    let outcome =
        tokio::time::timeout(Duration::from_millis(200), client.alerts().select(&key)).await;

    assert!(outcome.is_err());
}

#[tokio::test]
async fn test_concurrent_sweeps_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ALERTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(alerts_body(&["x", "y"], 0, 2)))
        .mount(&server)
        .await;

    let client = client(&server, RetryPolicy::without_backoff(5));
    let alerts = client.alerts();
    let key = key();

    let (first, second) = tokio::join!(alerts.select(&key), alerts.select(&key));

    assert_eq!(assert_ok!(first).len(), 2);
    assert_eq!(assert_ok!(second).len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
