//! End-to-end tests for every endpoint against a mock datastore.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

fn board() -> Value {
    json!([
        {
            "_id": 1, "CHOPER": "LY", "CHFLTN": "001", "CHOPERD": "EL AL ISRAEL AIRLINES",
            "CHSTOL": "2024-01-01T10:00:00", "CHPTOL": "2024-01-01T10:00:00",
            "CHLOC1T": "BERLIN", "CHLOCCT": "GERMANY", "CHRMINE": "DEPARTED"
        },
        {
            "_id": 2, "CHOPER": "LH", "CHFLTN": "686", "CHOPERD": "LUFTHANSA",
            "CHSTOL": "2024-01-01T11:00:00", "CHPTOL": "2024-01-01T12:00:00",
            "CHLOC1T": "FRANKFURT", "CHLOCCT": "GERMANY", "CHRMINE": "LANDED"
        },
        {
            "_id": 3, "CHOPER": "A3", "CHFLTN": "929", "CHOPERD": "AEGEAN AIRLINES",
            "CHSTOL": "2024-01-01T08:00:00", "CHPTOL": "2024-01-01T08:05:00",
            "CHLOC1T": "ATHENS", "CHLOCCT": "GREECE", "CHRMINE": "DEPARTED"
        },
        {
            "_id": 4, "CHOPER": "LY", "CHFLTN": "351", "CHOPERD": "EL AL ISRAEL AIRLINES",
            "CHSTOL": "2024-01-01T09:00:00", "CHPTOL": "2024-01-01T09:40:00",
            "CHLOC1T": "Berlin", "CHLOCCT": "Germany", "CHRMINE": "DEPARTED"
        },
        {
            "_id": 5, "CHOPER": "W6", "CHFLTN": "2325", "CHOPERD": "WIZZ AIR",
            "CHSTOL": "2024-01-01T07:00:00", "CHPTOL": "2024-01-01T07:00:00",
            "CHLOC1T": "BUDAPEST", "CHLOCCT": "HUNGARY", "CHRMINE": "CANCELED"
        }
    ])
}

async fn get_json(addr: std::net::SocketAddr, path: &str) -> (StatusCode, Value) {
    let res = common::client()
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .expect("service unreachable");
    let status = res.status();
    let body = res.json().await.expect("body is not JSON");
    (status, body)
}

async fn service_with(records: Value) -> (std::net::SocketAddr, flight_stats::Shutdown) {
    let upstream = common::start_mock_upstream(common::datastore_body(records)).await;
    common::start_service(common::config_for(upstream)).await
}

#[tokio::test]
async fn test_raw_records_passthrough() {
    let (addr, _shutdown) = service_with(board()).await;

    let (status, body) = get_json(addr, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, board());
}

#[tokio::test]
async fn test_raw_records_keep_upstream_types() {
    let records = json!([
        {"CHFLTN": 315, "CHLOCCT": null, "CHOPER": "LY", "_id": 9},
        5,
        {"CHRMINE": "LANDED", "CHLOC1T": "ROME", "_id": 10}
    ]);
    let (addr, _shutdown) = service_with(records.clone()).await;

    let (status, body) = get_json(addr, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, records);
    assert_eq!(get_json(addr, "/flights/count").await.1, json!({"count": 2}));
}

#[tokio::test]
async fn test_counts() {
    let (addr, _shutdown) = service_with(board()).await;

    assert_eq!(get_json(addr, "/flights/count").await, (StatusCode::OK, json!({"count": 5})));
    assert_eq!(
        get_json(addr, "/flights/inbound/count").await,
        (StatusCode::OK, json!({"count": 1}))
    );
    assert_eq!(
        get_json(addr, "/flights/outbound/count").await,
        (StatusCode::OK, json!({"count": 3}))
    );
    assert_eq!(
        get_json(addr, "/flights/delayed/count").await,
        (StatusCode::OK, json!({"count": 2}))
    );
}

#[tokio::test]
async fn test_country_counts_ignore_case() {
    let (addr, _shutdown) = service_with(board()).await;

    assert_eq!(get_json(addr, "/flights/count/germany").await.1, json!({"count": 3}));
    assert_eq!(get_json(addr, "/flights/count/GeRmAnY").await.1, json!({"count": 3}));
    assert_eq!(
        get_json(addr, "/flights/outbound/count/Germany").await.1,
        json!({"count": 2})
    );
    assert_eq!(
        get_json(addr, "/flights/inbound/count/GERMANY").await.1,
        json!({"count": 1})
    );
    assert_eq!(get_json(addr, "/flights/count/atlantis").await.1, json!({"count": 0}));
}

#[tokio::test]
async fn test_country_with_space() {
    let records = json!([
        {"CHOPER": "UA", "CHFLTN": "90", "CHLOCCT": "UNITED STATES", "CHRMINE": "LANDED"}
    ]);
    let (addr, _shutdown) = service_with(records).await;

    assert_eq!(
        get_json(addr, "/flights/inbound/count/united%20states").await.1,
        json!({"count": 1})
    );
}

#[tokio::test]
async fn test_most_popular() {
    let (addr, _shutdown) = service_with(board()).await;

    assert_eq!(
        get_json(addr, "/flights/most-popular").await,
        (StatusCode::OK, json!({"city": "berlin"}))
    );
}

#[tokio::test]
async fn test_most_popular_without_departures() {
    let (addr, _shutdown) = service_with(json!([])).await;

    assert_eq!(get_json(addr, "/flights/most-popular").await, (StatusCode::OK, json!({})));
}

#[tokio::test]
async fn test_quick_getaway() {
    let (addr, _shutdown) = service_with(board()).await;

    // A3929 departs 08:05, first inbound after it is LH686 at 12:00
    assert_eq!(
        get_json(addr, "/flights/quick-getaway").await,
        (StatusCode::OK, json!({"departure": "A3929", "arrival": "LH686"}))
    );
}

#[tokio::test]
async fn test_quick_getaway_two_records() {
    let records = json!([
        {"CHRMINE": "DEPARTED", "CHLOCCT": "Germany", "CHLOC1T": "Berlin",
         "CHPTOL": "2024-01-01T10:00:00Z", "CHOPER": "LY", "CHFLTN": "001"},
        {"CHRMINE": "LANDED", "CHLOCCT": "Germany",
         "CHPTOL": "2024-01-01T12:00:00Z", "CHOPER": "LY", "CHFLTN": "002"}
    ]);
    let (addr, _shutdown) = service_with(records).await;

    assert_eq!(get_json(addr, "/flights/count").await.1, json!({"count": 2}));
    assert_eq!(get_json(addr, "/flights/outbound/count").await.1, json!({"count": 1}));
    assert_eq!(get_json(addr, "/flights/count/germany").await.1, json!({"count": 2}));
    assert_eq!(
        get_json(addr, "/flights/quick-getaway").await.1,
        json!({"departure": "LY001", "arrival": "LY002"})
    );
}

#[tokio::test]
async fn test_quick_getaway_missing() {
    let (addr, _shutdown) = service_with(json!([])).await;

    assert_eq!(
        get_json(addr, "/flights/quick-getaway").await.1,
        json!({"departure": "Does Not Exist", "arrival": "Does Not Exist"})
    );
}

#[tokio::test]
async fn test_health_and_request_id() {
    let (addr, _shutdown) = service_with(json!([])).await;

    let res = common::client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let res = common::client()
        .get(format!("http://{}/health", addr))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-me-42");
}

#[tokio::test]
async fn test_unknown_route() {
    let (addr, _shutdown) = service_with(json!([])).await;

    let res = common::client()
        .get(format!("http://{}/flights/teleport", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
