#![allow(dead_code)]

use httpmock::{
    Method::{GET, POST},
    Mock, MockServer,
};
use market_snapshot::{SnapClient, scan_columns};
use serde_json::json;
use std::{fs, path::Path};
use url::Url;

pub fn fixture(endpoint: &str, symbol: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{endpoint}_{symbol}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose three providers all point at `server`.
pub fn client_for(server: &MockServer) -> SnapClient {
    let base = server.base_url();
    SnapClient::builder()
        .base_scanner(Url::parse(&format!("{base}/")).unwrap())
        .base_chart(Url::parse(&format!("{base}/v8/finance/chart/")).unwrap())
        .base_news(Url::parse(&format!("{base}/api/v4/")).unwrap())
        .news_token("test-token")
        .build()
        .unwrap()
}

pub fn scan_payload(exchange: &str, symbol: &str, token: &str) -> serde_json::Value {
    json!({
        "symbols": {
            "tickers": [format!("{exchange}:{symbol}")],
            "query": { "types": [] }
        },
        "columns": scan_columns(token)
    })
}

/// Serves the recorded ACME scanner row for `exchange`, for one interval token.
pub fn mock_scan<'a>(server: &'a MockServer, exchange: &str, token: &str) -> Mock<'a> {
    let body =
        fixture("scanner_NASDAQ", "ACME").replace("NASDAQ:ACME", &format!("{exchange}:ACME"));
    let payload = scan_payload(exchange, "ACME", token);
    server.mock(|when, then| {
        when.method(POST).path("/america/scan").json_body(payload);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// The scanner answers, but has no row for the ticker.
pub fn mock_scan_empty<'a>(server: &'a MockServer, exchange: &str, token: &str) -> Mock<'a> {
    let payload = scan_payload(exchange, "ACME", token);
    server.mock(|when, then| {
        when.method(POST).path("/america/scan").json_body(payload);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("scanner", "empty"));
    })
}

pub fn mock_history_chart<'a>(
    server: &'a MockServer,
    symbol: &str,
    fixture_name: &str,
) -> Mock<'a> {
    let body = fixture("history_chart", fixture_name);
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"))
            .query_param("range", "1d")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_news_search<'a>(
    server: &'a MockServer,
    symbol: &str,
    fixture_name: &str,
) -> Mock<'a> {
    let body = fixture("news_search", fixture_name);
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/search")
            .query_param("q", symbol)
            .query_param("in", "title");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
