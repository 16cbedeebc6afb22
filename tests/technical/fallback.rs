use httpmock::MockServer;
use market_snapshot::{IntervalAggregator, SnapError, TechnicalConfig};

use crate::common::{client_for, mock_scan, mock_scan_empty};

const TOKENS: [&str; 4] = ["5", "15", "60", ""];

#[tokio::test]
async fn nyse_is_used_when_nasdaq_has_no_row() {
    let server = MockServer::start();
    let nasdaq: Vec<_> = TOKENS
        .iter()
        .map(|t| mock_scan_empty(&server, "NASDAQ", t))
        .collect();
    let nyse: Vec<_> = TOKENS.iter().map(|t| mock_scan(&server, "NYSE", t)).collect();
    let client = client_for(&server);
    let config = TechnicalConfig::default();

    let report = IntervalAggregator::new(&client, &config)
        .aggregate("ACME")
        .await
        .unwrap();

    for m in nasdaq.iter().chain(&nyse) {
        m.assert_calls(1);
    }
    assert_eq!(report.len(), 4);
    assert!(report.iter().all(|r| r.exchange == "NYSE"));
    let daily = report.get("ACME", "1 day").unwrap();
    assert_eq!(daily.summary.buy, 17);
    assert_eq!(daily.closing_price, None);
}

#[tokio::test]
async fn listed_exchange_wins_without_fallback() {
    let server = MockServer::start();
    let nasdaq: Vec<_> = TOKENS
        .iter()
        .map(|t| mock_scan(&server, "NASDAQ", t))
        .collect();
    let nyse = mock_scan(&server, "NYSE", "5");
    let client = client_for(&server);
    let config = TechnicalConfig::default();

    let report = IntervalAggregator::new(&client, &config)
        .aggregate("ACME")
        .await
        .unwrap();

    for m in &nasdaq {
        m.assert_calls(1);
    }
    nyse.assert_calls(0);
    let intervals: Vec<_> = report.iter().map(|r| r.interval.as_str()).collect();
    assert_eq!(intervals, ["5 minutes", "15 minutes", "1 hour", "1 day"]);
}

#[tokio::test]
async fn unlisted_everywhere_fails_on_first_timeframe() {
    let server = MockServer::start();
    let nasdaq = mock_scan_empty(&server, "NASDAQ", "5");
    let nyse = mock_scan_empty(&server, "NYSE", "5");
    let later = mock_scan(&server, "NASDAQ", "15");
    let client = client_for(&server);
    let config = TechnicalConfig::default();

    let err = IntervalAggregator::new(&client, &config)
        .aggregate("ACME")
        .await
        .unwrap_err();

    nasdaq.assert_calls(1);
    nyse.assert_calls(1);
    later.assert_calls(0);
    assert!(
        matches!(err, SnapError::NotFound { ref timeframe, .. } if timeframe == "5 minutes"),
        "got {err:?}"
    );
}
