use httpmock::{Method::GET, MockServer};
use market_snapshot::{
    AggregatedReport, AggregatedRow, PriceEnricher, PriceHistoryService, Range, Recommendation,
    SnapError, TechnicalSummary,
};

use crate::common::{client_for, mock_history_chart};

fn report(intervals: &[&str]) -> AggregatedReport {
    let rows = intervals
        .iter()
        .map(|i| AggregatedRow {
            index: "ACME".into(),
            interval: (*i).into(),
            exchange: "NASDAQ".into(),
            summary: TechnicalSummary {
                recommendation: Recommendation::Neutral,
                buy: 5,
                sell: 5,
                neutral: 16,
            },
            closing_price: None,
        })
        .collect();
    AggregatedReport::from_rows(rows).unwrap()
}

#[tokio::test]
async fn closes_come_back_oldest_first() {
    let server = MockServer::start();
    let mock = mock_history_chart(&server, "ACME", "ACME");
    let client = client_for(&server);

    let closes = client.recent_closes("ACME", Range::D1).await.unwrap();

    mock.assert();
    let values: Vec<f64> = closes.iter().map(|c| c.close).collect();
    assert_eq!(values, [186.9, 187.44]);
    assert!(closes[0].ts < closes[1].ts);
}

#[tokio::test]
async fn every_row_gets_the_latest_close() {
    let server = MockServer::start();
    let mock = mock_history_chart(&server, "ACME", "ACME");
    let client = client_for(&server);

    let enriched = PriceEnricher::new(&client)
        .enrich(report(&["5 minutes", "1 day"]), "ACME")
        .await
        .unwrap();

    mock.assert_calls(1);
    assert!(enriched.iter().all(|r| r.closing_price == Some(187.44)));
}

#[tokio::test]
async fn empty_chart_fails_enrichment() {
    let server = MockServer::start();
    let mock = mock_history_chart(&server, "ACME", "empty");
    let client = client_for(&server);

    let err = PriceEnricher::new(&client)
        .enrich(report(&["1 day"]), "ACME")
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, SnapError::Enrichment { .. }), "got {err:?}");
}

#[tokio::test]
async fn chart_http_error_fails_enrichment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/ACME");
        then.status(404);
    });
    let client = client_for(&server);

    let err = PriceEnricher::new(&client)
        .enrich(report(&["1 day"]), "ACME")
        .await
        .unwrap_err();

    mock.assert();
    match err {
        SnapError::Enrichment { symbol, reason } => {
            assert_eq!(symbol, "ACME");
            assert!(reason.contains("404"), "{reason}");
        }
        other => panic!("expected Enrichment, got {other:?}"),
    }
}

#[tokio::test]
async fn symbol_with_colon_stays_in_the_path() {
    let server = MockServer::start();
    let mock = mock_history_chart(&server, "BRK:B", "ACME");
    let client = client_for(&server);

    let closes = client.recent_closes("BRK:B", Range::D1).await.unwrap();

    mock.assert();
    assert_eq!(closes.last().map(|c| c.close), Some(187.44));
}
