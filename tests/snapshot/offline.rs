use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use market_snapshot::{
    Binning, SentimentCategory, SentimentSummary, Snapshotter, TechnicalOutcome, Vader,
};

use crate::common::{client_for, mock_history_chart, mock_news_search, mock_scan, mock_scan_empty};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

#[tokio::test]
async fn full_snapshot_from_recorded_fixtures() {
    let server = MockServer::start();
    let scans: Vec<_> = ["5", "15", "60", ""]
        .iter()
        .map(|t| mock_scan(&server, "NASDAQ", t))
        .collect();
    let chart = mock_history_chart(&server, "ACME", "ACME");
    let news = mock_news_search(&server, "ACME", "ACME");
    let client = client_for(&server);
    let model = Vader::default();

    let snap = Snapshotter::new(&client, &model)
        .as_of(as_of())
        .snapshot("ACME")
        .await
        .unwrap();

    for m in &scans {
        m.assert_calls(1);
    }
    chart.assert_calls(1);
    news.assert_calls(1);

    let report = snap.technical.report().expect("ready report");
    assert_eq!(report.len(), 4);
    for row in report {
        assert_eq!(row.exchange, "NASDAQ");
        assert_eq!(row.summary.buy + row.summary.sell + row.summary.neutral, 25);
        assert_eq!(row.closing_price, Some(187.44));
    }

    let categories: Vec<_> = snap
        .sentiment
        .headlines
        .iter()
        .map(|h| (h.headline.as_str(), h.category))
        .collect();
    assert_eq!(
        categories,
        [
            ("Great quarter for ACME", SentimentCategory::Positive),
            ("ACME faces lawsuit", SentimentCategory::Negative),
            ("ACME stock flat today", SentimentCategory::Neutral),
        ]
    );
    assert_eq!(
        snap.sentiment.summary,
        SentimentSummary {
            negative: 1,
            neutral: 1,
            positive: 1
        }
    );
    assert!(matches!(snap.sentiment.binning, Binning::Relative { .. }));

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["technical"]["status"], "ready");
    assert_eq!(json["technical"]["report"][0]["RECOMMENDATION"], "BUY");
    assert_eq!(json["technical"]["report"][0]["Closing Price"], 187.44);
    assert_eq!(json["sentiment"]["headlines"][0]["Sentiment"], "Positive");
}

#[tokio::test]
async fn unlisted_symbol_still_gets_sentiment() {
    let server = MockServer::start();
    let nasdaq = mock_scan_empty(&server, "NASDAQ", "5");
    let nyse = mock_scan_empty(&server, "NYSE", "5");
    let chart = mock_history_chart(&server, "ACME", "ACME");
    let news = mock_news_search(&server, "ACME", "ACME");
    let client = client_for(&server);
    let model = Vader::default();

    let snap = Snapshotter::new(&client, &model)
        .as_of(as_of())
        .snapshot("ACME")
        .await
        .unwrap();

    nasdaq.assert_calls(1);
    nyse.assert_calls(1);
    chart.assert_calls(0);
    news.assert_calls(1);
    match &snap.technical {
        TechnicalOutcome::NotFound { message, .. } => {
            assert!(message.contains("NASDAQ or NYSE"), "{message}");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(snap.sentiment.summary.total(), 3);
}

#[tokio::test]
async fn news_outage_leaves_technical_report_intact() {
    let server = MockServer::start();
    for t in ["5", "15", "60", ""] {
        mock_scan(&server, "NASDAQ", t);
    }
    mock_history_chart(&server, "ACME", "ACME");
    let news = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(503);
    });
    let client = client_for(&server);
    let model = Vader::default();

    let snap = Snapshotter::new(&client, &model)
        .as_of(as_of())
        .snapshot("ACME")
        .await
        .unwrap();

    news.assert();
    assert!(snap.technical.report().is_some());
    assert!(snap.sentiment.headlines.is_empty());
    assert_eq!(snap.sentiment.binning, Binning::Degenerate);
    let reason = snap.sentiment.news_error.as_deref().unwrap();
    assert!(reason.contains("503"));
}

#[tokio::test]
async fn news_body_without_articles_gives_empty_sentiment() {
    let server = MockServer::start();
    for t in ["5", "15", "60", ""] {
        mock_scan(&server, "NASDAQ", t);
    }
    mock_history_chart(&server, "ACME", "ACME");
    let news = mock_news_search(&server, "ACME", "errors");
    let client = client_for(&server);
    let model = Vader::default();

    let snap = Snapshotter::new(&client, &model)
        .as_of(as_of())
        .snapshot("ACME")
        .await
        .unwrap();

    news.assert();
    assert!(snap.technical.report().is_some());
    assert!(snap.sentiment.headlines.is_empty());
    assert_eq!(snap.sentiment.summary, SentimentSummary::default());
    assert_eq!(snap.sentiment.binning, Binning::Degenerate);
    // a 200 without articles is not a provider failure
    assert!(snap.sentiment.news_error.is_none());

    let json = serde_json::to_value(&snap.sentiment.summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Negative": 0, "Neutral": 0, "Positive": 0 })
    );
}
