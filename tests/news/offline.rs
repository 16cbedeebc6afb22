use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use market_snapshot::{NewsQuery, NewsService, NewsSettings, SnapError, news::headlines};

use crate::common::{client_for, fixture};

fn query() -> NewsQuery {
    let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    NewsQuery::for_symbol("ACME", today, &NewsSettings::default())
}

#[tokio::test]
async fn search_sends_title_query_over_window() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/search")
            .query_param("q", "ACME")
            .query_param("max", "50")
            .query_param("in", "title")
            .query_param("from", "2024-05-01")
            .query_param("to", "2024-05-02")
            .query_param("lang", "en")
            .query_param("token", "test-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_search", "ACME"));
    });
    let client = client_for(&server);

    let articles = client.search(&query()).await.unwrap();

    mock.assert();
    assert_eq!(articles.len(), 4);
    assert_eq!(articles[0].source.as_deref(), Some("Example Wire"));
    assert!(articles[0].published_at.is_some());
    assert_eq!(
        headlines(&articles),
        [
            "Great quarter for ACME",
            "ACME faces lawsuit",
            "ACME stock flat today"
        ]
    );
}

#[tokio::test]
async fn response_without_articles_is_empty() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_search", "errors"));
    });
    let client = client_for(&server);

    let articles = client.search(&query()).await.unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn unauthorized_is_an_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(401);
    });
    let client = client_for(&server);

    let err = client.search(&query()).await.unwrap_err();

    mock.assert();
    match err {
        SnapError::NewsUnavailable(reason) => assert!(reason.contains("401"), "{reason}"),
        other => panic!("expected NewsUnavailable, got {other:?}"),
    }
}
