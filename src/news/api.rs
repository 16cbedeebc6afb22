use futures::future::BoxFuture;

use crate::core::{NewsService, SnapClient, SnapError, net};
use crate::news::{NewsArticle, NewsQuery, wire};

pub(crate) async fn search_news(
    client: &SnapClient,
    query: &NewsQuery,
) -> Result<Vec<NewsArticle>, SnapError> {
    let mut url = client.base_news().join("search")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", &query.query)
            .append_pair("max", &query.max_results.to_string())
            .append_pair("in", "title")
            .append_pair("from", &query.from.format("%Y-%m-%d").to_string())
            .append_pair("to", &query.to.format("%Y-%m-%d").to_string())
            .append_pair("lang", &query.language);
        if let Some(token) = client.news_token() {
            qp.append_pair("token", token);
        }
    }

    let resp = client.http().get(url).send().await?;
    // 401/403/429 are how the provider reports a missing key or exhausted quota
    let resp = net::ensure_success(resp).map_err(|e| SnapError::NewsUnavailable(e.to_string()))?;
    let body = net::get_text(resp, "news_search", &query.query).await?;
    decode_articles(&body)
}

pub(crate) fn decode_articles(body: &str) -> Result<Vec<NewsArticle>, SnapError> {
    let envelope: wire::SearchEnvelope = serde_json::from_str(body)?;

    let Some(articles) = envelope.articles else {
        match envelope.errors {
            Some(errors) => tracing::warn!(%errors, "news response has no article list"),
            None => tracing::warn!("news response has no article list"),
        }
        return Ok(Vec::new());
    };
    tracing::debug!(
        returned = articles.len(),
        total = envelope.total_articles,
        "news articles received"
    );

    Ok(articles
        .into_iter()
        .map(|a| NewsArticle {
            title: a.title.unwrap_or_default(),
            description: a.description,
            url: a.url,
            source: a.source.and_then(|s| s.name),
            published_at: a
                .published_at
                .and_then(|p| chrono::DateTime::parse_from_rfc3339(&p).ok())
                .map(|d| d.with_timezone(&chrono::Utc)),
        })
        .collect())
}

impl NewsService for SnapClient {
    fn search<'a>(
        &'a self,
        query: &'a NewsQuery,
    ) -> BoxFuture<'a, Result<Vec<NewsArticle>, SnapError>> {
        Box::pin(search_news(self, query))
    }
}
