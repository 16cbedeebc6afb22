use futures::future::BoxFuture;
use url::Url;

use crate::core::{PriceHistoryService, SnapClient, SnapError, net};
use crate::history::{ClosePoint, Range, wire};

fn chart_url(base: &Url, symbol: &str, range: Range) -> Result<Url, SnapError> {
    let mut url = base.clone();
    // one percent-encoded segment, so `:` or `/` in a symbol cannot rewrite the URL
    url.path_segments_mut()
        .map_err(|()| SnapError::Data("chart base URL cannot take a path".into()))?
        .pop_if_empty()
        .push(symbol);
    url.query_pairs_mut()
        .append_pair("range", range.as_str())
        .append_pair("interval", "1d")
        .append_pair("includePrePost", "false");
    Ok(url)
}

pub(crate) async fn fetch_closes(
    client: &SnapClient,
    symbol: &str,
    range: Range,
) -> Result<Vec<ClosePoint>, SnapError> {
    let url = chart_url(client.base_chart(), symbol, range)?;
    let resp = client.http().get(url).send().await?;
    let resp = net::ensure_success(resp)?;
    let body = net::get_text(resp, "history_chart", symbol).await?;
    decode_closes(&body)
}

fn decode_closes(body: &str) -> Result<Vec<ClosePoint>, SnapError> {
    let parsed: wire::ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| SnapError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(SnapError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let Some(r0) = chart.result.and_then(|mut r| r.pop()) else {
        return Ok(Vec::new());
    };

    let ts = r0.timestamp.unwrap_or_default();
    let closes = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(ts
        .into_iter()
        .zip(closes)
        .filter_map(|(ts, close)| close.map(|close| ClosePoint { ts, close }))
        .collect())
}

impl PriceHistoryService for SnapClient {
    fn recent_closes<'a>(
        &'a self,
        symbol: &'a str,
        range: Range,
    ) -> BoxFuture<'a, Result<Vec<ClosePoint>, SnapError>> {
        Box::pin(fetch_closes(self, symbol, range))
    }
}
