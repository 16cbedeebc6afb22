use futures::future::BoxFuture;

use crate::core::{IndicatorService, SnapClient, SnapError, SummaryRequest, net};
use crate::technical::{TechnicalSummary, compute, wire};

/// The indicator columns requested from the scanner for one timeframe.
///
/// Each column carries a `|token` suffix; the empty token (daily) leaves names bare.
pub fn scan_columns(interval_token: &str) -> Vec<String> {
    compute::COLUMNS
        .iter()
        .map(|c| {
            if interval_token.is_empty() {
                (*c).to_string()
            } else {
                format!("{c}|{interval_token}")
            }
        })
        .collect()
}

pub(crate) async fn fetch_summary(
    client: &SnapClient,
    req: SummaryRequest<'_>,
) -> Result<TechnicalSummary, SnapError> {
    let url = client
        .base_scanner()
        .join(&format!("{}/scan", req.screener.to_lowercase()))?;

    let ticker = format!("{}:{}", req.exchange.to_uppercase(), req.symbol.to_uppercase());
    let payload = wire::ScanRequest {
        symbols: wire::ScanSymbols {
            tickers: [ticker.clone()],
            query: wire::ScanQuery { types: &[] },
        },
        columns: scan_columns(req.interval_token),
    };

    let resp = client.http().post(url).json(&payload).send().await?;
    let resp = net::ensure_success(resp)?;
    let body = net::get_text(resp, "scanner", &ticker).await?;
    let envelope: wire::ScanEnvelope = serde_json::from_str(&body)?;

    if let Some(err) = envelope.error {
        return Err(SnapError::Data(format!("scanner error: {err}")));
    }

    let row = envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .find(|r| r.ticker.eq_ignore_ascii_case(&ticker))
        .ok_or_else(|| SnapError::SymbolNotFound {
            symbol: req.symbol.to_string(),
            exchange: req.exchange.to_string(),
        })?;

    let cols = compute::zip_columns(&row.values)?;
    compute::summarize(&cols)
}

impl IndicatorService for SnapClient {
    fn fetch_summary<'a>(
        &'a self,
        req: SummaryRequest<'a>,
    ) -> BoxFuture<'a, Result<TechnicalSummary, SnapError>> {
        Box::pin(fetch_summary(self, req))
    }
}
