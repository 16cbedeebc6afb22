//! Latest closing price lookup and report enrichment.

mod api;
mod wire;

use serde::Serialize;

use crate::core::{PriceHistoryService, SnapError};
use crate::technical::AggregatedReport;

/// A relative lookback window for price history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Range {
    #[default]
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
}

impl Range {
    /// The provider's query value, e.g. `1d`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
        }
    }
}

/// One close from the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosePoint {
    /// Unix timestamp (seconds) of the bar.
    pub ts: i64,
    pub close: f64,
}

/// Writes the latest close onto every row of a technical report.
pub struct PriceEnricher<'a> {
    service: &'a dyn PriceHistoryService,
    range: Range,
}

impl<'a> PriceEnricher<'a> {
    pub fn new(service: &'a dyn PriceHistoryService) -> Self {
        Self {
            service,
            range: Range::D1,
        }
    }

    /// Overrides the lookback window (default one day).
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Fetches the series once and sets `closing_price` on all rows to its last close.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::Enrichment`] when the provider call fails, the series is empty,
    /// or the last close is not a finite number. No row is modified in that case.
    #[tracing::instrument(skip(self, report), fields(rows = report.len()))]
    pub async fn enrich(
        &self,
        mut report: AggregatedReport,
        symbol: &str,
    ) -> Result<AggregatedReport, SnapError> {
        let fail = |reason: String| SnapError::Enrichment {
            symbol: symbol.to_string(),
            reason,
        };

        let series = self
            .service
            .recent_closes(symbol, self.range)
            .await
            .map_err(|e| fail(e.to_string()))?;

        let last = series
            .last()
            .ok_or_else(|| fail(format!("empty {} price series", self.range.as_str())))?;
        if !last.close.is_finite() {
            return Err(fail(format!("non-finite close at {}", last.ts)));
        }

        for row in report.rows_mut() {
            row.closing_price = Some(last.close);
        }
        tracing::debug!(close = last.close, "closing price attached");
        Ok(report)
    }
}
