//! Multi-timeframe technical summaries with exchange fallback.
//!
//! [`ExchangeResolver`] tries each exchange in priority order until one yields a
//! summary for a single timeframe. [`IntervalAggregator`] drives it once per configured
//! timeframe and merges the results into an [`AggregatedReport`]. Aggregation is
//! all-or-nothing: one unresolved timeframe fails the whole symbol with
//! [`SnapError::NotFound`].

mod api;
mod compute;
mod model;
mod wire;

pub use api::scan_columns;
pub use model::{AggregatedReport, AggregatedRow, Recommendation, SummaryValue, TechnicalSummary};

use serde::Serialize;

use crate::core::{IndicatorService, SnapError, SummaryRequest};

/// A timeframe to analyse: a display name plus the provider's interval token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeframeSpec {
    /// Display name, used as the report's `Interval` key (e.g. `5 minutes`).
    pub name: String,
    /// Opaque provider token; empty selects the provider's daily default.
    pub token: String,
}

impl TimeframeSpec {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// The standard four timeframes, in report order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("5 minutes", "5"),
            Self::new("15 minutes", "15"),
            Self::new("1 hour", "60"),
            Self::new("1 day", ""),
        ]
    }
}

/// Ordered, non-empty list of exchanges tried for every timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExchangePriority(Vec<String>);

impl ExchangePriority {
    /// # Errors
    ///
    /// Returns [`SnapError::Config`] if the list is empty or contains a blank entry.
    pub fn new<I, S>(exchanges: I) -> Result<Self, SnapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<String> = exchanges.into_iter().map(Into::into).collect();
        if list.is_empty() {
            return Err(SnapError::Config("exchange priority must not be empty".into()));
        }
        if list.iter().any(|e| e.trim().is_empty()) {
            return Err(SnapError::Config("exchange identifiers must not be blank".into()));
        }
        Ok(Self(list))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExchangePriority {
    fn default() -> Self {
        Self(vec!["NASDAQ".into(), "NYSE".into()])
    }
}

/// Everything the technical pipeline needs besides the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalConfig {
    /// Screener region passed to the indicator provider.
    pub screener: String,
    pub exchanges: ExchangePriority,
    pub timeframes: Vec<TimeframeSpec>,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            screener: "america".into(),
            exchanges: ExchangePriority::default(),
            timeframes: TimeframeSpec::defaults(),
        }
    }
}

impl TechnicalConfig {
    /// # Errors
    ///
    /// Returns [`SnapError::Config`] for an empty timeframe list, a repeated timeframe name
    /// or a blank screener.
    pub fn validate(&self) -> Result<(), SnapError> {
        if self.screener.trim().is_empty() {
            return Err(SnapError::Config("screener must not be blank".into()));
        }
        if self.timeframes.is_empty() {
            return Err(SnapError::Config("at least one timeframe is required".into()));
        }
        for (i, tf) in self.timeframes.iter().enumerate() {
            if self.timeframes[..i].iter().any(|t| t.name == tf.name) {
                return Err(SnapError::Config(format!("duplicate timeframe '{}'", tf.name)));
            }
        }
        Ok(())
    }
}

/// A summary together with the exchange that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub exchange: String,
    pub summary: TechnicalSummary,
}

/// Resolves one (symbol, timeframe) against the exchange priority list.
pub struct ExchangeResolver<'a> {
    service: &'a dyn IndicatorService,
    screener: &'a str,
    exchanges: &'a ExchangePriority,
}

impl<'a> ExchangeResolver<'a> {
    pub fn new(
        service: &'a dyn IndicatorService,
        screener: &'a str,
        exchanges: &'a ExchangePriority,
    ) -> Self {
        Self {
            service,
            screener,
            exchanges,
        }
    }

    /// Tries each exchange in order and returns the first successful summary.
    ///
    /// Every provider failure means "try the next exchange"; the reason is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::NotFound`] once every exchange has failed.
    #[tracing::instrument(skip(self, timeframe), fields(timeframe = %timeframe.name))]
    pub async fn resolve(
        &self,
        symbol: &str,
        timeframe: &TimeframeSpec,
    ) -> Result<Resolution, SnapError> {
        for exchange in self.exchanges.iter() {
            let req = SummaryRequest {
                symbol,
                exchange,
                screener: self.screener,
                interval_token: &timeframe.token,
            };
            match self.service.fetch_summary(req).await {
                Ok(summary) => {
                    tracing::debug!(exchange, "resolved");
                    return Ok(Resolution {
                        exchange: exchange.to_string(),
                        summary,
                    });
                }
                Err(e) => tracing::debug!(exchange, error = %e, "exchange failed, trying next"),
            }
        }
        Err(SnapError::NotFound {
            symbol: symbol.to_string(),
            timeframe: timeframe.name.clone(),
        })
    }
}

/// Builds the per-timeframe report for one symbol.
pub struct IntervalAggregator<'a> {
    service: &'a dyn IndicatorService,
    config: &'a TechnicalConfig,
}

impl<'a> IntervalAggregator<'a> {
    pub fn new(service: &'a dyn IndicatorService, config: &'a TechnicalConfig) -> Self {
        Self { service, config }
    }

    /// Resolves every configured timeframe, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::NotFound`] as soon as any timeframe cannot be resolved; rows
    /// collected so far are discarded. Also fails on an invalid configuration.
    #[tracing::instrument(skip(self))]
    pub async fn aggregate(&self, symbol: &str) -> Result<AggregatedReport, SnapError> {
        self.config.validate()?;
        let resolver =
            ExchangeResolver::new(self.service, &self.config.screener, &self.config.exchanges);

        let mut rows = Vec::with_capacity(self.config.timeframes.len());
        for timeframe in &self.config.timeframes {
            let Resolution { exchange, summary } = resolver.resolve(symbol, timeframe).await?;
            rows.push(AggregatedRow {
                index: symbol.to_string(),
                interval: timeframe.name.clone(),
                exchange,
                summary,
                closing_price: None,
            });
        }

        let report = AggregatedReport::from_rows(rows)?;
        tracing::info!(rows = report.len(), "technical report aggregated");
        Ok(report)
    }
}
