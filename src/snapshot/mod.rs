//! One-symbol snapshot: technical report plus headline sentiment.
//!
//! The two halves are independent. A technical failure is reported as an explicit
//! [`TechnicalOutcome`] state; news failures degrade to an empty sentiment report. Neither
//! prevents the other from being produced.

mod model;

pub use model::{ScoredHeadline, SentimentReport, Snapshot, TechnicalOutcome};

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{IndicatorService, NewsService, PriceHistoryService, SnapClient, SnapError};
use crate::history::{PriceEnricher, Range};
use crate::news::{NewsQuery, NewsSettings, headlines};
use crate::sentiment::{BinningStrategy, PolarityModel, SentimentBinner, SentimentScorer};
use crate::technical::{AggregatedReport, IntervalAggregator, TechnicalConfig};

/// All tunables for a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotConfig {
    pub technical: TechnicalConfig,
    pub news: NewsSettings,
    pub binning: BinningStrategy,
    /// Lookback used to find the latest close.
    pub price_range: Range,
}

impl SnapshotConfig {
    /// # Errors
    ///
    /// Returns [`SnapError::Config`] for an invalid technical config, a zero article
    /// limit, or fixed binning thresholds with `lower > upper`.
    pub fn validate(&self) -> Result<(), SnapError> {
        self.technical.validate()?;
        if self.news.max_results == 0 {
            return Err(SnapError::Config("news max_results must be positive".into()));
        }
        if let BinningStrategy::Fixed { lower, upper } = self.binning
            && !(lower <= upper)
        {
            return Err(SnapError::Config(format!(
                "fixed binning needs lower <= upper, got {lower} > {upper}"
            )));
        }
        Ok(())
    }
}

/// Trims the symbol and rejects blank input.
fn normalize_symbol(symbol: &str) -> Result<&str, SnapError> {
    let s = symbol.trim();
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(SnapError::InvalidSymbol(symbol.to_string()));
    }
    Ok(s)
}

/// Runs both pipelines for a symbol against a set of provider services.
pub struct Snapshotter<'a> {
    indicators: &'a dyn IndicatorService,
    prices: &'a dyn PriceHistoryService,
    news: &'a dyn NewsService,
    model: &'a dyn PolarityModel,
    config: SnapshotConfig,
    today: Option<NaiveDate>,
}

impl<'a> Snapshotter<'a> {
    /// Uses `client` for all three providers.
    pub fn new(client: &'a SnapClient, model: &'a dyn PolarityModel) -> Self {
        Self::with_services(client, client, client, model)
    }

    pub fn with_services(
        indicators: &'a dyn IndicatorService,
        prices: &'a dyn PriceHistoryService,
        news: &'a dyn NewsService,
        model: &'a dyn PolarityModel,
    ) -> Self {
        Self {
            indicators,
            prices,
            news,
            model,
            config: SnapshotConfig::default(),
            today: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: SnapshotConfig) -> Self {
        self.config = config;
        self
    }

    /// Pins the news search window to end on `date` instead of the local current date.
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Aggregates all timeframes and attaches the latest close.
    ///
    /// # Errors
    ///
    /// [`SnapError::NotFound`] if any timeframe is unresolved, [`SnapError::Enrichment`]
    /// if no closing price is available, [`SnapError::InvalidSymbol`] for blank input.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn technical(&self, symbol: &str) -> Result<AggregatedReport, SnapError> {
        let symbol = normalize_symbol(symbol)?;
        let report = IntervalAggregator::new(self.indicators, &self.config.technical)
            .aggregate(symbol)
            .await?;
        PriceEnricher::new(self.prices)
            .range(self.config.price_range)
            .enrich(report, symbol)
            .await
    }

    /// Searches, scores and bins recent headlines. Never fails: a news error yields an
    /// empty report with the reason recorded.
    #[tracing::instrument(skip(self))]
    pub async fn sentiment(&self, symbol: &str) -> SentimentReport {
        let symbol = symbol.trim();
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let query = NewsQuery::for_symbol(symbol, today, &self.config.news);

        let (titles, news_error) = match self.news.search(&query).await {
            Ok(articles) => (headlines(&articles), None),
            Err(e) => {
                tracing::warn!(error = %e, "news unavailable, continuing without headlines");
                (Vec::new(), Some(e.to_string()))
            }
        };

        let scores = SentimentScorer::new(self.model).score(&titles);
        let binned = SentimentBinner::new(self.config.binning).summarize(&scores);
        tracing::info!(
            headlines = titles.len(),
            negative = binned.summary.negative,
            neutral = binned.summary.neutral,
            positive = binned.summary.positive,
            "sentiment summarized"
        );
        SentimentReport::assemble(titles, scores, binned, news_error)
    }

    /// Builds the full snapshot.
    ///
    /// # Errors
    ///
    /// Only input problems fail the call ([`SnapError::InvalidSymbol`],
    /// [`SnapError::Config`]); provider failures are captured inside the snapshot.
    pub async fn snapshot(&self, symbol: &str) -> Result<Snapshot, SnapError> {
        self.config.validate()?;
        let symbol = normalize_symbol(symbol)?;

        let technical = TechnicalOutcome::from_result(
            self.technical(symbol).await,
            &self.config.technical.exchanges,
        );
        let sentiment = self.sentiment(symbol).await;

        Ok(Snapshot {
            symbol: symbol.to_string(),
            generated_at: chrono::Local::now(),
            technical,
            sentiment,
        })
    }
}
