//! market-snapshot: one-symbol technical and sentiment snapshot.
//!
//! The technical half resolves indicator summaries for several timeframes against a
//! prioritized exchange list (NASDAQ, then NYSE by default) and stamps each row with the
//! latest closing price. The sentiment half scores recent headlines mentioning the symbol
//! and bins them into negative, neutral and positive relative to the batch.
//!
//! ```no_run
//! # use market_snapshot::{SnapClient, Snapshotter, Vader};
//! # #[tokio::main]
//! # async fn main() -> Result<(), market_snapshot::SnapError> {
//! let client = SnapClient::builder().news_token("my-token").build()?;
//! let model = Vader::default();
//! let snap = Snapshotter::new(&client, &model).snapshot("AAPL").await?;
//! println!("{}", serde_json::to_string_pretty(&snap).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod news;
pub mod sentiment;
pub mod snapshot;
pub mod technical;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::core::{
    IndicatorService, NewsService, PriceHistoryService, SnapClient, SnapClientBuilder, SnapError,
    SummaryRequest,
};
pub use history::{ClosePoint, PriceEnricher, Range};
pub use news::{NewsArticle, NewsQuery, NewsSettings};
pub use sentiment::{
    Binned, Binning, BinningStrategy, PolarityModel, SentimentBinner, SentimentCategory,
    SentimentScore, SentimentScorer, SentimentSummary, Vader,
};
pub use snapshot::{
    ScoredHeadline, SentimentReport, Snapshot, SnapshotConfig, Snapshotter, TechnicalOutcome,
};
pub use technical::{
    AggregatedReport, AggregatedRow, ExchangePriority, ExchangeResolver, IntervalAggregator,
    Recommendation, Resolution, SummaryValue, TechnicalConfig, TechnicalSummary, TimeframeSpec,
    scan_columns,
};
