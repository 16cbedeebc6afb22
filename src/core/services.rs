use futures::future::BoxFuture;

use crate::core::SnapError;
use crate::history::{ClosePoint, Range};
use crate::news::{NewsArticle, NewsQuery};
use crate::technical::TechnicalSummary;

/// Parameters for a single indicator-summary lookup.
///
/// One request targets exactly one exchange and one timeframe; the fallback across
/// exchanges is the caller's concern (see [`ExchangeResolver`](crate::technical::ExchangeResolver)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRequest<'a> {
    /// The ticker symbol, without exchange prefix.
    pub symbol: &'a str,
    /// The exchange identifier, e.g. `NASDAQ`.
    pub exchange: &'a str,
    /// The screener region, e.g. `america`.
    pub screener: &'a str,
    /// The provider-specific interval token (empty for the provider's default, daily).
    pub interval_token: &'a str,
}

/// A service that can produce a technical-analysis summary for one symbol on one exchange.
///
/// This is the seam the exchange-fallback logic is written against; it is implemented
/// by [`SnapClient`](crate::SnapClient) and by in-memory fakes in tests.
pub trait IndicatorService: Send + Sync {
    /// Fetches the summary for a single (symbol, exchange, timeframe).
    ///
    /// Every failure is reported as a typed error; callers decide whether it is fatal.
    fn fetch_summary<'a>(
        &'a self,
        req: SummaryRequest<'a>,
    ) -> BoxFuture<'a, Result<TechnicalSummary, SnapError>>;
}

/// A service that returns recent closing prices for a symbol.
pub trait PriceHistoryService: Send + Sync {
    /// Fetches the close series over `range`, oldest first. Bars without a close are omitted.
    fn recent_closes<'a>(
        &'a self,
        symbol: &'a str,
        range: Range,
    ) -> BoxFuture<'a, Result<Vec<ClosePoint>, SnapError>>;
}

/// A service that searches recent news articles.
pub trait NewsService: Send + Sync {
    /// Runs a search. A well-formed response with no article list yields an empty vector.
    fn search<'a>(
        &'a self,
        query: &'a NewsQuery,
    ) -> BoxFuture<'a, Result<Vec<NewsArticle>, SnapError>>;
}
