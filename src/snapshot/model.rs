use chrono::{DateTime, Local};
use serde::Serialize;

use crate::core::SnapError;
use crate::sentiment::{Binned, Binning, SentimentCategory, SentimentScore, SentimentSummary};
use crate::technical::{AggregatedReport, ExchangePriority};

/// The technical half of a snapshot: either a full report or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TechnicalOutcome {
    Ready {
        report: AggregatedReport,
    },
    /// At least one timeframe was unresolved on every exchange; no partial rows are kept.
    NotFound {
        symbol: String,
        timeframe: String,
        message: String,
    },
    /// The report was aggregated but no closing price could be attached.
    EnrichmentFailed { symbol: String, reason: String },
    Failed { reason: String },
}

impl TechnicalOutcome {
    pub(crate) fn from_result(
        result: Result<AggregatedReport, SnapError>,
        exchanges: &ExchangePriority,
    ) -> Self {
        match result {
            Ok(report) => Self::Ready { report },
            Err(SnapError::NotFound { symbol, timeframe }) => {
                let tried = exchanges.iter().collect::<Vec<_>>().join(" or ");
                let message = format!(
                    "Symbol {symbol} not found in {tried} for the {timeframe} timeframe; \
                     the lookup needs every timeframe to resolve, so no partial report is shown"
                );
                Self::NotFound {
                    symbol,
                    timeframe,
                    message,
                }
            }
            Err(SnapError::Enrichment { symbol, reason }) => {
                Self::EnrichmentFailed { symbol, reason }
            }
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&AggregatedReport> {
        match self {
            Self::Ready { report } => Some(report),
            _ => None,
        }
    }
}

/// One headline with its score and category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHeadline {
    #[serde(rename = "News")]
    pub headline: String,
    #[serde(flatten)]
    pub score: SentimentScore,
    #[serde(rename = "Sentiment")]
    pub category: SentimentCategory,
}

/// The sentiment half of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub headlines: Vec<ScoredHeadline>,
    pub summary: SentimentSummary,
    pub binning: Binning,
    /// Set when the news provider failed and the report was built from zero headlines.
    pub news_error: Option<String>,
}

impl SentimentReport {
    pub(crate) fn assemble(
        titles: Vec<String>,
        scores: Vec<SentimentScore>,
        binned: Binned,
        news_error: Option<String>,
    ) -> Self {
        let headlines = titles
            .into_iter()
            .zip(scores)
            .zip(binned.categories)
            .map(|((headline, score), category)| ScoredHeadline {
                headline,
                score,
                category,
            })
            .collect();
        Self {
            headlines,
            summary: binned.summary,
            binning: binned.binning,
            news_error,
        }
    }
}

/// Everything shown for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub symbol: String,
    pub generated_at: DateTime<Local>,
    pub technical: TechnicalOutcome,
    pub sentiment: SentimentReport,
}
