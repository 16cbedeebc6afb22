//! In-memory service fakes for unit tests.

use std::collections::HashSet;
use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::core::{IndicatorService, NewsService, PriceHistoryService, SnapError, SummaryRequest};
use crate::history::{ClosePoint, Range};
use crate::news::{NewsArticle, NewsQuery};
use crate::sentiment::{PolarityModel, SentimentScore};
use crate::technical::{Recommendation, TechnicalSummary};

/// Serves a fixed summary for every (exchange, interval token) it lists.
#[derive(Default)]
pub(crate) struct FakeIndicators {
    listed: HashSet<(String, String)>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeIndicators {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn listed(mut self, exchange: &str, tokens: &[&str]) -> Self {
        for t in tokens {
            self.listed.insert((exchange.to_string(), (*t).to_string()));
        }
        self
    }

    /// `(exchange, token)` pairs requested so far, in order.
    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl IndicatorService for FakeIndicators {
    fn fetch_summary<'a>(
        &'a self,
        req: SummaryRequest<'a>,
    ) -> BoxFuture<'a, Result<TechnicalSummary, SnapError>> {
        let key = (req.exchange.to_string(), req.interval_token.to_string());
        self.calls.lock().unwrap().push(key.clone());
        let hit = self.listed.contains(&key);
        Box::pin(async move {
            if hit {
                Ok(TechnicalSummary {
                    recommendation: Recommendation::Buy,
                    buy: 14,
                    sell: 3,
                    neutral: 9,
                })
            } else {
                Err(SnapError::SymbolNotFound {
                    symbol: req.symbol.to_string(),
                    exchange: req.exchange.to_string(),
                })
            }
        })
    }
}

pub(crate) struct FakePrices {
    series: Option<Vec<ClosePoint>>,
    calls: Mutex<usize>,
}

impl FakePrices {
    pub(crate) fn series(points: &[(i64, f64)]) -> Self {
        Self {
            series: Some(
                points
                    .iter()
                    .map(|&(ts, close)| ClosePoint { ts, close })
                    .collect(),
            ),
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            series: None,
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl PriceHistoryService for FakePrices {
    fn recent_closes<'a>(
        &'a self,
        symbol: &'a str,
        _range: Range,
    ) -> BoxFuture<'a, Result<Vec<ClosePoint>, SnapError>> {
        *self.calls.lock().unwrap() += 1;
        Box::pin(async move {
            self.series.clone().ok_or_else(|| SnapError::Status {
                status: 404,
                url: format!("chart/{symbol}"),
            })
        })
    }
}

pub(crate) enum FakeNews {
    Titles(Vec<&'static str>),
    Failing,
}

impl NewsService for FakeNews {
    fn search<'a>(
        &'a self,
        _query: &'a NewsQuery,
    ) -> BoxFuture<'a, Result<Vec<NewsArticle>, SnapError>> {
        Box::pin(async move {
            match self {
                Self::Titles(titles) => Ok(titles
                    .iter()
                    .map(|t| NewsArticle {
                        title: (*t).to_string(),
                        description: None,
                        url: None,
                        source: None,
                        published_at: None,
                    })
                    .collect()),
                Self::Failing => Err(SnapError::NewsUnavailable("connection reset".into())),
            }
        })
    }
}

/// Compound score is the text length divided by ten.
pub(crate) struct LengthModel;

impl PolarityModel for LengthModel {
    fn polarity(&self, text: &str) -> SentimentScore {
        SentimentScore {
            compound: text.len() as f64 / 10.0,
            ..SentimentScore::default()
        }
    }
}
