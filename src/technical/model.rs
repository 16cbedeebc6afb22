use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::core::SnapError;

/// The overall recommendation label derived from the screener's aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongSell,
    Sell,
    Neutral,
    Buy,
    StrongBuy,
}

impl Recommendation {
    /// Maps an aggregate score in `[-1, 1]` onto a label.
    ///
    /// Bands: `[-1, -0.5)` strong sell, `[-0.5, -0.1)` sell, `[-0.1, 0.1]` neutral,
    /// `(0.1, 0.5]` buy, `(0.5, 1]` strong buy. Anything else is `None`.
    #[must_use]
    pub fn from_score(value: f64) -> Option<Self> {
        if (-1.0..-0.5).contains(&value) {
            Some(Self::StrongSell)
        } else if (-0.5..-0.1).contains(&value) {
            Some(Self::Sell)
        } else if (-0.1..=0.1).contains(&value) {
            Some(Self::Neutral)
        } else if value > 0.1 && value <= 0.5 {
            Some(Self::Buy)
        } else if value > 0.5 && value <= 1.0 {
            Some(Self::StrongBuy)
        } else {
            None
        }
    }

    /// The upper-case label used by the screener, e.g. `STRONG_BUY`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongSell => "STRONG_SELL",
            Self::Sell => "SELL",
            Self::Neutral => "NEUTRAL",
            Self::Buy => "BUY",
            Self::StrongBuy => "STRONG_BUY",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value in a [`TechnicalSummary`], looked up by indicator name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Text(String),
    Number(f64),
}

/// Technical-analysis summary for one (symbol, exchange, timeframe).
///
/// Holds the overall recommendation plus the number of indicators voting buy, sell
/// or neutral across oscillators and moving averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalSummary {
    #[serde(rename = "RECOMMENDATION")]
    pub recommendation: Recommendation,
    #[serde(rename = "BUY")]
    pub buy: u32,
    #[serde(rename = "SELL")]
    pub sell: u32,
    #[serde(rename = "NEUTRAL")]
    pub neutral: u32,
}

impl TechnicalSummary {
    /// Indicator names present in every summary, in display order.
    pub const FIELDS: [&'static str; 4] = ["RECOMMENDATION", "BUY", "SELL", "NEUTRAL"];

    /// Looks up a value by indicator name (case-sensitive, as listed in [`Self::FIELDS`]).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SummaryValue> {
        match name {
            "RECOMMENDATION" => Some(SummaryValue::Text(self.recommendation.as_str().into())),
            "BUY" => Some(SummaryValue::Number(f64::from(self.buy))),
            "SELL" => Some(SummaryValue::Number(f64::from(self.sell))),
            "NEUTRAL" => Some(SummaryValue::Number(f64::from(self.neutral))),
            _ => None,
        }
    }
}

/// One row of the aggregated technical report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    /// The symbol this row belongs to.
    #[serde(rename = "Index")]
    pub index: String,
    /// Display name of the timeframe, e.g. `1 hour`.
    #[serde(rename = "Interval")]
    pub interval: String,
    /// The exchange that produced the summary.
    #[serde(rename = "Exchange")]
    pub exchange: String,
    #[serde(flatten)]
    pub summary: TechnicalSummary,
    /// Latest close, set by [`PriceEnricher`](crate::history::PriceEnricher).
    #[serde(rename = "Closing Price")]
    pub closing_price: Option<f64>,
}

/// Technical report for one symbol: one row per configured timeframe, in configured order.
///
/// Rows are unique by `(index, interval)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregatedReport {
    rows: Vec<AggregatedRow>,
}

impl AggregatedReport {
    /// Builds a report, rejecting duplicate `(index, interval)` keys.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::Data`] naming the first duplicated key.
    pub fn from_rows(rows: Vec<AggregatedRow>) -> Result<Self, SnapError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert((row.index.as_str(), row.interval.as_str())) {
                return Err(SnapError::Data(format!(
                    "duplicate report row ({}, {})",
                    row.index, row.interval
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Returns the row for `(index, interval)`, if present.
    #[must_use]
    pub fn get(&self, index: &str, interval: &str) -> Option<&AggregatedRow> {
        self.rows
            .iter()
            .find(|r| r.index == index && r.interval == interval)
    }

    #[must_use]
    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregatedRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<AggregatedRow> {
        self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::IterMut<'_, AggregatedRow> {
        self.rows.iter_mut()
    }
}

impl<'a> IntoIterator for &'a AggregatedReport {
    type Item = &'a AggregatedRow;
    type IntoIter = std::slice::Iter<'a, AggregatedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
