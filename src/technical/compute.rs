//! Turns raw screener columns into a [`TechnicalSummary`].
//!
//! Each oscillator and moving average casts one vote (buy, sell or neutral). Indicators
//! whose inputs are missing from the response do not vote. The overall label comes from
//! the screener's own aggregate score (`Recommend.All`).

use std::collections::HashMap;

use crate::core::SnapError;
use crate::technical::{Recommendation, TechnicalSummary};

/// Columns requested from the screener, without interval suffix.
pub(crate) const COLUMNS: &[&str] = &[
    "Recommend.Other",
    "Recommend.All",
    "Recommend.MA",
    "RSI",
    "RSI[1]",
    "Stoch.K",
    "Stoch.D",
    "Stoch.K[1]",
    "Stoch.D[1]",
    "CCI20",
    "CCI20[1]",
    "ADX",
    "ADX+DI",
    "ADX-DI",
    "ADX+DI[1]",
    "ADX-DI[1]",
    "AO",
    "AO[1]",
    "AO[2]",
    "Mom",
    "Mom[1]",
    "MACD.macd",
    "MACD.signal",
    "Rec.Stoch.RSI",
    "Rec.WR",
    "Rec.BBPower",
    "Rec.UO",
    "close",
    "EMA10",
    "SMA10",
    "EMA20",
    "SMA20",
    "EMA30",
    "SMA30",
    "EMA50",
    "SMA50",
    "EMA100",
    "SMA100",
    "EMA200",
    "SMA200",
    "Rec.Ichimoku",
    "Rec.VWMA",
    "Rec.HullMA9",
];

const MOVING_AVERAGES: &[&str] = &[
    "EMA10", "SMA10", "EMA20", "SMA20", "EMA30", "SMA30", "EMA50", "SMA50", "EMA100", "SMA100",
    "EMA200", "SMA200",
];

const REC_OSCILLATORS: &[&str] = &["Rec.Stoch.RSI", "Rec.WR", "Rec.BBPower", "Rec.UO"];
const REC_MOVING_AVERAGES: &[&str] = &["Rec.Ichimoku", "Rec.VWMA", "Rec.HullMA9"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    Buy,
    Sell,
    Neutral,
}

/// Column values keyed by base column name.
pub(crate) type Columns = HashMap<&'static str, f64>;

/// Pairs the requested column names with the screener's positional values.
///
/// # Errors
///
/// Fails when the number of values does not match the number of requested columns.
pub(crate) fn zip_columns(values: &[Option<f64>]) -> Result<Columns, SnapError> {
    if values.len() != COLUMNS.len() {
        return Err(SnapError::Data(format!(
            "expected {} indicator values, got {}",
            COLUMNS.len(),
            values.len()
        )));
    }
    Ok(COLUMNS
        .iter()
        .zip(values)
        .filter_map(|(name, v)| match v {
            Some(x) if x.is_finite() => Some((*name, *x)),
            _ => None,
        })
        .collect())
}

pub(crate) fn moving_average(ma: f64, close: f64) -> Signal {
    if ma < close {
        Signal::Buy
    } else if ma > close {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn rsi(rsi: f64, rsi1: f64) -> Signal {
    if rsi < 30.0 && rsi1 < rsi {
        Signal::Buy
    } else if rsi > 70.0 && rsi1 > rsi {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn stoch(k: f64, d: f64, k1: f64, d1: f64) -> Signal {
    if k < 20.0 && d < 20.0 && k > d && k1 < d1 {
        Signal::Buy
    } else if k > 80.0 && d > 80.0 && k < d && k1 > d1 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn cci20(cci: f64, cci1: f64) -> Signal {
    if cci < -100.0 && cci > cci1 {
        Signal::Buy
    } else if cci > 100.0 && cci < cci1 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn adx(adx: f64, pdi: f64, ndi: f64, pdi1: f64, ndi1: f64) -> Signal {
    if adx > 20.0 && pdi1 < ndi1 && pdi > ndi {
        Signal::Buy
    } else if adx > 20.0 && pdi1 > ndi1 && pdi < ndi {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn awesome_oscillator(ao: f64, ao1: f64, ao2: f64) -> Signal {
    if (ao > 0.0 && ao1 < 0.0) || (ao > 0.0 && ao1 > 0.0 && ao > ao1 && ao2 > ao1) {
        Signal::Buy
    } else if (ao < 0.0 && ao1 > 0.0) || (ao < 0.0 && ao1 < 0.0 && ao < ao1 && ao2 < ao1) {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

pub(crate) fn momentum(mom: f64, mom1: f64) -> Signal {
    if mom < mom1 {
        Signal::Sell
    } else if mom > mom1 {
        Signal::Buy
    } else {
        Signal::Neutral
    }
}

pub(crate) fn macd(macd: f64, signal: f64) -> Signal {
    if macd > signal {
        Signal::Buy
    } else if macd < signal {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Screener `Rec.*` columns are already -1/0/1 votes.
pub(crate) fn simple(value: f64) -> Signal {
    if value == -1.0 {
        Signal::Sell
    } else if value == 1.0 {
        Signal::Buy
    } else {
        Signal::Neutral
    }
}

fn get<const N: usize>(cols: &Columns, names: [&str; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = *cols.get(name)?;
    }
    Some(out)
}

fn oscillator_votes(cols: &Columns) -> Vec<Signal> {
    let mut votes = Vec::with_capacity(11);
    if let Some([a, b]) = get(cols, ["RSI", "RSI[1]"]) {
        votes.push(rsi(a, b));
    }
    if let Some([k, d, k1, d1]) = get(cols, ["Stoch.K", "Stoch.D", "Stoch.K[1]", "Stoch.D[1]"]) {
        votes.push(stoch(k, d, k1, d1));
    }
    if let Some([a, b]) = get(cols, ["CCI20", "CCI20[1]"]) {
        votes.push(cci20(a, b));
    }
    if let Some([a, p, n, p1, n1]) =
        get(cols, ["ADX", "ADX+DI", "ADX-DI", "ADX+DI[1]", "ADX-DI[1]"])
    {
        votes.push(adx(a, p, n, p1, n1));
    }
    if let Some([a, a1, a2]) = get(cols, ["AO", "AO[1]", "AO[2]"]) {
        votes.push(awesome_oscillator(a, a1, a2));
    }
    if let Some([m, m1]) = get(cols, ["Mom", "Mom[1]"]) {
        votes.push(momentum(m, m1));
    }
    if let Some([m, s]) = get(cols, ["MACD.macd", "MACD.signal"]) {
        votes.push(macd(m, s));
    }
    votes.extend(
        REC_OSCILLATORS
            .iter()
            .filter_map(|n| cols.get(n))
            .map(|v| simple(*v)),
    );
    votes
}

fn moving_average_votes(cols: &Columns) -> Vec<Signal> {
    let mut votes = Vec::with_capacity(15);
    if let Some(close) = cols.get("close") {
        votes.extend(
            MOVING_AVERAGES
                .iter()
                .filter_map(|n| cols.get(n))
                .map(|ma| moving_average(*ma, *close)),
        );
    }
    votes.extend(
        REC_MOVING_AVERAGES
            .iter()
            .filter_map(|n| cols.get(n))
            .map(|v| simple(*v)),
    );
    votes
}

/// Computes the summary from zipped screener columns.
///
/// # Errors
///
/// Fails with [`SnapError::Data`] when the aggregate score is missing or out of range.
pub(crate) fn summarize(cols: &Columns) -> Result<TechnicalSummary, SnapError> {
    let score = cols
        .get("Recommend.All")
        .copied()
        .ok_or_else(|| SnapError::Data("missing Recommend.All".into()))?;
    let recommendation = Recommendation::from_score(score)
        .ok_or_else(|| SnapError::Data(format!("recommendation score out of range: {score}")))?;

    let mut summary = TechnicalSummary {
        recommendation,
        buy: 0,
        sell: 0,
        neutral: 0,
    };
    for vote in oscillator_votes(cols)
        .into_iter()
        .chain(moving_average_votes(cols))
    {
        match vote {
            Signal::Buy => summary.buy += 1,
            Signal::Sell => summary.sell += 1,
            Signal::Neutral => summary.neutral += 1,
        }
    }
    Ok(summary)
}
