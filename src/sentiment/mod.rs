//! Headline polarity scoring and category binning.

mod binner;
mod vader;

pub use binner::{
    Binned, Binning, BinningStrategy, SentimentBinner, SentimentCategory, SentimentSummary,
    relative_edges,
};
pub use vader::Vader;

use serde::Serialize;

/// Polarity of one text: proportions in `[0, 1]` plus a normalized compound in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A fixed model mapping text to a [`SentimentScore`].
///
/// Implementations are built once and shared read-only across requests.
pub trait PolarityModel: Send + Sync {
    fn polarity(&self, text: &str) -> SentimentScore;
}

/// Scores a batch of headlines with a [`PolarityModel`].
#[derive(Clone, Copy)]
pub struct SentimentScorer<'a> {
    model: &'a dyn PolarityModel,
}

impl<'a> SentimentScorer<'a> {
    pub fn new(model: &'a dyn PolarityModel) -> Self {
        Self { model }
    }

    /// One score per headline, in input order. Empty input yields an empty vector.
    pub fn score<S: AsRef<str>>(&self, headlines: &[S]) -> Vec<SentimentScore> {
        headlines
            .iter()
            .map(|h| self.model.polarity(h.as_ref()))
            .collect()
    }
}
