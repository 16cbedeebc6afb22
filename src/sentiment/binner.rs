use std::fmt;

use serde::Serialize;

use crate::sentiment::SentimentScore;

/// Ordered sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SentimentCategory {
    Negative,
    Neutral,
    Positive,
}

impl SentimentCategory {
    /// All categories in ascending order.
    pub const ALL: [Self; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline count per category. Every category is present, possibly with zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Positive")]
    pub positive: usize,
}

impl SentimentSummary {
    #[must_use]
    pub fn from_categories(categories: &[SentimentCategory]) -> Self {
        let mut s = Self::default();
        for c in categories {
            match c {
                SentimentCategory::Negative => s.negative += 1,
                SentimentCategory::Neutral => s.neutral += 1,
                SentimentCategory::Positive => s.positive += 1,
            }
        }
        s
    }

    #[must_use]
    pub const fn count(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Negative => self.negative,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Positive => self.positive,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }

    /// `(category, count)` pairs in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentCategory, usize)> + '_ {
        SentimentCategory::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
    }
}

/// How compound scores are mapped onto categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum BinningStrategy {
    /// Three equal-width bins over the batch's observed compound range.
    #[default]
    BatchRelative,
    /// Absolute cutoffs: below `lower` is negative, above `upper` is positive.
    Fixed { lower: f64, upper: f64 },
}

/// The binning actually applied to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Binning {
    /// Right-closed bins `(e0,e1] (e1,e2] (e2,e3]` derived from the batch.
    Relative { edges: [f64; 4] },
    /// The batch had no spread (empty, single score, or all equal); everything is neutral.
    Degenerate,
    Fixed { lower: f64, upper: f64 },
}

/// Per-headline categories plus their counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binned {
    pub categories: Vec<SentimentCategory>,
    pub summary: SentimentSummary,
    pub binning: Binning,
}

/// Bin edges for the batch, or `None` when the range is a single point (or empty).
///
/// The lowest edge is pulled down by 0.1% of the range so the minimum falls inside
/// the first, right-closed bin.
#[must_use]
pub fn relative_edges(compounds: &[f64]) -> Option<[f64; 4]> {
    let (min, max) = compounds
        .iter()
        .filter(|c| c.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, &c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })?;

    let span = max - min;
    if span <= 0.0 {
        return None;
    }
    let step = span / 3.0;
    Some([min - span * 0.001, min + step, min + 2.0 * step, max])
}

fn bin(value: f64, edges: &[f64; 4]) -> SentimentCategory {
    if !value.is_finite() {
        SentimentCategory::Neutral
    } else if value <= edges[1] {
        SentimentCategory::Negative
    } else if value <= edges[2] {
        SentimentCategory::Neutral
    } else {
        SentimentCategory::Positive
    }
}

fn threshold(value: f64, lower: f64, upper: f64) -> SentimentCategory {
    if value < lower {
        SentimentCategory::Negative
    } else if value > upper {
        SentimentCategory::Positive
    } else {
        SentimentCategory::Neutral
    }
}

/// Assigns each score a [`SentimentCategory`] and counts them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentBinner {
    strategy: BinningStrategy,
}

impl SentimentBinner {
    #[must_use]
    pub const fn new(strategy: BinningStrategy) -> Self {
        Self { strategy }
    }

    /// Categorizes every score by its compound value, preserving order.
    ///
    /// With the batch-relative strategy a degenerate batch (no spread) puts every
    /// headline in [`SentimentCategory::Neutral`].
    #[must_use]
    pub fn summarize(&self, scores: &[SentimentScore]) -> Binned {
        let compounds: Vec<f64> = scores.iter().map(|s| s.compound).collect();

        let (categories, binning) = match self.strategy {
            BinningStrategy::BatchRelative => match relative_edges(&compounds) {
                Some(edges) => (
                    compounds.iter().map(|c| bin(*c, &edges)).collect(),
                    Binning::Relative { edges },
                ),
                None => {
                    if !compounds.is_empty() {
                        tracing::debug!(
                            headlines = compounds.len(),
                            "degenerate sentiment range, all neutral"
                        );
                    }
                    (
                        vec![SentimentCategory::Neutral; compounds.len()],
                        Binning::Degenerate,
                    )
                }
            },
            BinningStrategy::Fixed { lower, upper } => (
                compounds
                    .iter()
                    .map(|c| threshold(*c, lower, upper))
                    .collect(),
                Binning::Fixed { lower, upper },
            ),
        };

        let summary = SentimentSummary::from_categories(&categories);
        Binned {
            categories,
            summary,
            binning,
        }
    }
}
