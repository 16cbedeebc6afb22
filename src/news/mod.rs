mod api;
mod model;
mod wire;

pub use model::NewsArticle;

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Defaults applied when building a [`NewsQuery`] for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsSettings {
    /// Maximum number of articles to request.
    pub max_results: u32,
    /// Two-letter language code.
    pub language: String,
    /// How many days back the search window starts.
    pub lookback_days: u64,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            max_results: 50,
            language: "en".into(),
            lookback_days: 1,
        }
    }
}

/// A title search over a closed date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsQuery {
    pub query: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub language: String,
    pub max_results: u32,
}

impl NewsQuery {
    /// Searches titles mentioning `symbol` from `lookback_days` before `today` up to `today`.
    #[must_use]
    pub fn for_symbol(symbol: &str, today: NaiveDate, settings: &NewsSettings) -> Self {
        let from = today
            .checked_sub_days(Days::new(settings.lookback_days))
            .unwrap_or(NaiveDate::MIN);
        Self {
            query: symbol.to_string(),
            from,
            to: today,
            language: settings.language.clone(),
            max_results: settings.max_results,
        }
    }
}

/// Non-empty titles, in response order.
#[must_use]
pub fn headlines(articles: &[NewsArticle]) -> Vec<String> {
    articles
        .iter()
        .map(|a| a.title.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
