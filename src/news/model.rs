use chrono::{DateTime, Utc};
use serde::Serialize;

/// A news article returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline. May be empty; empty titles are dropped before scoring.
    pub title: String,
    /// The provider's short description, if any.
    pub description: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// The publisher (e.g. "Reuters").
    pub source: Option<String>,
    /// When the article was published.
    pub published_at: Option<DateTime<Utc>>,
}
