use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "totalArticles", default)]
    pub(crate) total_articles: Option<u64>,
    #[serde(default)]
    pub(crate) articles: Option<Vec<Article>>,
    // Error payloads carry a list or a map of messages instead of `articles`.
    #[serde(default)]
    pub(crate) errors: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct Article {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) source: Option<Source>,
}

#[derive(Deserialize)]
pub(crate) struct Source {
    pub(crate) name: Option<String>,
}
