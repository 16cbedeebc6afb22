//! Public client surface + builder.
//! Defaults (UA, endpoints, timeouts) live in `constants`.

mod constants;

use crate::core::SnapError;
use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_NEWS, DEFAULT_BASE_SCANNER, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the three upstream providers a snapshot depends on.
///
/// `SnapClient` implements [`IndicatorService`](crate::core::IndicatorService),
/// [`PriceHistoryService`](crate::core::PriceHistoryService) and
/// [`NewsService`](crate::core::NewsService). It is cheap to clone; clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SnapClient {
    http: Client,
    base_scanner: Url,
    base_chart: Url,
    base_news: Url,
    news_token: Option<String>,
}

impl SnapClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> SnapClientBuilder {
        SnapClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) const fn base_scanner(&self) -> &Url {
        &self.base_scanner
    }
    pub(crate) const fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) const fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn news_token(&self) -> Option<&str> {
        self.news_token.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`SnapClient`].
#[derive(Default, Debug)]
pub struct SnapClientBuilder {
    user_agent: Option<String>,
    base_scanner: Option<Url>,
    base_chart: Option<Url>,
    base_news: Option<Url>,
    news_token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SnapClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the scanner base (e.g., `https://scanner.tradingview.com/`).
    #[must_use]
    pub fn base_scanner(mut self, url: Url) -> Self {
        self.base_scanner = Some(url);
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the news API base (e.g., `https://gnews.io/api/v4/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// API token sent to the news search endpoint.
    #[must_use]
    pub fn news_token(mut self, token: impl Into<String>) -> Self {
        self.news_token = Some(token.into());
        self
    }

    /// Set the overall per-request timeout. Default: 10 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 5 seconds.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse, a timeout is zero, or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<SnapClient, SnapError> {
        let base_scanner = match self.base_scanner {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SCANNER)?,
        };
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if timeout.is_zero() || connect_timeout.is_zero() {
            return Err(SnapError::Config("timeouts must be non-zero".into()));
        }

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(SnapClient {
            http,
            base_scanner,
            base_chart,
            base_news,
            news_token: self.news_token,
        })
    }
}
