//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// TradingView scanner base (screener region and `/scan` are appended).
pub(crate) const DEFAULT_BASE_SCANNER: &str = "https://scanner.tradingview.com/";

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// GNews v4 API base (`search` is appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://gnews.io/api/v4/";

/// Overall per-request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
