use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SnapError {
    /// An error occurred during an HTTP request (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The indicator screener has no row for the symbol on the given exchange.
    #[error("symbol {symbol} not listed on {exchange}")]
    SymbolNotFound {
        /// The requested symbol.
        symbol: String,
        /// The exchange that was queried.
        exchange: String,
    },

    /// The symbol could not be resolved on any configured exchange for a required timeframe.
    ///
    /// A single unresolved timeframe invalidates the whole technical report.
    #[error("symbol {symbol} not found on any configured exchange for timeframe '{timeframe}'")]
    NotFound {
        /// The requested symbol.
        symbol: String,
        /// Display name of the timeframe that failed to resolve.
        timeframe: String,
    },

    /// No closing price could be obtained to enrich the technical report.
    #[error("no price history available for {symbol}: {reason}")]
    Enrichment {
        /// The requested symbol.
        symbol: String,
        /// What went wrong while fetching or reading the price series.
        reason: String,
    },

    /// The news provider could not deliver a usable response.
    #[error("news unavailable: {0}")]
    NewsUnavailable(String),

    /// The requested symbol is empty or otherwise unusable.
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A polarity lexicon could not be read or parsed.
    #[error("lexicon error: {0}")]
    Lexicon(String),
}
