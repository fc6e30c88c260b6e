//! Centralized constants for default endpoints and UA.

/// Wikipedia asks API clients to identify themselves with a descriptive UA.
pub(crate) const USER_AGENT: &str = concat!(
    "CoreInsights/",
    env!("CARGO_PKG_VERSION"),
    " (company overview reports; reqwest)"
);

/// Twelve Data quote endpoint (`?symbol=` is appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://api.twelvedata.com/quote";

/// NewsAPI "everything" search endpoint.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

/// Wikipedia REST summary base (page name is appended as a path segment).
pub(crate) const DEFAULT_BASE_WIKI: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";

/// Language filter sent to the news provider.
pub(crate) const DEFAULT_NEWS_LANGUAGE: &str = "en";

/// Environment variable holding the quote provider key.
pub(crate) const ENV_QUOTE_API_KEY: &str = "TWELVE_DATA_API_KEY";

/// Environment variable holding the news provider key.
pub(crate) const ENV_NEWS_API_KEY: &str = "NEWS_API_KEY";
