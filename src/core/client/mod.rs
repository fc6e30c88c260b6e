//! Public client surface + builder.
//! Defaults for endpoints and UA live in `constants`.

mod constants;

use crate::core::InsightsError;
use constants::{
    DEFAULT_BASE_NEWS, DEFAULT_BASE_QUOTE, DEFAULT_BASE_WIKI, DEFAULT_NEWS_LANGUAGE,
    ENV_NEWS_API_KEY, ENV_QUOTE_API_KEY, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client plus the endpoints and keys of the three providers.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct InsightsClient {
    http: Client,
    base_quote: Url,
    base_news: Url,
    base_wiki: Url,

    quote_api_key: Option<String>,
    news_api_key: Option<String>,
    news_language: String,
}

impl Default for InsightsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl InsightsClient {
    /// Create a new builder.
    pub fn builder() -> InsightsClientBuilder {
        InsightsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_wiki(&self) -> &Url {
        &self.base_wiki
    }
    pub(crate) fn quote_api_key(&self) -> Option<&str> {
        self.quote_api_key.as_deref()
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
    pub(crate) fn news_language(&self) -> &str {
        &self.news_language
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct InsightsClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_news: Option<Url>,
    base_wiki: Option<Url>,

    quote_api_key: Option<String>,
    news_api_key: Option<String>,
    news_language: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl InsightsClientBuilder {
    /// Seed the provider keys from `TWELVE_DATA_API_KEY` and `NEWS_API_KEY`.
    ///
    /// Unset or empty variables leave the corresponding key unset; explicit
    /// setters called afterwards still win.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            quote_api_key: read(ENV_QUOTE_API_KEY),
            news_api_key: read(ENV_NEWS_API_KEY),
            ..Self::default()
        }
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote endpoint (e.g., `https://api.twelvedata.com/quote`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the news search endpoint (e.g., `https://newsapi.org/v2/everything`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the encyclopedia summary base
    /// (e.g., `https://en.wikipedia.org/api/rest_v1/page/summary/`).
    #[must_use]
    pub fn base_wiki(mut self, url: Url) -> Self {
        self.base_wiki = Some(url);
        self
    }

    /// API key for the quote provider, sent as `Authorization: apikey <key>`.
    #[must_use]
    pub fn quote_api_key(mut self, key: impl Into<String>) -> Self {
        self.quote_api_key = Some(key.into());
        self
    }

    /// API key for the news provider, sent as the `apiKey` query parameter.
    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Language filter for news searches. Default: `en`.
    #[must_use]
    pub fn news_language(mut self, lang: impl Into<String>) -> Self {
        self.news_language = Some(lang.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<InsightsClient, InsightsError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_wiki = match self.base_wiki {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_WIKI)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(InsightsClient {
            http,
            base_quote,
            base_news,
            base_wiki,
            quote_api_key: self.quote_api_key,
            news_api_key: self.news_api_key,
            news_language: self
                .news_language
                .unwrap_or_else(|| DEFAULT_NEWS_LANGUAGE.to_string()),
        })
    }
}
