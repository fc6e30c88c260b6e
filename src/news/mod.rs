mod api;
mod model;
mod wire;

pub use model::{NO_DESCRIPTION, NewsArticle};

use crate::core::{InsightsClient, InsightsError, Lookup};

/// Default number of articles requested.
pub const DEFAULT_NEWS_COUNT: u32 = 5;
/// Largest page the news provider accepts.
pub const MAX_NEWS_COUNT: u32 = 100;

/// A builder for searching recent news articles about a company.
pub struct NewsBuilder {
    client: InsightsClient,
    query: String,
    count: u32,
    language: Option<String>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a search query (usually a company name).
    pub fn new(client: &InsightsClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into().trim().to_string(),
            count: DEFAULT_NEWS_COUNT,
            language: None,
        }
    }

    /// Sets the maximum number of news articles to return (clamped to `1..=100`).
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count.clamp(1, MAX_NEWS_COUNT);
        self
    }

    /// Overrides the client's language filter for this search.
    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }

    /// Executes the search, most recent first.
    ///
    /// The result never holds more than the requested count. An error payload from
    /// the provider or a failed call yields [`Lookup::Failed`]; callers that only
    /// want the articles can use `into_option().unwrap_or_default()`.
    #[tracing::instrument(skip(self), fields(query = %self.query, count = self.count))]
    pub async fn fetch(self) -> Lookup<Vec<NewsArticle>> {
        if self.query.is_empty() {
            return Lookup::Failed(InsightsError::InvalidParams(
                "news: query must not be empty".into(),
            ));
        }
        let language = self
            .language
            .as_deref()
            .unwrap_or_else(|| self.client.news_language());
        api::fetch_news(&self.client, &self.query, self.count, language)
            .await
            .map(Some)
            .into()
    }
}
