use serde::Serialize;

/// Placeholder used when the provider sends no description.
pub const NO_DESCRIPTION: &str = "No description";

/// Represents a single news article about a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub title: String,
    /// Short summary, or [`NO_DESCRIPTION`] when the provider omits it.
    pub description: String,
    /// The publisher of the article (e.g., "Reuters").
    pub source: String,
    /// Publication time as the provider's ISO-8601 string.
    pub published_at: String,
    /// A direct link to the article.
    pub url: String,
}
