use serde::Serialize;

/// Encyclopedia summary of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncyclopediaSummary {
    /// Page title (e.g., `Tesla, Inc.`).
    pub title: String,
    /// One-line description, empty when the page has none.
    pub description: String,
    /// Lead section as plain text.
    pub extract: String,
    /// Canonical desktop URL of the page.
    pub url: String,
}
