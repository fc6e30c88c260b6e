use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::{news::NewsArticle, quote::QuoteRecord, wiki::EncyclopediaSummary};

/// Placeholder company name when neither the caller nor the quote supplies one.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
/// Placeholder for a missing ticker or exchange.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display format of [`Report::generated_at`] in exports.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Who the report is about. Every field is always populated, falling back to placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub ticker: String,
    pub exchange: String,
}

/// A company overview assembled from the quote, news and encyclopedia providers.
///
/// Field order is the export order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Name, ticker and exchange of the company.
    pub company: CompanyIdentity,
    /// Quote snapshot, absent when no ticker was given or the lookup missed.
    pub stock: Option<QuoteRecord>,
    /// Recent articles, most recent first. Empty when none were found.
    pub news: Vec<NewsArticle>,
    /// Encyclopedia summary, absent when no page could be resolved.
    pub wikipedia: Option<EncyclopediaSummary>,
    /// Local time the report was generated, to the second.
    #[serde(serialize_with = "serialize_generated_at")]
    pub generated_at: NaiveDateTime,
}

fn serialize_generated_at<S: Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&at.format(GENERATED_AT_FORMAT))
}

impl Report {
    /// `true` if at least one of the quote, news or encyclopedia sections has data.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.stock.is_some() || !self.news.is_empty() || self.wikipedia.is_some()
    }
}
