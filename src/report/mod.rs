//! Report assembly: one quote, one news search and one encyclopedia resolution,
//! merged into a [`Report`].
//!
//! Only missing input is an error. Every provider miss leaves its section empty.

mod export;
mod model;

pub use model::{CompanyIdentity, GENERATED_AT_FORMAT, NOT_AVAILABLE, Report, UNKNOWN_COMPANY};

use chrono::{Local, NaiveDateTime, Timelike};

use crate::{
    core::{InsightsClient, InsightsError},
    news::{DEFAULT_NEWS_COUNT, NewsArticle, NewsBuilder},
    quote::{QuoteBuilder, QuoteRecord},
    wiki::{EncyclopediaSummary, WikiResolver},
};

/// The user's search inputs. Blank strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub page_name: Option<String>,
    pub news_count: u32,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            ticker: None,
            company_name: None,
            page_name: None,
            news_count: DEFAULT_NEWS_COUNT,
        }
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ReportRequest {
    /// Trims every field, drops blanks and uppercases the ticker.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            ticker: non_blank(self.ticker).map(|t| t.to_uppercase()),
            company_name: non_blank(self.company_name),
            page_name: non_blank(self.page_name),
            news_count: self.news_count,
        }
    }

    /// `true` when no identifying field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticker.is_none() && self.company_name.is_none() && self.page_name.is_none()
    }
}

/// A builder for generating a company [`Report`].
pub struct ReportBuilder {
    client: InsightsClient,
    request: ReportRequest,
}

impl ReportBuilder {
    pub fn new(client: &InsightsClient) -> Self {
        Self::from_request(client, ReportRequest::default())
    }

    pub fn from_request(client: &InsightsClient, request: ReportRequest) -> Self {
        Self {
            client: client.clone(),
            request,
        }
    }

    /// Ticker symbol to quote (case-insensitive).
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.request.ticker = Some(ticker.into());
        self
    }

    /// Company name used for news and, lacking a page name, encyclopedia resolution.
    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.request.company_name = Some(name.into());
        self
    }

    /// Exact encyclopedia page name; disables variant guessing.
    #[must_use]
    pub fn page_name(mut self, page: impl Into<String>) -> Self {
        self.request.page_name = Some(page.into());
        self
    }

    /// Maximum number of news articles.
    #[must_use]
    pub const fn news_count(mut self, count: u32) -> Self {
        self.request.news_count = count;
        self
    }

    /// Runs the lookups one after another and assembles the report.
    ///
    /// A ticker's quote name becomes the working company name when none was given, so the
    /// quote is fetched first, then news, then the encyclopedia summary.
    ///
    /// # Errors
    ///
    /// Returns [`InsightsError::MissingSearchInput`] if the ticker, company name and page
    /// name are all blank. Provider failures never surface here.
    #[tracing::instrument(skip(self), fields(request = ?self.request))]
    pub async fn fetch(self) -> Result<Report, InsightsError> {
        let request = self.request.normalized();
        if request.is_empty() {
            return Err(InsightsError::MissingSearchInput);
        }
        let client = &self.client;

        let quote = match request.ticker.as_deref() {
            Some(ticker) => QuoteBuilder::new(client, ticker)
                .fetch()
                .await
                .logged("quote", ticker),
            None => None,
        };

        let working_name = request
            .company_name
            .clone()
            .or_else(|| quote.as_ref().map(|q| q.name.clone()));

        let news = match working_name.as_deref() {
            Some(name) => NewsBuilder::new(client, name)
                .count(request.news_count)
                .fetch()
                .await
                .logged("news", name)
                .unwrap_or_default(),
            None => Vec::new(),
        };

        let wikipedia = WikiResolver::new(client)
            .resolve(request.page_name.as_deref(), working_name.as_deref())
            .await
            .into_option();

        Ok(assemble(&request, quote, news, wikipedia, now_to_the_second()))
    }
}

fn now_to_the_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn assemble(
    request: &ReportRequest,
    stock: Option<QuoteRecord>,
    news: Vec<NewsArticle>,
    wikipedia: Option<EncyclopediaSummary>,
    generated_at: NaiveDateTime,
) -> Report {
    let company = CompanyIdentity {
        name: stock
            .as_ref()
            .map(|q| q.name.clone())
            .or_else(|| request.company_name.clone())
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        ticker: stock
            .as_ref()
            .map(|q| q.symbol.clone())
            .or_else(|| request.ticker.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        exchange: stock
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |q| q.exchange.clone()),
    };

    Report {
        company,
        stock,
        news,
        wikipedia,
        generated_at,
    }
}
