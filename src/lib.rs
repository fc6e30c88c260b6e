//! coreinsights: company overview reports from three public data sources.
//!
//! A [`Report`] combines a stock quote (Twelve Data), recent news (NewsAPI) and an
//! encyclopedia summary (Wikipedia) for one company. Every section is optional; a
//! provider that fails or has nothing to say leaves its section empty instead of
//! failing the report.
//!
//! ```no_run
//! # use coreinsights::{InsightsClientBuilder, ReportBuilder};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = InsightsClientBuilder::from_env().build()?;
//! let report = ReportBuilder::new(&client).ticker("AAPL").fetch().await?;
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod presets;
pub mod quote;
pub mod report;
pub mod session;
pub mod wiki;

pub use crate::core::{InsightsClient, InsightsClientBuilder, InsightsError, Lookup};
pub use news::{NewsArticle, NewsBuilder};
pub use presets::Preset;
pub use quote::{QuoteBuilder, QuoteRecord};
pub use report::{CompanyIdentity, Report, ReportBuilder, ReportRequest};
pub use session::Session;
pub use wiki::{EncyclopediaSummary, WikiResolver};
