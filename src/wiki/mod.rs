//! Encyclopedia summaries and the page-name resolution strategy.
//!
//! Internals are split into:
//! - `api`:      one summary request for one page name
//! - `variants`: the ordered candidate rules used when only a company name is known

mod api;
mod model;
pub mod variants;
mod wire;

pub use model::EncyclopediaSummary;
pub use variants::{PAGE_VARIANTS, PageVariant};

use tracing::{debug, warn};

use crate::core::{InsightsClient, Lookup};

/// Fetches the summary of exactly one page, keeping the reason for a miss.
pub async fn summary(client: &InsightsClient, page: &str) -> Lookup<EncyclopediaSummary> {
    api::fetch_summary(client, page).await.into()
}

/// Resolves a company to its encyclopedia summary.
///
/// A missing page, a transport failure and a malformed body all count as a miss; the
/// resolver only ever answers [`Lookup::Found`] or [`Lookup::NotFound`]. Transient
/// failures are still logged at `warn`.
pub struct WikiResolver {
    client: InsightsClient,
}

impl WikiResolver {
    pub fn new(client: &InsightsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Picks the mode: an explicit page name wins, otherwise the company name is expanded.
    pub async fn resolve(
        &self,
        page_name: Option<&str>,
        company_name: Option<&str>,
    ) -> Lookup<EncyclopediaSummary> {
        match (page_name, company_name) {
            (Some(page), _) => self.by_page_name(page).await,
            (None, Some(company)) => self.by_company_name(company).await,
            (None, None) => Lookup::NotFound,
        }
    }

    /// Single lookup of an explicit page name.
    #[tracing::instrument(skip(self))]
    pub async fn by_page_name(&self, page: &str) -> Lookup<EncyclopediaSummary> {
        self.attempt(page).await
    }

    /// Tries the name verbatim, then each [`PAGE_VARIANTS`] rule, stopping at the first hit.
    #[tracing::instrument(skip(self))]
    pub async fn by_company_name(&self, company: &str) -> Lookup<EncyclopediaSummary> {
        for candidate in variants::candidates(company) {
            if let Lookup::Found(s) = self.attempt(&candidate).await {
                debug!(page = %candidate, "resolved encyclopedia page");
                return Lookup::Found(s);
            }
        }
        debug!("no page-name variant matched");
        Lookup::NotFound
    }

    async fn attempt(&self, page: &str) -> Lookup<EncyclopediaSummary> {
        match summary(&self.client, page).await {
            Lookup::Found(s) => Lookup::Found(s),
            Lookup::NotFound => {
                debug!(page, "no such page");
                Lookup::NotFound
            }
            Lookup::Failed(e) => {
                warn!(page, error = %e, "summary lookup failed");
                Lookup::NotFound
            }
        }
    }
}
