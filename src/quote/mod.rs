mod api;
mod model;
mod wire;

pub use model::QuoteRecord;

use crate::core::{InsightsClient, InsightsError, Lookup};

/// Fetches the quote for `symbol` with default settings.
pub async fn quote(client: &InsightsClient, symbol: impl Into<String>) -> Lookup<QuoteRecord> {
    QuoteBuilder::new(client, symbol).fetch().await
}

/// A builder for fetching the quote snapshot of a single ticker.
pub struct QuoteBuilder {
    client: InsightsClient,
    symbol: String,
}

impl QuoteBuilder {
    /// Creates a new `QuoteBuilder`. The symbol is trimmed and uppercased.
    pub fn new(client: &InsightsClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into().trim().to_uppercase(),
        }
    }

    /// The symbol this builder will request.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Executes the request.
    ///
    /// Never returns an error directly: an error payload or a missing `symbol` field
    /// yields [`Lookup::NotFound`], while transport, status and parse problems yield
    /// [`Lookup::Failed`].
    #[tracing::instrument(skip(self), fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Lookup<QuoteRecord> {
        if self.symbol.is_empty() {
            return Lookup::Failed(InsightsError::InvalidParams(
                "quote: symbol must not be empty".into(),
            ));
        }
        api::fetch_quote(&self.client, &self.symbol).await.into()
    }
}
