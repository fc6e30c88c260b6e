use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::{
    core::{
        InsightsClient, InsightsError, net,
        wire::{optional_f64, required_f64},
    },
    quote::{model::QuoteRecord, wire},
};

pub(super) async fn fetch_quote(
    client: &InsightsClient,
    symbol: &str,
) -> Result<Option<QuoteRecord>, InsightsError> {
    let mut url = client.base_quote().clone();
    url.query_pairs_mut().append_pair("symbol", symbol);

    let mut req = client
        .http()
        .get(url.clone())
        .header(ACCEPT, "application/json");
    if let Some(key) = client.quote_api_key() {
        req = req.header(AUTHORIZATION, format!("apikey {key}"));
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(net::status_error(status, url.as_str()));
    }

    let body = net::get_text(resp, "quote", symbol).await?;
    let envelope: wire::QuoteEnvelope = serde_json::from_str(&body)?;
    normalize(envelope)
}

/// `Ok(None)` when the provider has no quote for the symbol.
pub(super) fn normalize(env: wire::QuoteEnvelope) -> Result<Option<QuoteRecord>, InsightsError> {
    if env.status.as_deref() == Some("error") {
        debug!(
            provider_message = env.message.as_deref().unwrap_or(""),
            "quote provider reported an error"
        );
        return Ok(None);
    }
    let Some(symbol) = env.symbol.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let name = env
        .name
        .ok_or_else(|| InsightsError::Data("missing field `name`".into()))?;
    let exchange = env
        .exchange
        .ok_or_else(|| InsightsError::Data("missing field `exchange`".into()))?;

    let price = required_f64(env.close.as_ref(), "close")?;
    let change = required_f64(env.change.as_ref(), "change")?;
    let change_percent = required_f64(env.percent_change.as_ref(), "percent_change")?;
    let high = required_f64(env.high.as_ref(), "high")?;
    let low = required_f64(env.low.as_ref(), "low")?;
    let previous_close = required_f64(env.previous_close.as_ref(), "previous_close")?;

    // high/low were validated above, so both are present
    let day_range = match (&env.low, &env.high) {
        (Some(l), Some(h)) => format!("{} - {}", l.as_text(), h.as_text()),
        _ => format!("{low} - {high}"),
    };

    let (fifty_two_week_high, fifty_two_week_low) = env
        .fifty_two_week
        .map(|w| (optional_f64(w.high.as_ref()), optional_f64(w.low.as_ref())))
        .unwrap_or_default();

    Ok(Some(QuoteRecord {
        symbol,
        name,
        exchange,
        currency: env.currency,
        price,
        change,
        change_percent,
        high,
        low,
        previous_close,
        volume: env.volume.as_ref().and_then(|v| v.to_u64()),
        fifty_two_week_high,
        fifty_two_week_low,
        day_range,
    }))
}
