use percent_encoding::percent_decode_str;
use reqwest::header::ACCEPT;

use crate::{
    core::{InsightsClient, InsightsError, net},
    wiki::{model::EncyclopediaSummary, wire},
};

pub(super) async fn fetch_summary(
    client: &InsightsClient,
    page: &str,
) -> Result<Option<EncyclopediaSummary>, InsightsError> {
    // names copied from a page URL arrive encoded; `push` encodes again
    let page = percent_decode_str(page).decode_utf8_lossy();
    let mut url = client.base_wiki().clone();
    url.path_segments_mut()
        .map_err(|()| {
            InsightsError::InvalidParams(format!(
                "base_wiki cannot be a base: {}",
                client.base_wiki()
            ))
        })?
        .pop_if_empty()
        .push(&page);

    let resp = client
        .http()
        .get(url.clone())
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(net::status_error(status, url.as_str()));
    }

    let body = net::get_text(resp, "wiki_summary", &page).await?;
    let envelope: wire::SummaryEnvelope = serde_json::from_str(&body)?;
    normalize(envelope).map(Some)
}

pub(super) fn normalize(env: wire::SummaryEnvelope) -> Result<EncyclopediaSummary, InsightsError> {
    let title = env
        .title
        .ok_or_else(|| InsightsError::Data("summary: missing `title`".into()))?;
    let url = env
        .content_urls
        .and_then(|c| c.desktop)
        .and_then(|d| d.page)
        .ok_or_else(|| InsightsError::Data("summary: missing `content_urls.desktop.page`".into()))?;

    Ok(EncyclopediaSummary {
        title,
        description: env.description.unwrap_or_default(),
        extract: env.extract.unwrap_or_default(),
        url,
    })
}
