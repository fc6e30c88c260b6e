use reqwest::header::ACCEPT;

use crate::{
    core::{InsightsClient, InsightsError, net},
    news::{
        model::{NO_DESCRIPTION, NewsArticle},
        wire,
    },
};

const UNKNOWN_SOURCE: &str = "Unknown";

pub(super) async fn fetch_news(
    client: &InsightsClient,
    query: &str,
    count: u32,
    language: &str,
) -> Result<Vec<NewsArticle>, InsightsError> {
    let mut url = client.base_news().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", query)
            .append_pair("sortBy", "publishedAt")
            .append_pair("pageSize", &count.to_string())
            .append_pair("language", language);
        if let Some(key) = client.news_api_key() {
            qp.append_pair("apiKey", key);
        }
    }

    let resp = client
        .http()
        .get(url.clone())
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    let status = resp.status();
    let body = net::get_text(resp, "news", query).await?;

    // NewsAPI reports failures as a JSON error body on a non-2xx status; prefer its message.
    let parsed = serde_json::from_str::<wire::NewsEnvelope>(&body);
    match parsed {
        Ok(env) if status.is_success() || env.status.as_deref() == Some("error") => {
            normalize(env, count as usize)
        }
        Err(e) if status.is_success() => Err(e.into()),
        _ => {
            // the query carries the API key
            let mut public = url;
            public.set_query(None);
            Err(net::status_error(status, public.as_str()))
        }
    }
}

pub(super) fn normalize(
    env: wire::NewsEnvelope,
    count: usize,
) -> Result<Vec<NewsArticle>, InsightsError> {
    if env.status.as_deref() == Some("error") {
        return Err(InsightsError::Provider {
            code: env.code,
            message: env.message.unwrap_or_default(),
        });
    }

    Ok(env
        .articles
        .into_iter()
        .map(|raw| NewsArticle {
            title: raw.title.unwrap_or_default(),
            description: raw
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            source: raw
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            published_at: raw.published_at.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        })
        .take(count)
        .collect())
}
