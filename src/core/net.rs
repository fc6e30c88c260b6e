use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::core::InsightsError;

/// Read the response body as text, logging its size against the endpoint it came from.
pub(crate) async fn get_text(
    resp: Response,
    endpoint: &str,
    key: &str,
) -> Result<String, reqwest::Error> {
    let status = resp.status();
    let text = resp.text().await?;
    debug!(
        endpoint,
        key,
        status = status.as_u16(),
        bytes = text.len(),
        "received response body"
    );
    Ok(text)
}

/// Maps a non-success HTTP status to the matching error variant.
pub(crate) fn status_error(status: StatusCode, url: &str) -> InsightsError {
    let url = url.to_string();
    match status.as_u16() {
        404 => InsightsError::NotFound { url },
        code => InsightsError::Status { status: code, url },
    }
}
