use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Provider failures normally never reach the report caller: they are folded into a
/// [`Lookup`](crate::Lookup) and the corresponding report section is left empty. The only
/// error a report request surfaces on its own is [`InsightsError::MissingSearchInput`].
#[derive(Debug, Error)]
pub enum InsightsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an exported report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The provider answered with an error payload (`"status": "error"`).
    #[error(
        "Provider error{}: {message}",
        code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
    )]
    Provider {
        /// The provider's error code, when it sends one.
        code: Option<String>,
        /// The provider's human readable message.
        message: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Invalid parameters were supplied to a builder.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A report was requested without a ticker, company name or page name.
    #[error("at least one of ticker, company name or page name is required")]
    MissingSearchInput,
}
