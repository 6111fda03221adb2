use thiserror::Error;

/// Transport and decoding failures from the API client layer. Assertion
/// failures live in the workflow layer; this enum only covers getting a
/// response and reading it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to construct HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read response body from {endpoint}: {source}")]
    Body {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response body (HTTP {status}) is not valid JSON: {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
