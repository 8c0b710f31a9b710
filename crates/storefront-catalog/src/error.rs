use thiserror::Error;

/// Fixed text shown in place of the shelf when the catalog cannot be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to display products.";

/// Why a catalog request did not produce a product list.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The catalog could not be loaded. Every fetch failure surfaces as this.
#[derive(Debug, Error)]
#[error("catalog unavailable at {url}: {cause}")]
pub struct CatalogUnavailable {
    pub url: String,
    #[source]
    pub cause: FetchFailure,
}

impl CatalogUnavailable {
    /// Message for end users; the details stay in logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        UNAVAILABLE_MESSAGE
    }
}
