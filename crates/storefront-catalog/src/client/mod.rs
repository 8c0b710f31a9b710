//! HTTP client for the storefront's `products` endpoint.

use std::time::Duration;

use reqwest::Client;
use storefront_core::{dedup_by_id, Product};

use crate::error::{CatalogUnavailable, FetchFailure};

/// HTTP client for `GET {base_url}/products`.
///
/// A fetch is a single attempt. Invalid base URLs, transport errors, non-2xx
/// responses and undecodable bodies all come back as [`CatalogUnavailable`].
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailure::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchFailure> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the full catalog from `base_url`.
    ///
    /// Products come back in response order with repeated ids dropped (first
    /// occurrence wins). A JSON `null` body is an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] wrapping the [`FetchFailure`] that
    /// stopped the request.
    pub async fn fetch_products(&self, base_url: &str) -> Result<Vec<Product>, CatalogUnavailable> {
        let url = Self::products_url(base_url).map_err(|cause| CatalogUnavailable {
            url: base_url.to_owned(),
            cause,
        })?;

        match self.get_products(&url).await {
            Ok(products) => {
                let fetched = products.len();
                let products = dedup_by_id(products);
                let dropped = fetched - products.len();
                if dropped > 0 {
                    tracing::warn!(url = %url, dropped, "dropped products with duplicate ids");
                }
                tracing::info!(url = %url, count = products.len(), "catalog fetched");
                Ok(products)
            }
            Err(cause) => {
                tracing::warn!(url = %url, error = %cause, "catalog fetch failed");
                Err(CatalogUnavailable { url, cause })
            }
        }
    }

    async fn get_products(&self, url: &str) -> Result<Vec<Product>, FetchFailure> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchFailure::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_products(&body, url)
    }

    /// Builds the `products` URL under `base_url`, keeping any base path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailure::InvalidBaseUrl`] if the result is not an
    /// absolute `http`/`https` URL.
    pub fn products_url(base_url: &str) -> Result<String, FetchFailure> {
        let base = base_url.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(&format!("{base}/products")).map_err(|e| {
            FetchFailure::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchFailure::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }

        Ok(url.to_string())
    }
}

/// Decodes a `products` response body; `null` decodes to an empty list.
fn parse_products(body: &str, url: &str) -> Result<Vec<Product>, FetchFailure> {
    serde_json::from_str::<Option<Vec<Product>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| FetchFailure::Deserialize {
            context: format!("products from {url}"),
            source: e,
        })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
