//! HTTP client for the Viator Partner API product endpoints.

use std::time::Duration;

use aru365_core::{ProductDetail, ProductSummary};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::ViatorError;
use crate::normalize::{normalize_detail, normalize_summary};
use crate::types::{ViatorProduct, ViatorProductDetail};

/// Accept header value selecting API version 2.0.
const ACCEPT_V2: &str = "application/json;version=2.0";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkRequest<'a> {
    product_codes: &'a [String],
}

/// HTTP client for the Viator Partner API.
///
/// Non-2xx responses surface as [`ViatorError::UnexpectedStatus`] and bad
/// bodies as [`ViatorError::Deserialize`]. Nothing is retried.
pub struct ViatorClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for ViatorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViatorClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ViatorClient {
    /// Creates a client for `base_url` (e.g. `https://api.viator.com/partner`).
    ///
    /// # Errors
    ///
    /// Returns [`ViatorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ViatorError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<Self, ViatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("aru365/0.1 (tours-affiliate)")
            .build()?;

        // Trailing slash so `join` appends below the partner prefix instead of
        // replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ViatorError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches summaries for `product_codes` in one `POST /products/bulk` call.
    ///
    /// The result is in whatever order the API returns and may omit codes.
    /// Array items that do not deserialize are skipped with a warning; a
    /// non-array body yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`ViatorError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ViatorError::Http`] on network or TLS failure.
    /// - [`ViatorError::Deserialize`] if the body is not JSON.
    pub async fn bulk_summaries(
        &self,
        product_codes: &[String],
    ) -> Result<Vec<ProductSummary>, ViatorError> {
        if product_codes.is_empty() {
            return Ok(Vec::new());
        }
        let body = self.bulk_products_raw(product_codes).await?;

        let serde_json::Value::Array(items) = body else {
            tracing::warn!(
                requested = product_codes.len(),
                "Viator bulk response was not an array; treating as empty"
            );
            return Ok(Vec::new());
        };

        let summaries = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ViatorProduct>(item) {
                Ok(product) => Some(normalize_summary(product)),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed Viator bulk item");
                    None
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Fetches one product with itinerary via `GET /products/{code}`.
    ///
    /// Returns `Ok(None)` when the API answers 404.
    ///
    /// # Errors
    ///
    /// - [`ViatorError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ViatorError::Http`] on network or TLS failure.
    /// - [`ViatorError::Deserialize`] if the body does not match the product shape.
    pub async fn product_detail(
        &self,
        product_code: &str,
    ) -> Result<Option<ProductDetail>, ViatorError> {
        let Some(body) = self.product_raw(product_code).await? else {
            return Ok(None);
        };
        let detail: ViatorProductDetail =
            serde_json::from_value(body).map_err(|e| ViatorError::Deserialize {
                context: format!("product {product_code}"),
                source: e,
            })?;
        Ok(Some(normalize_detail(detail)))
    }

    /// Raw JSON from `POST /products/bulk`, for inspection tooling.
    ///
    /// # Errors
    ///
    /// Same as [`Self::bulk_summaries`].
    pub async fn bulk_products_raw(
        &self,
        product_codes: &[String],
    ) -> Result<serde_json::Value, ViatorError> {
        let url = self.endpoint("products/bulk")?;
        let response = self
            .client
            .post(url.clone())
            .header("exp-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, ACCEPT_V2)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US")
            .json(&BulkRequest { product_codes })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViatorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ViatorError::Deserialize {
            context: format!("bulk products ({} codes)", product_codes.len()),
            source: e,
        })
    }

    /// Raw JSON from `GET /products/{code}`; `None` on 404.
    ///
    /// # Errors
    ///
    /// Same as [`Self::product_detail`].
    pub async fn product_raw(
        &self,
        product_code: &str,
    ) -> Result<Option<serde_json::Value>, ViatorError> {
        let mut url = self.endpoint("products")?;
        url.path_segments_mut()
            .map_err(|()| ViatorError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "base URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .push(product_code);

        let response = self
            .client
            .get(url.clone())
            .header("exp-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, ACCEPT_V2)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ViatorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ViatorError::Deserialize {
                context: format!("product {product_code}"),
                source: e,
            })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ViatorError> {
        self.base_url
            .join(path)
            .map_err(|e| ViatorError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
