//! The seam between the pipeline and the live marketplace.

use std::sync::Arc;

use async_trait::async_trait;

use aru365_core::{AppConfig, ProductDetail, ProductSummary};
use aru365_viator::{ViatorClient, ViatorError};

/// Live product source consumed by the pipeline.
///
/// Implementations may fail or return partial data; the pipeline absorbs both.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Summaries for `product_ids`, in any order, possibly incomplete.
    async fn bulk_summaries(&self, product_ids: &[String])
        -> Result<Vec<ProductSummary>, ViatorError>;

    /// One product with itinerary; `Ok(None)` when the marketplace has no such product.
    async fn product_detail(&self, product_id: &str) -> Result<Option<ProductDetail>, ViatorError>;

    /// `false` when calls can never succeed (no credentials configured).
    fn is_live(&self) -> bool {
        true
    }
}

#[async_trait]
impl MarketplaceApi for ViatorClient {
    async fn bulk_summaries(
        &self,
        product_ids: &[String],
    ) -> Result<Vec<ProductSummary>, ViatorError> {
        ViatorClient::bulk_summaries(self, product_ids).await
    }

    async fn product_detail(&self, product_id: &str) -> Result<Option<ProductDetail>, ViatorError> {
        ViatorClient::product_detail(self, product_id).await
    }
}

/// Marketplace used when no API key is configured. Every call fails with
/// [`ViatorError::NotConfigured`], so every render falls back to the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineMarketplace;

#[async_trait]
impl MarketplaceApi for OfflineMarketplace {
    async fn bulk_summaries(
        &self,
        _product_ids: &[String],
    ) -> Result<Vec<ProductSummary>, ViatorError> {
        Err(ViatorError::NotConfigured)
    }

    async fn product_detail(
        &self,
        _product_id: &str,
    ) -> Result<Option<ProductDetail>, ViatorError> {
        Err(ViatorError::NotConfigured)
    }

    fn is_live(&self) -> bool {
        false
    }
}

/// The marketplace the binaries run against: a [`ViatorClient`] when an API
/// key is configured and `offline` is not forced, else [`OfflineMarketplace`].
///
/// # Errors
///
/// Returns [`ViatorError`] if the HTTP client cannot be built or the
/// configured base URL is invalid.
pub fn marketplace_from_config(
    config: &AppConfig,
    offline: bool,
) -> Result<Arc<dyn MarketplaceApi>, ViatorError> {
    match config.viator_api_key.as_deref() {
        Some(key) if !offline => {
            let client = ViatorClient::new(
                key,
                &config.viator_api_base_url,
                config.viator_request_timeout_secs,
            )?;
            tracing::info!(base_url = %config.viator_api_base_url, "live marketplace enabled");
            Ok(Arc::new(client))
        }
        Some(_) => {
            tracing::info!("marketplace forced offline; serving snapshot data only");
            Ok(Arc::new(OfflineMarketplace))
        }
        None => {
            tracing::warn!("VIATOR_API_KEY not set; serving snapshot data only");
            Ok(Arc::new(OfflineMarketplace))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_marketplace_always_fails_not_configured() {
        let offline = OfflineMarketplace;
        assert!(!offline.is_live());
        assert!(matches!(
            offline.bulk_summaries(&["A".to_string()]).await,
            Err(ViatorError::NotConfigured)
        ));
        assert!(matches!(
            offline.product_detail("A").await,
            Err(ViatorError::NotConfigured)
        ));
    }

    #[test]
    fn viator_client_reports_live() {
        let client = ViatorClient::new("k", "https://api.sandbox.viator.com/partner", 5)
            .expect("client builds");
        assert!(MarketplaceApi::is_live(&client));
    }

    fn config(api_key: Option<&str>) -> AppConfig {
        AppConfig {
            env: aru365_core::Environment::Test,
            bind_addr: "127.0.0.1:3000".parse().expect("addr"),
            log_level: "info".to_string(),
            catalog_path: "config/catalog.yaml".into(),
            snapshot_path: "config/snapshots.yaml".into(),
            site_url: "https://aru365.com".to_string(),
            viator_api_key: api_key.map(str::to_string),
            viator_api_base_url: "https://api.sandbox.viator.com/partner".to_string(),
            viator_request_timeout_secs: 5,
            viator_destination_url: "https://www.viator.com/Aruba/d28".to_string(),
            viator_partner_id: "P00287226".to_string(),
            viator_affiliate_id: "42383".to_string(),
        }
    }

    #[test]
    fn marketplace_from_config_is_live_only_with_a_key() {
        let live = marketplace_from_config(&config(Some("k")), false).expect("builds");
        assert!(live.is_live());

        let forced = marketplace_from_config(&config(Some("k")), true).expect("builds");
        assert!(!forced.is_live());

        let keyless = marketplace_from_config(&config(None), false).expect("builds");
        assert!(!keyless.is_live());
    }
}
