//! Outbound affiliate booking links for the Viator marketplace.
//!
//! Product links are always built on the public `www.viator.com` origin.
//! The marketplace API returns links on `shop.live.rc.viator.com`, which does
//! not reliably serve booking pages, so those are never passed through.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::AppConfig;

/// Viator's Aruba destination page, used when `VIATOR_ARUBA_URL` is unset.
pub const DEFAULT_DESTINATION_URL: &str = "https://www.viator.com/Aruba/d28";

/// Fallback partner id (`pid` query parameter).
pub const DEFAULT_PARTNER_ID: &str = "P00287226";

/// Fallback affiliate campaign id (`mcid` query parameter).
pub const DEFAULT_AFFILIATE_ID: &str = "42383";

/// Public origin every product booking link is built on.
pub const CANONICAL_ORIGIN: &str = "https://www.viator.com";

/// Viator destination id for Aruba.
const DESTINATION_ID: &str = "d28";

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Affiliate credentials and destination, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateLinks {
    destination_url: String,
    partner_id: String,
    affiliate_id: String,
}

impl Default for AffiliateLinks {
    fn default() -> Self {
        Self::new(
            DEFAULT_DESTINATION_URL,
            DEFAULT_PARTNER_ID,
            DEFAULT_AFFILIATE_ID,
        )
    }
}

impl AffiliateLinks {
    #[must_use]
    pub fn new(destination_url: &str, partner_id: &str, affiliate_id: &str) -> Self {
        Self {
            destination_url: destination_url.to_owned(),
            partner_id: partner_id.to_owned(),
            affiliate_id: affiliate_id.to_owned(),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(
            &config.viator_destination_url,
            &config.viator_partner_id,
            &config.viator_affiliate_id,
        )
    }

    /// Booking URL for a whole category ("See options & book").
    ///
    /// Every category currently shares the destination URL; the parameter is
    /// accepted so callers do not change once categories get their own links.
    #[must_use]
    pub fn category_booking_url(&self, _category: Option<&str>) -> &str {
        &self.destination_url
    }

    /// Booking URL for one marketplace product.
    ///
    /// A pure function of `product_id` and the configured credentials. Callers
    /// must not pass an empty identifier.
    #[must_use]
    pub fn product_booking_url(&self, product_id: &str) -> String {
        debug_assert!(
            !product_id.trim().is_empty(),
            "product_booking_url called without a product id"
        );
        let code = utf8_percent_encode(product_id, QUERY_COMPONENT);
        let pid = utf8_percent_encode(&self.partner_id, QUERY_COMPONENT);
        let mcid = utf8_percent_encode(&self.affiliate_id, QUERY_COMPONENT);
        format!(
            "{CANONICAL_ORIGIN}/tours/Aruba/{DESTINATION_ID}-{code}?pid={pid}&mcid={mcid}&medium=api&api_version=2.0"
        )
    }
}

/// Returns `true` when `url` points at the public booking origin.
#[must_use]
pub fn is_canonical_booking_url(url: &str) -> bool {
    url.strip_prefix(CANONICAL_ORIGIN)
        .is_some_and(|rest| rest.starts_with('/'))
}
