//! Ordered per-product fallback strategies.
//!
//! Each provider answers "do you have a usable summary for this id?". A
//! [`ProviderChain`] asks its providers in order and stops at the first
//! answer, so a partial live response is topped up from the snapshot for
//! exactly the products it lacks.

use std::collections::{HashMap, HashSet};

use aru365_core::{is_usable, AffiliateLinks, ProductSummary, Snapshot, TourListing};

/// Price label for summaries built from editorial data alone.
pub const PLACEHOLDER_PRICE: &str = "See prices";

/// One source of product summaries.
pub trait SummaryProvider {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// A usable summary for `product_id`, or `None`.
    fn summary(&self, product_id: &str) -> Option<ProductSummary>;
}

/// Summaries returned by the marketplace for this render.
///
/// Unusable summaries are dropped at construction, so they count as missing.
#[derive(Debug, Default)]
pub struct LiveProvider {
    name: &'static str,
    summaries: Vec<ProductSummary>,
    by_id: HashMap<String, usize>,
}

impl LiveProvider {
    #[must_use]
    pub fn new(name: &'static str, summaries: Vec<ProductSummary>) -> Self {
        let mut kept = Vec::with_capacity(summaries.len());
        let mut by_id = HashMap::with_capacity(summaries.len());
        for summary in summaries {
            if !is_usable(&summary) {
                tracing::debug!(
                    source = name,
                    product_id = %summary.product_id,
                    "discarding live summary without a title"
                );
                continue;
            }
            // First occurrence wins when the API repeats a product.
            if by_id.contains_key(&summary.product_id) {
                continue;
            }
            by_id.insert(summary.product_id.clone(), kept.len());
            kept.push(summary);
        }
        Self {
            name,
            summaries: kept,
            by_id,
        }
    }

    /// A provider with nothing in it, for a failed or skipped fetch.
    #[must_use]
    pub fn empty(name: &'static str) -> Self {
        Self::new(name, Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Usable summaries for ids outside `requested`, in API order.
    pub fn unrequested<'a>(
        &'a self,
        requested: &'a HashSet<&'a str>,
    ) -> impl Iterator<Item = &'a ProductSummary> + 'a {
        self.summaries
            .iter()
            .filter(move |s| !requested.contains(s.product_id.as_str()))
    }
}

impl SummaryProvider for LiveProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn summary(&self, product_id: &str) -> Option<ProductSummary> {
        self.by_id
            .get(product_id)
            .map(|&idx| self.summaries[idx].clone())
    }
}

/// Static snapshot entries, with the category's variant applied.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotProvider<'a> {
    snapshot: &'a Snapshot,
    category: &'a str,
}

impl<'a> SnapshotProvider<'a> {
    #[must_use]
    pub fn new(snapshot: &'a Snapshot, category: &'a str) -> Self {
        Self { snapshot, category }
    }
}

impl SummaryProvider for SnapshotProvider<'_> {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn summary(&self, product_id: &str) -> Option<ProductSummary> {
        self.snapshot.summary(product_id, self.category)
    }
}

/// Last resort for a detail page: a summary made from the listing itself.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderProvider<'a> {
    listing: &'a TourListing,
    links: &'a AffiliateLinks,
}

impl<'a> PlaceholderProvider<'a> {
    #[must_use]
    pub fn new(listing: &'a TourListing, links: &'a AffiliateLinks) -> Self {
        Self { listing, links }
    }

    /// The listing's editorial title with no price or image.
    #[must_use]
    pub fn listing_summary(&self) -> ProductSummary {
        ProductSummary {
            product_id: self.listing.product_id.clone(),
            title: self.listing.display_title(),
            image_url: None,
            price_display: PLACEHOLDER_PRICE.to_string(),
            booking_url: self.links.product_booking_url(&self.listing.product_id),
            rating: None,
            review_count: None,
        }
    }
}

impl SummaryProvider for PlaceholderProvider<'_> {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn summary(&self, product_id: &str) -> Option<ProductSummary> {
        (product_id == self.listing.product_id).then(|| self.listing_summary())
    }
}

/// Providers tried in order per product id.
#[derive(Default)]
pub struct ProviderChain<'a> {
    providers: Vec<&'a dyn SummaryProvider>,
}

impl<'a> ProviderChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, provider: &'a dyn SummaryProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// The first usable summary any provider has for `product_id`.
    #[must_use]
    pub fn resolve(&self, product_id: &str) -> Option<ProductSummary> {
        for (position, provider) in self.providers.iter().enumerate() {
            let Some(summary) = provider.summary(product_id).filter(is_usable) else {
                continue;
            };
            if position > 0 {
                tracing::debug!(
                    product_id,
                    source = provider.name(),
                    "substituted fallback summary"
                );
            }
            return Some(summary);
        }
        tracing::debug!(product_id, "no provider has a usable summary");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> ProductSummary {
        ProductSummary {
            product_id: id.to_string(),
            title: title.to_string(),
            image_url: None,
            price_display: "From $10".to_string(),
            booking_url: String::new(),
            rating: None,
            review_count: None,
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot::from_yaml(
            "products:\n  - { product_id: A, title: Static A, price_display: From $1 }\n  - { product_id: C, title: Static C, price_display: From $3 }\n",
            AffiliateLinks::default(),
        )
        .expect("valid snapshot")
    }

    #[test]
    fn live_provider_drops_unusable_and_duplicate_summaries() {
        let live = LiveProvider::new(
            "live",
            vec![
                summary("A", "Live A"),
                summary("B", "   "),
                summary("A", "Second A"),
            ],
        );
        assert_eq!(live.len(), 1);
        assert_eq!(live.summary("A").map(|s| s.title), Some("Live A".into()));
        assert!(live.summary("B").is_none());
    }

    #[test]
    fn chain_prefers_earlier_provider_and_falls_through() {
        let live = LiveProvider::new("live", vec![summary("A", "Live A"), summary("C", "")]);
        let snap = snapshot();
        let snapshot = SnapshotProvider::new(&snap, "catamaran-cruises-in-aruba");
        let chain = ProviderChain::new().then(&live).then(&snapshot);

        assert_eq!(chain.resolve("A").map(|s| s.title), Some("Live A".into()));
        assert_eq!(chain.resolve("C").map(|s| s.title), Some("Static C".into()));
        assert!(chain.resolve("Z").is_none());
    }

    #[test]
    fn unrequested_keeps_api_order() {
        let live = LiveProvider::new(
            "live",
            vec![summary("X", "x"), summary("A", "a"), summary("Y", "y")],
        );
        let requested: HashSet<&str> = ["A"].into_iter().collect();
        let extra: Vec<&str> = live
            .unrequested(&requested)
            .map(|s| s.product_id.as_str())
            .collect();
        assert_eq!(extra, ["X", "Y"]);
    }

    #[test]
    fn placeholder_only_answers_for_its_listing() {
        let listing = listing();
        let links = AffiliateLinks::default();
        let placeholder = PlaceholderProvider::new(&listing, &links);

        let summary = placeholder.summary("P1").expect("own product");
        assert_eq!(summary.title, "Sail Co — Best for families");
        assert_eq!(summary.price_display, PLACEHOLDER_PRICE);
        assert_eq!(summary.booking_url, links.product_booking_url("P1"));
        assert!(placeholder.summary("P2").is_none());
    }

    fn listing() -> TourListing {
        TourListing {
            category: "catamaran-cruises-in-aruba".to_string(),
            slug: "family-sail".to_string(),
            product_id: "P1".to_string(),
            operator: "Sail Co".to_string(),
            angle: "Best for families".to_string(),
            seo_title: None,
            meta_description: String::new(),
            intro: String::new(),
            why_we_recommend: None,
            who_is_this_for: None,
            best_for: Vec::new(),
            highlights: Vec::new(),
            inclusions: Vec::new(),
            faqs: Vec::new(),
            itinerary: Vec::new(),
        }
    }
}
