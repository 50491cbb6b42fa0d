//! Page assembly on top of the bulk and detail resolution flows.

use std::collections::HashMap;
use std::sync::Arc;

use aru365_core::{AffiliateLinks, Catalog, ProductSummary, Snapshot, TourListing};
use aru365_viator::ViatorError;

use crate::error::ResolveError;
use crate::marketplace::MarketplaceApi;
use crate::meta::PageMeta;
use crate::pages::{
    GuidePage, GuidePickCard, Link, ListingPage, Page, PillarPage, ProductCard, RelatedListing,
};
use crate::pipeline::{dedup_preserving_order, live_provider, resolve_summaries};
use crate::providers::{LiveProvider, PlaceholderProvider, ProviderChain, SnapshotProvider};

/// Related listings shown on a detail page.
const RELATED_LISTINGS: usize = 3;
/// Sibling guides linked from a guide page.
const RELATED_GUIDES: usize = 3;

/// Resolves pages against shared, immutable editorial and snapshot data.
///
/// Cheap to clone; every render builds its result from scratch.
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    snapshot: Arc<Snapshot>,
    links: AffiliateLinks,
    marketplace: Arc<dyn MarketplaceApi>,
    site_url: String,
}

impl Resolver {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        snapshot: Arc<Snapshot>,
        links: AffiliateLinks,
        marketplace: Arc<dyn MarketplaceApi>,
        site_url: &str,
    ) -> Self {
        Self {
            catalog,
            snapshot,
            links,
            marketplace,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn marketplace_is_live(&self) -> bool {
        self.marketplace.is_live()
    }

    /// Summaries for `product_ids` on a `category` page; see [`resolve_summaries`].
    pub async fn resolve_bulk(&self, category: &str, product_ids: &[String]) -> Vec<ProductSummary> {
        resolve_summaries(
            self.marketplace.as_ref(),
            &self.snapshot,
            &self.links,
            category,
            product_ids,
        )
        .await
    }

    /// The category landing page with its featured products.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when `category` is not a pillar.
    pub async fn resolve_pillar(&self, category: &str) -> Result<PillarPage, ResolveError> {
        let pillar = self
            .catalog
            .pillar(category)
            .ok_or_else(|| ResolveError::not_found(category, None))?;

        let summaries = self
            .resolve_bulk(category, self.catalog.pillar_product_ids(category))
            .await;
        let featured: Option<Vec<ProductCard>> = (!summaries.is_empty()).then(|| {
            summaries
                .into_iter()
                .map(|summary| {
                    let href = match self
                        .catalog
                        .listing_by_product_id(category, &summary.product_id)
                    {
                        Some(listing) => format!("/{category}/{}", listing.slug),
                        None => summary.booking_url.clone(),
                    };
                    ProductCard { summary, href }
                })
                .collect()
        });

        Ok(PillarPage {
            book_url: self.links.category_booking_url(Some(category)).to_string(),
            featured,
            meta: PageMeta::for_pillar(pillar, &self.site_url),
            pillar: pillar.clone(),
        })
    }

    /// A guide page. Picks whose slug matches no listing are kept without
    /// product data instead of failing the page.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no such guide exists.
    pub async fn resolve_guide(&self, category: &str, slug: &str) -> Result<GuidePage, ResolveError> {
        let guide = self
            .catalog
            .guide(category, slug)
            .ok_or_else(|| ResolveError::not_found(category, Some(slug)))?;

        let listings: Vec<Option<&TourListing>> = guide
            .picks
            .iter()
            .map(|pick| {
                let listing = self.catalog.listing(category, &pick.slug);
                if listing.is_none() {
                    tracing::debug!(
                        category,
                        guide = slug,
                        pick = %pick.slug,
                        "guide pick has no listing; skipping product data"
                    );
                }
                listing
            })
            .collect();

        let product_ids: Vec<String> = listings
            .iter()
            .flatten()
            .map(|listing| listing.product_id.clone())
            .collect();
        let summaries = self.resolve_bulk(category, &product_ids).await;
        let by_id: HashMap<&str, &ProductSummary> = summaries
            .iter()
            .map(|s| (s.product_id.as_str(), s))
            .collect();

        let picks: Vec<GuidePickCard> = guide
            .picks
            .iter()
            .zip(listings)
            .map(|(pick, listing)| GuidePickCard {
                pick: pick.clone(),
                tour: listing
                    .and_then(|l| by_id.get(l.product_id.as_str()))
                    .map(|s| (*s).clone()),
                listing: listing.cloned(),
            })
            .collect();

        let related_guides: Vec<Link> = self
            .catalog
            .related_guides(category, slug, RELATED_GUIDES)
            .into_iter()
            .map(|g| Link {
                label: g.title.clone(),
                href: format!("/{}/{}", g.category, g.slug),
            })
            .collect();

        let category_title = self.category_title(category);
        Ok(GuidePage {
            meta: PageMeta::for_guide(guide, &category_title, &self.site_url),
            guide: guide.clone(),
            category_href: format!("/{category}"),
            category_title,
            picks,
            related_guides,
        })
    }

    /// A tour detail page.
    ///
    /// The bulk fetch (primary plus related products) and the detail fetch
    /// (itinerary) run concurrently and fail independently. The primary
    /// summary is always present: live bulk, live detail, snapshot, then a
    /// placeholder built from the listing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no such listing exists.
    pub async fn resolve_listing(
        &self,
        category: &str,
        slug: &str,
    ) -> Result<ListingPage, ResolveError> {
        let listing = self
            .catalog
            .listing(category, slug)
            .ok_or_else(|| ResolveError::not_found(category, Some(slug)))?;

        let related: Vec<&TourListing> = self
            .catalog
            .listings_by_category(category)
            .into_iter()
            .filter(|other| other.product_id != listing.product_id)
            .take(RELATED_LISTINGS)
            .collect();

        let ids = dedup_preserving_order(
            std::iter::once(listing.product_id.as_str())
                .chain(related.iter().map(|l| l.product_id.as_str())),
        );

        let (bulk, detail) = tokio::join!(
            self.marketplace.bulk_summaries(&ids),
            self.marketplace.product_detail(&listing.product_id),
        );

        let live = live_provider("live", category, &ids, bulk);
        let (live_detail, itinerary) = match detail {
            Ok(Some(detail)) => {
                let itinerary = (!detail.itinerary.is_empty()).then_some(detail.itinerary);
                (LiveProvider::new("live-detail", vec![detail.summary]), itinerary)
            }
            Ok(None) => {
                tracing::debug!(
                    category,
                    product_id = %listing.product_id,
                    "marketplace has no detail for product"
                );
                (LiveProvider::empty("live-detail"), None)
            }
            Err(e) => {
                if matches!(e, ViatorError::NotConfigured) {
                    tracing::debug!(category, "marketplace offline; no itinerary");
                } else {
                    tracing::warn!(
                        category,
                        product_id = %listing.product_id,
                        error = %e,
                        "marketplace detail fetch failed; omitting itinerary"
                    );
                }
                (LiveProvider::empty("live-detail"), None)
            }
        };

        let snapshot = SnapshotProvider::new(&self.snapshot, category);
        let placeholder = PlaceholderProvider::new(listing, &self.links);

        let primary_chain = ProviderChain::new()
            .then(&live)
            .then(&live_detail)
            .then(&snapshot)
            .then(&placeholder);
        let mut primary = primary_chain
            .resolve(&listing.product_id)
            .unwrap_or_else(|| placeholder.listing_summary());
        primary.booking_url = self.links.product_booking_url(&primary.product_id);

        let related_chain = ProviderChain::new().then(&live).then(&snapshot);
        let related: Vec<RelatedListing> = related
            .into_iter()
            .map(|other| RelatedListing {
                image_url: related_chain
                    .resolve(&other.product_id)
                    .and_then(|s| s.image_url),
                booking_url: self.links.product_booking_url(&other.product_id),
                listing: other.clone(),
            })
            .collect();

        let category_title = self.category_title(category);
        Ok(ListingPage {
            meta: PageMeta::for_listing(listing, &category_title, &self.site_url),
            listing: listing.clone(),
            category_href: format!("/{category}"),
            category_title,
            primary,
            related,
            itinerary,
        })
    }

    /// A page below a category. A guide wins over a listing at the same path.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when neither a guide nor a listing
    /// exists at `/{category}/{slug}`.
    pub async fn resolve_page(&self, category: &str, slug: &str) -> Result<Page, ResolveError> {
        if self.catalog.guide(category, slug).is_some() {
            return self.resolve_guide(category, slug).await.map(Page::Guide);
        }
        if self.catalog.listing(category, slug).is_some() {
            return self.resolve_listing(category, slug).await.map(Page::Listing);
        }
        Err(ResolveError::not_found(category, Some(slug)))
    }

    /// Pillar title for `category`, or the slug itself when unknown.
    fn category_title(&self, category: &str) -> String {
        self.catalog
            .pillar(category)
            .map_or_else(|| category.to_string(), |p| p.title.clone())
    }
}
