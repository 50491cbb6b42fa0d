//! Page models handed to the renderer.

use serde::Serialize;

use aru365_core::{Guide, GuidePick, ItineraryStop, Pillar, ProductSummary, TourListing};

use crate::meta::PageMeta;

/// A product shown on a pillar page, with where its card links to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub summary: ProductSummary,
    /// Internal `/{category}/{slug}` when the product has a listing, else the
    /// booking URL.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarPage {
    pub pillar: Pillar,
    /// Category-level "see all options" link.
    pub book_url: String,
    /// `None` when no product could be resolved at all.
    pub featured: Option<Vec<ProductCard>>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// One guide pick with whatever could be resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidePickCard {
    pub pick: GuidePick,
    /// `None` when the pick's slug matches no listing in the category.
    pub listing: Option<TourListing>,
    pub tour: Option<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidePage {
    pub guide: Guide,
    pub category_title: String,
    pub category_href: String,
    pub picks: Vec<GuidePickCard>,
    pub related_guides: Vec<Link>,
    pub meta: PageMeta,
}

/// A teaser for another listing in the same category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedListing {
    pub listing: TourListing,
    pub image_url: Option<String>,
    /// Always the public marketplace URL, never the internal listing path.
    pub booking_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    pub listing: TourListing,
    pub category_title: String,
    pub category_href: String,
    /// Always present; falls back to snapshot, then to editorial copy.
    pub primary: ProductSummary,
    pub related: Vec<RelatedListing>,
    /// Live itinerary, only when the detail fetch returned stops.
    pub itinerary: Option<Vec<ItineraryStop>>,
    pub meta: PageMeta,
}

/// A page below a category: a guide or a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Guide(GuidePage),
    Listing(ListingPage),
}

impl Page {
    #[must_use]
    pub fn meta(&self) -> &PageMeta {
        match self {
            Self::Guide(page) => &page.meta,
            Self::Listing(page) => &page.meta,
        }
    }
}
