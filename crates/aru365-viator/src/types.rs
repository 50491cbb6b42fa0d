//! Viator Partner API v2 response types.
//!
//! ## Observed shape (`POST /products/bulk`, `GET /products/{code}`)
//!
//! ### Envelope
//! `/products/bulk` returns a bare JSON array of products. Error responses
//! and some sandbox keys return an object instead; the client treats any
//! non-array body as "no products".
//!
//! ### `title`
//! Usually present, but stub records with `""` have been seen for products
//! that are inactive in the sandbox. Usability is decided downstream.
//!
//! ### `productUrl`
//! Points at `shop.live.rc.viator.com`, which does not reliably serve booking
//! pages. Carried through as-is; the site rewrites it.
//!
//! ### `images`
//! Each image carries several size `variants`. One image is flagged
//! `isCover`; when none is, the first image is used.
//!
//! ### `pricing`
//! Only present on some keys/endpoints. `summary.fromPrice` is a number in
//! `currency` (ISO 4217).
//!
//! ### `itinerary`
//! Detail-only. `itineraryItems` is absent for "unstructured" itineraries.

use serde::Deserialize;

/// One product from the bulk or detail endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorProduct {
    /// Viator product code, e.g. `"119085P1"`.
    pub product_code: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Marketplace-generated booking link (internal domain).
    #[serde(default)]
    pub product_url: Option<String>,

    #[serde(default)]
    pub images: Vec<ViatorImage>,

    #[serde(default)]
    pub pricing: Option<ViatorPricing>,

    #[serde(default)]
    pub reviews: Option<ViatorReviews>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorImage {
    #[serde(default)]
    pub is_cover: bool,
    #[serde(default)]
    pub variants: Vec<ViatorImageVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViatorImageVariant {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViatorPricing {
    #[serde(default)]
    pub summary: Option<ViatorPricingSummary>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorPricingSummary {
    #[serde(default)]
    pub from_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorReviews {
    #[serde(default)]
    pub combined_average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
}

/// Response of `GET /products/{code}`: a product plus itinerary data.
#[derive(Debug, Clone, Deserialize)]
pub struct ViatorProductDetail {
    #[serde(flatten)]
    pub product: ViatorProduct,
    #[serde(default)]
    pub itinerary: Option<ViatorItinerary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorItinerary {
    #[serde(default)]
    pub itinerary_items: Vec<ViatorItineraryItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViatorItineraryItem {
    #[serde(default)]
    pub point_of_interest_location: Option<ViatorPointOfInterest>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViatorPointOfInterest {
    #[serde(default)]
    pub location: Option<ViatorLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViatorLocation {
    #[serde(default)]
    pub name: Option<String>,
}
