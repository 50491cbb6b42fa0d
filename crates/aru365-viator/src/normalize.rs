//! Normalization from raw Viator types to [`aru365_core::ProductSummary`].

use aru365_core::{ItineraryStop, ProductDetail, ProductSummary};

use crate::types::{ViatorImage, ViatorPricing, ViatorProduct, ViatorProductDetail};

/// Price label used when the marketplace returns no price.
pub const PRICE_UNAVAILABLE: &str = "Check price";

/// Normalizes a raw [`ViatorProduct`] into a [`ProductSummary`].
///
/// Never fails: missing fields become `None` or an empty title, and the
/// caller's usability check decides what to do with stub records.
#[must_use]
pub fn normalize_summary(product: ViatorProduct) -> ProductSummary {
    let title = product
        .title
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let (rating, review_count) = product
        .reviews
        .as_ref()
        .map_or((None, None), |r| (r.combined_average_rating, r.total_reviews));

    ProductSummary {
        image_url: cover_image_url(&product.images),
        price_display: price_display(product.pricing.as_ref()),
        booking_url: product.product_url.unwrap_or_default(),
        product_id: product.product_code,
        title,
        rating,
        review_count,
    }
}

/// Normalizes a [`ViatorProductDetail`] into a [`ProductDetail`].
///
/// Itinerary items without a description are dropped; unnamed stops are
/// labelled `"Stop N"` by position.
#[must_use]
pub fn normalize_detail(detail: ViatorProductDetail) -> ProductDetail {
    let itinerary = detail
        .itinerary
        .map(|it| it.itinerary_items)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let description = item
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())?;
            let stop = item
                .point_of_interest_location
                .and_then(|poi| poi.location)
                .and_then(|loc| loc.name)
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Stop {}", idx + 1));
            Some(ItineraryStop { stop, description })
        })
        .collect();

    ProductDetail {
        summary: normalize_summary(detail.product),
        itinerary,
    }
}

/// `"From $89"` for USD, `"From 89 EUR"` otherwise, [`PRICE_UNAVAILABLE`]
/// when no price is known.
fn price_display(pricing: Option<&ViatorPricing>) -> String {
    let Some(pricing) = pricing else {
        return PRICE_UNAVAILABLE.to_string();
    };
    let Some(from) = pricing.summary.as_ref().and_then(|s| s.from_price) else {
        return PRICE_UNAVAILABLE.to_string();
    };
    if !from.is_finite() || from <= 0.0 {
        return PRICE_UNAVAILABLE.to_string();
    }

    let amount = format!("{from:.2}");
    let amount = amount.strip_suffix(".00").unwrap_or(&amount);

    match pricing.currency.as_deref() {
        None | Some("USD") => format!("From ${amount}"),
        Some(code) => format!("From {amount} {code}"),
    }
}

/// Largest variant of the cover image (or of the first image).
fn cover_image_url(images: &[ViatorImage]) -> Option<String> {
    let image = images
        .iter()
        .find(|i| i.is_cover)
        .or_else(|| images.first())?;
    image
        .variants
        .iter()
        .max_by_key(|v| v.width.unwrap_or(0))
        .map(|v| v.url.clone())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
