use serde::{Deserialize, Serialize};

/// Minimal renderable projection of one marketplace product.
///
/// Built fresh for every render. Whether it came from the live marketplace or
/// the static snapshot is deliberately not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Viator product code, e.g. `"119085P1"`.
    pub product_id: String,
    pub title: String,
    pub image_url: Option<String>,
    /// Display string such as `"From $89"`.
    pub price_display: String,
    pub booking_url: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
}

/// One step of a tour itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    pub stop: String,
    pub description: String,
}

/// Extended product data from the single-product marketplace endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub summary: ProductSummary,
    pub itinerary: Vec<ItineraryStop>,
}

/// A summary is usable only when its title has visible content.
///
/// The marketplace occasionally returns stub records with an empty or
/// whitespace-only title; those are treated exactly like missing products.
#[must_use]
pub fn is_usable(summary: &ProductSummary) -> bool {
    !summary.title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str) -> ProductSummary {
        ProductSummary {
            product_id: "A".to_string(),
            title: title.to_string(),
            image_url: None,
            price_display: String::new(),
            booking_url: String::new(),
            rating: None,
            review_count: None,
        }
    }

    #[test]
    fn empty_and_blank_titles_are_unusable() {
        assert!(!is_usable(&summary("")));
        assert!(!is_usable(&summary("   ")));
        assert!(!is_usable(&summary("\t\n")));
    }

    #[test]
    fn titled_summary_is_usable() {
        assert!(is_usable(&summary("Sunset Sail")));
        assert!(is_usable(&summary("  Sunset Sail  ")));
    }

    #[test]
    fn summary_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(summary("Sunset Sail")).expect("serialize");
        assert_eq!(json["product_id"], "A");
        assert!(json["image_url"].is_null());
    }
}
