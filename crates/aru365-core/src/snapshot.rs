//! Static fallback product data used when live marketplace data is missing.
//!
//! Every entry is validated at load time to carry a non-empty title, so any
//! summary this module produces passes [`crate::is_usable`].

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::catalog::check_product_id;
use crate::{AffiliateLinks, ConfigError, ProductSummary};

/// Category-specific overrides for a snapshot entry. Unset fields fall back
/// to the entry's defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotVariant {
    pub category: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price_display: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEntry {
    pub product_id: String,
    pub title: String,
    pub price_display: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub variants: Vec<SnapshotVariant>,
}

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    products: Vec<SnapshotEntry>,
}

/// Pre-captured summaries keyed by product id.
#[derive(Debug, Clone)]
pub struct Snapshot {
    entries: HashMap<String, SnapshotEntry>,
    links: AffiliateLinks,
}

/// Load and validate the snapshot from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_snapshot(path: &Path, links: AffiliateLinks) -> Result<Snapshot, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DataFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    Snapshot::from_yaml(&content, links)
}

impl Snapshot {
    /// Parse and validate a snapshot from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DataFileParse`] on malformed YAML and
    /// [`ConfigError::Validation`] for blank titles or duplicate ids.
    pub fn from_yaml(content: &str, links: AffiliateLinks) -> Result<Self, ConfigError> {
        let file: SnapshotFile = serde_yaml::from_str(content)?;
        Self::from_entries(file.products, links)
    }

    /// Build a snapshot from already-parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for blank titles or duplicate ids.
    pub fn from_entries(
        products: Vec<SnapshotEntry>,
        links: AffiliateLinks,
    ) -> Result<Self, ConfigError> {
        let mut entries = HashMap::with_capacity(products.len());
        for entry in products {
            check_product_id(&entry.product_id, "snapshot")?;
            if entry.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "snapshot entry '{}' has an empty title",
                    entry.product_id
                )));
            }
            let mut seen_categories = HashSet::new();
            for variant in &entry.variants {
                if variant.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                    return Err(ConfigError::Validation(format!(
                        "snapshot entry '{}' has an empty title for category '{}'",
                        entry.product_id, variant.category
                    )));
                }
                if !seen_categories.insert(variant.category.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "snapshot entry '{}' repeats category '{}'",
                        entry.product_id, variant.category
                    )));
                }
            }
            let id = entry.product_id.clone();
            if entries.insert(id.clone(), entry).is_some() {
                return Err(ConfigError::Validation(format!(
                    "duplicate snapshot entry: '{id}'"
                )));
            }
        }
        Ok(Self { entries, links })
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.contains_key(product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary for one product, using the category's variant when present.
    #[must_use]
    pub fn summary(&self, product_id: &str, category: &str) -> Option<ProductSummary> {
        let entry = self.entries.get(product_id)?;
        let variant = entry.variants.iter().find(|v| v.category == category);

        let title = variant
            .and_then(|v| v.title.clone())
            .unwrap_or_else(|| entry.title.clone());
        let price_display = variant
            .and_then(|v| v.price_display.clone())
            .unwrap_or_else(|| entry.price_display.clone());
        let image_url = variant
            .and_then(|v| v.image_url.clone())
            .or_else(|| entry.image_url.clone());

        Some(ProductSummary {
            product_id: entry.product_id.clone(),
            title,
            image_url,
            price_display,
            booking_url: self.links.product_booking_url(&entry.product_id),
            rating: entry.rating,
            review_count: entry.review_count,
        })
    }

    /// Summaries for `product_ids` in request order. Unknown ids are omitted,
    /// so the result may be shorter than the request.
    #[must_use]
    pub fn summaries(&self, product_ids: &[String], category: &str) -> Vec<ProductSummary> {
        product_ids
            .iter()
            .filter_map(|id| self.summary(id, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_usable;

    const SNAPSHOT: &str = r#"
products:
  - product_id: "A"
    title: Static A
    price_display: From $89
    image_url: https://img.example.com/a.jpg
    rating: 4.8
    review_count: 120
    variants:
      - category: sunset-and-dinner-cruises-in-aruba
        title: Static A at Sunset
        price_display: From $99
  - product_id: "C"
    title: Static C
    price_display: From $59
"#;

    fn snapshot() -> Snapshot {
        Snapshot::from_yaml(SNAPSHOT, AffiliateLinks::default()).expect("valid snapshot")
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn summaries_follow_request_order_and_skip_unknown() {
        let result = snapshot().summaries(&ids(&["C", "B", "A"]), "catamaran-cruises-in-aruba");
        let titles: Vec<&str> = result.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Static C", "Static A"]);
        assert!(result.iter().all(is_usable));
    }

    #[test]
    fn category_variant_overrides_only_set_fields() {
        let summary = snapshot()
            .summary("A", "sunset-and-dinner-cruises-in-aruba")
            .expect("A is known");
        assert_eq!(summary.title, "Static A at Sunset");
        assert_eq!(summary.price_display, "From $99");
        assert_eq!(
            summary.image_url.as_deref(),
            Some("https://img.example.com/a.jpg")
        );
    }

    #[test]
    fn booking_url_is_the_canonical_product_url() {
        let summary = snapshot().summary("C", "any").expect("C is known");
        assert_eq!(
            summary.booking_url,
            AffiliateLinks::default().product_booking_url("C")
        );
    }

    #[test]
    fn empty_title_is_rejected() {
        let yaml = "products:\n  - { product_id: X, title: '  ', price_display: p }\n";
        let err = Snapshot::from_yaml(yaml, AffiliateLinks::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    }

    #[test]
    fn padded_product_id_is_rejected() {
        let yaml = "products:\n  - { product_id: 'A ', title: Static A, price_display: p }\n";
        let err = Snapshot::from_yaml(yaml, AffiliateLinks::default()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("whitespace")),
            "got: {err:?}"
        );
    }

    #[test]
    fn duplicate_entry_is_rejected() {
        let yaml = "products:\n  - { product_id: X, title: a, price_display: p }\n  - { product_id: X, title: b, price_display: p }\n";
        let err = Snapshot::from_yaml(yaml, AffiliateLinks::default()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "got: {err:?}"
        );
    }

    #[test]
    fn shipped_snapshot_covers_catalog() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let catalog = crate::load_catalog(&root.join("config/catalog.yaml")).expect("catalog");
        let snapshot = load_snapshot(
            &root.join("config/snapshots.yaml"),
            AffiliateLinks::default(),
        )
        .expect("snapshot");
        let missing: Vec<&str> = catalog
            .product_ids()
            .into_iter()
            .filter(|id| !snapshot.contains(id))
            .collect();
        assert!(missing.is_empty(), "snapshot is missing: {missing:?}");
    }
}
