//! Hand-authored editorial records: pillars, tour listings, and guides.
//!
//! Loaded once from `config/catalog.yaml` and never mutated afterwards. All
//! lookups are pure reads; unknown categories and slugs yield `None` or an
//! empty list rather than an error.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Category ("pillar") landing-page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Featured marketplace products for the pillar page, in display order.
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// Copy that may be authored either as one paragraph or as bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextBlock {
    Paragraph(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Editorial detail page for one bookable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourListing {
    pub category: String,
    pub slug: String,
    pub product_id: String,
    pub operator: String,
    /// Positioning label, e.g. `"Best for families"`.
    pub angle: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    pub meta_description: String,
    pub intro: String,
    #[serde(default)]
    pub why_we_recommend: Option<TextBlock>,
    #[serde(default)]
    pub who_is_this_for: Option<TextBlock>,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub itinerary: Vec<crate::ItineraryStop>,
}

impl TourListing {
    /// Heading used when no live title applies: the SEO title, or
    /// `"{operator} — {angle}"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        match &self.seo_title {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => format!("{} — {}", self.operator, self.angle),
        }
    }
}

/// A reference from a guide to a listing in the same category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidePick {
    pub slug: String,
    #[serde(default)]
    pub blurb: Option<String>,
}

/// Curated "best of" collection of listings within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub category: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub picks: Vec<GuidePick>,
}

/// A statically generated page: a pillar page when `slug` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagePath {
    pub category: String,
    pub slug: Option<String>,
}

impl PagePath {
    /// Site-relative path, e.g. `"/catamaran-cruises-in-aruba/morning-cruises"`.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.slug {
            Some(slug) => format!("/{}/{slug}", self.category),
            None => format!("/{}", self.category),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pillars: Vec<Pillar>,
    #[serde(default)]
    listings: Vec<TourListing>,
    #[serde(default)]
    guides: Vec<Guide>,
}

/// Load and validate the editorial catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DataFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    Catalog::from_yaml(&content)
}

impl Catalog {
    /// Parse and validate a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DataFileParse`] on malformed YAML and
    /// [`ConfigError::Validation`] when an invariant is violated.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    #[must_use]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    #[must_use]
    pub fn pillar(&self, slug: &str) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.slug == slug)
    }

    /// Featured product ids for a pillar page; empty for unknown pillars.
    #[must_use]
    pub fn pillar_product_ids(&self, category: &str) -> &[String] {
        self.pillar(category)
            .map_or(&[][..], |p| p.product_ids.as_slice())
    }

    #[must_use]
    pub fn listing(&self, category: &str, slug: &str) -> Option<&TourListing> {
        self.listings
            .iter()
            .find(|l| l.category == category && l.slug == slug)
    }

    /// All listings of a category in authoring order.
    #[must_use]
    pub fn listings_by_category(&self, category: &str) -> Vec<&TourListing> {
        self.listings
            .iter()
            .filter(|l| l.category == category)
            .collect()
    }

    /// The listing backing a product, used to decide between an internal
    /// detail link and an outbound marketplace link.
    #[must_use]
    pub fn listing_by_product_id(&self, category: &str, product_id: &str) -> Option<&TourListing> {
        self.listings
            .iter()
            .find(|l| l.category == category && l.product_id == product_id)
    }

    #[must_use]
    pub fn guide(&self, category: &str, slug: &str) -> Option<&Guide> {
        self.guides
            .iter()
            .find(|g| g.category == category && g.slug == slug)
    }

    #[must_use]
    pub fn guides_by_category(&self, category: &str) -> Vec<&Guide> {
        self.guides
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }

    /// Other guides of the same category, in authoring order, capped at `limit`.
    #[must_use]
    pub fn related_guides(&self, category: &str, exclude_slug: &str, limit: usize) -> Vec<&Guide> {
        self.guides
            .iter()
            .filter(|g| g.category == category && g.slug != exclude_slug)
            .take(limit)
            .collect()
    }

    /// Categories that have at least one listing, in first-seen order.
    #[must_use]
    pub fn categories_with_listings(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .map(|l| l.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Every page the build layer should generate: pillar pages first, then
    /// listing and guide pages per category with listings.
    #[must_use]
    pub fn page_paths(&self) -> Vec<PagePath> {
        let mut paths: Vec<PagePath> = self
            .pillars
            .iter()
            .map(|p| PagePath {
                category: p.slug.clone(),
                slug: None,
            })
            .collect();

        for category in self.categories_with_listings() {
            for listing in self.listings_by_category(category) {
                paths.push(PagePath {
                    category: category.to_string(),
                    slug: Some(listing.slug.clone()),
                });
            }
            for guide in self.guides_by_category(category) {
                paths.push(PagePath {
                    category: category.to_string(),
                    slug: Some(guide.slug.clone()),
                });
            }
        }

        paths
    }

    /// Every product id the catalog references (pillar features and
    /// listings), de-duplicated in first-seen order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.pillars
            .iter()
            .flat_map(|p| p.product_ids.iter().map(String::as_str))
            .chain(self.listings.iter().map(|l| l.product_id.as_str()))
            .filter(|id| seen.insert(*id))
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut pillar_slugs = HashSet::new();
        for pillar in &self.pillars {
            if pillar.slug.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "pillar slug must be non-empty".to_string(),
                ));
            }
            if !pillar_slugs.insert(pillar.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate pillar slug: '{}'",
                    pillar.slug
                )));
            }
            for id in &pillar.product_ids {
                check_product_id(id, &pillar.slug)?;
            }
        }

        // Listings and guides share the `/{category}/{slug}` namespace.
        let mut page_keys = HashSet::new();
        let mut product_keys = HashSet::new();

        for listing in &self.listings {
            if listing.slug.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "listing in '{}' must have a non-empty slug",
                    listing.category
                )));
            }
            check_product_id(&listing.product_id, &listing.category)?;
            if !pillar_slugs.contains(listing.category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "listing '{}' references unknown category '{}'",
                    listing.slug, listing.category
                )));
            }
            if !page_keys.insert((listing.category.as_str(), listing.slug.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page '{}/{}'",
                    listing.category, listing.slug
                )));
            }
            if !product_keys.insert((listing.category.as_str(), listing.product_id.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "product '{}' has more than one listing in '{}'",
                    listing.product_id, listing.category
                )));
            }
        }

        for guide in &self.guides {
            if guide.slug.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "guide in '{}' must have a non-empty slug",
                    guide.category
                )));
            }
            if !pillar_slugs.contains(guide.category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "guide '{}' references unknown category '{}'",
                    guide.slug, guide.category
                )));
            }
            if !page_keys.insert((guide.category.as_str(), guide.slug.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page '{}/{}'",
                    guide.category, guide.slug
                )));
            }
        }

        Ok(())
    }
}

/// Product ids are matched exactly, so a blank or padded id could never be
/// found by the resolution pipeline.
pub(crate) fn check_product_id(id: &str, context: &str) -> Result<(), ConfigError> {
    if id.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "empty product_id in '{context}'"
        )));
    }
    if id.trim() != id {
        return Err(ConfigError::Validation(format!(
            "product_id '{id}' in '{context}' has leading or trailing whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
