//! `<head>` metadata for each page kind.

use serde::Serialize;

use aru365_core::{Guide, Pillar, TourListing};

/// Share image used on every page.
pub const DEFAULT_OG_IMAGE: &str = "https://soaacpusdhyxwucjhhpy.supabase.co/storage/v1/object/public/aru365/aru365%20tours%20and%20excursions%20in%20aruba.png";

const SITE_NAME: &str = "Aru365";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
}

impl PageMeta {
    #[must_use]
    pub fn for_pillar(pillar: &Pillar, site_url: &str) -> Self {
        Self {
            title: format!("Book {} | {SITE_NAME}", pillar.title),
            description: format!(
                "{} Compare options and book with free cancellation.",
                pillar.description
            ),
            canonical_url: format!("{site_url}/{}", pillar.slug),
            og_image: DEFAULT_OG_IMAGE.to_string(),
        }
    }

    #[must_use]
    pub fn for_guide(guide: &Guide, category_title: &str, site_url: &str) -> Self {
        Self {
            title: format!("{} | {category_title} | {SITE_NAME}", guide.title),
            description: guide.description.clone(),
            canonical_url: format!("{site_url}/{}/{}", guide.category, guide.slug),
            og_image: DEFAULT_OG_IMAGE.to_string(),
        }
    }

    #[must_use]
    pub fn for_listing(listing: &TourListing, category_title: &str, site_url: &str) -> Self {
        Self {
            title: format!(
                "{} | {category_title} | {SITE_NAME}",
                listing.display_title()
            ),
            description: listing.meta_description.clone(),
            canonical_url: format!("{site_url}/{}/{}", listing.category, listing.slug),
            og_image: DEFAULT_OG_IMAGE.to_string(),
        }
    }
}
