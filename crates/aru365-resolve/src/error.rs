use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// No pillar, guide, or listing exists at the requested path.
    #[error("no page for category '{category}' (slug: {slug:?})")]
    NotFound {
        category: String,
        slug: Option<String>,
    },
}

impl ResolveError {
    pub(crate) fn not_found(category: &str, slug: Option<&str>) -> Self {
        Self::NotFound {
            category: category.to_string(),
            slug: slug.map(str::to_string),
        }
    }
}
