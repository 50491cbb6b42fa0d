//! Shared domain types, configuration, and read-only editorial data for Aru365.
//!
//! Nothing in this crate performs I/O beyond reading the two data files at
//! startup; everything after loading is immutable and safe to share across
//! concurrent renders behind an `Arc`.

pub mod app_config;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod products;
pub mod snapshot;

pub use app_config::{AppConfig, Environment};
pub use booking::AffiliateLinks;
pub use catalog::{
    load_catalog, Catalog, Faq, Guide, GuidePick, PagePath, Pillar, TextBlock, TourListing,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{is_usable, ItineraryStop, ProductDetail, ProductSummary};
pub use snapshot::{load_snapshot, Snapshot, SnapshotEntry, SnapshotVariant};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read data file {path}: {source}")]
    DataFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse data file: {0}")]
    DataFileParse(#[from] serde_yaml::Error),

    #[error("data validation failed: {0}")]
    Validation(String),
}
