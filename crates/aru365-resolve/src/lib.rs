//! Product resolution pipeline for Aru365 pages.
//!
//! Merges editorial records with live marketplace data, falling back per
//! product to the static snapshot, and assembles the page models handed to
//! the renderer. Marketplace failures never escape this crate; the only
//! error a caller sees is an unknown category or slug.

pub mod error;
pub mod marketplace;
pub mod meta;
pub mod pages;
pub mod pipeline;
pub mod providers;
pub mod resolver;

pub use error::ResolveError;
pub use marketplace::{marketplace_from_config, MarketplaceApi, OfflineMarketplace};
pub use meta::{PageMeta, DEFAULT_OG_IMAGE};
pub use pages::{
    GuidePage, GuidePickCard, Link, ListingPage, Page, PillarPage, ProductCard, RelatedListing,
};
pub use pipeline::{dedup_preserving_order, resolve_summaries};
pub use providers::{
    LiveProvider, PlaceholderProvider, ProviderChain, SnapshotProvider, SummaryProvider,
};
pub use resolver::Resolver;
