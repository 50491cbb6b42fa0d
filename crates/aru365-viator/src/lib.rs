//! Client for the Viator Partner API (v2) product endpoints.
//!
//! Only the two calls the site needs are wrapped: bulk product summaries and
//! single-product detail. Responses are normalized into the shared
//! [`aru365_core::ProductSummary`] / [`aru365_core::ProductDetail`] types.
//! Each call is a single attempt; fallback on failure belongs to the caller.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::ViatorClient;
pub use error::ViatorError;
pub use normalize::{normalize_detail, normalize_summary};
pub use types::{ViatorProduct, ViatorProductDetail};
