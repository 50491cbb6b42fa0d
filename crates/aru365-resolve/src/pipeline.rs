//! Bulk resolution: live data first, snapshot for whatever is missing.

use std::collections::HashSet;

use aru365_core::{AffiliateLinks, ProductSummary, Snapshot};
use aru365_viator::ViatorError;

use crate::marketplace::MarketplaceApi;
use crate::providers::{LiveProvider, ProviderChain, SnapshotProvider};

/// De-duplicates ids, keeping the first occurrence of each. Blank ids are dropped.
pub fn dedup_preserving_order<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter_map(|id| {
            let id = id.as_ref().trim();
            (!id.is_empty() && seen.insert(id.to_string())).then(|| id.to_string())
        })
        .collect()
}

/// Resolves summaries for `product_ids` as shown on a category or guide page.
///
/// 1. De-duplicate ids, keeping first-seen order; an empty set makes no call.
/// 2. Fetch all ids from the marketplace in one batch. A failed fetch counts
///    as "every id missing" and is logged, never returned.
/// 3. Per id, take the usable live summary, else the snapshot's entry for
///    `(id, category)`. Ids neither source knows are omitted.
/// 4. Order by the requested ids; live summaries nobody asked for go last.
/// 5. Rewrite every booking URL to the canonical affiliate URL.
pub async fn resolve_summaries(
    marketplace: &dyn MarketplaceApi,
    snapshot: &Snapshot,
    links: &AffiliateLinks,
    category: &str,
    product_ids: &[String],
) -> Vec<ProductSummary> {
    let ids = dedup_preserving_order(product_ids);
    if ids.is_empty() {
        return Vec::new();
    }

    let live = live_provider("live", category, &ids, marketplace.bulk_summaries(&ids).await);
    let snapshot = SnapshotProvider::new(snapshot, category);
    let chain = ProviderChain::new().then(&live).then(&snapshot);

    merge_in_order(&chain, &live, &ids, links)
}

/// Turns a bulk fetch outcome into a provider, logging the fallback decision.
pub(crate) fn live_provider(
    name: &'static str,
    category: &str,
    requested: &[String],
    result: Result<Vec<ProductSummary>, ViatorError>,
) -> LiveProvider {
    match result {
        Ok(summaries) => {
            let live = LiveProvider::new(name, summaries);
            if live.len() < requested.len() {
                tracing::debug!(
                    category,
                    requested = requested.len(),
                    live = live.len(),
                    "live response incomplete; topping up from snapshot"
                );
            }
            live
        }
        Err(ViatorError::NotConfigured) => {
            tracing::debug!(category, "marketplace offline; using snapshot");
            LiveProvider::empty(name)
        }
        Err(e) => {
            tracing::warn!(
                category,
                requested = requested.len(),
                error = %e,
                "marketplace bulk fetch failed; using snapshot"
            );
            LiveProvider::empty(name)
        }
    }
}

fn merge_in_order(
    chain: &ProviderChain<'_>,
    live: &LiveProvider,
    ids: &[String],
    links: &AffiliateLinks,
) -> Vec<ProductSummary> {
    let requested: HashSet<&str> = ids.iter().map(String::as_str).collect();

    let mut merged: Vec<ProductSummary> = ids.iter().filter_map(|id| chain.resolve(id)).collect();
    merged.extend(live.unrequested(&requested).cloned());

    for summary in &mut merged {
        summary.booking_url = links.product_booking_url(&summary.product_id);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(
            dedup_preserving_order(["B", "A", "B", " ", "C", "A"]),
            ["B", "A", "C"]
        );
    }

    #[test]
    fn dedup_trims_ids() {
        assert_eq!(dedup_preserving_order([" A", "A "]), ["A"]);
    }
}
