use aru365_core::{load_catalog, load_snapshot, AffiliateLinks, AppConfig};

/// Loads both data files (which runs their validation) and reports catalog
/// product ids the snapshot cannot back.
///
/// # Errors
///
/// Returns an error if either file fails to load or any catalog product id
/// is missing from the snapshot.
pub(crate) fn run_check(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.catalog_path)?;
    let snapshot = load_snapshot(
        &config.snapshot_path,
        AffiliateLinks::from_app_config(config),
    )?;

    let product_ids = catalog.product_ids();
    let missing: Vec<&str> = product_ids
        .iter()
        .copied()
        .filter(|id| !snapshot.contains(id))
        .collect();

    println!(
        "catalog: {} pillars, {} pages, {} product ids",
        catalog.pillars().len(),
        catalog.page_paths().len(),
        product_ids.len()
    );
    println!("snapshot: {} products", snapshot.len());
    for pillar in catalog.pillars() {
        let featured = catalog.pillar_product_ids(&pillar.slug);
        if featured.is_empty() {
            continue;
        }
        let backed = snapshot.summaries(featured, &pillar.slug);
        println!(
            "  {}: {}/{} featured products backed",
            pillar.slug,
            backed.len(),
            featured.len()
        );
    }

    if missing.is_empty() {
        println!("ok: every catalog product has a snapshot entry");
        return Ok(());
    }

    for id in &missing {
        println!("missing from snapshot: {id}");
    }
    anyhow::bail!("{} catalog product id(s) have no snapshot entry", missing.len())
}
