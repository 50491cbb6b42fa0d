//! Page resolution commands.

use aru365_core::Catalog;
use aru365_resolve::{GuidePage, GuidePickCard, ListingPage, Page, PillarPage, Resolver};
use serde::Serialize;

pub(crate) async fn run_pillar(resolver: &Resolver, slug: &str, json: bool) -> anyhow::Result<()> {
    let page = resolver.resolve_pillar(slug).await?;
    if json {
        return print_json(&page);
    }
    print_pillar(&page);
    Ok(())
}

pub(crate) async fn run_page(
    resolver: &Resolver,
    category: &str,
    slug: &str,
    json: bool,
) -> anyhow::Result<()> {
    let page = resolver.resolve_page(category, slug).await?;
    if json {
        return print_json(&page);
    }
    match &page {
        Page::Guide(guide) => print_guide(guide),
        Page::Listing(listing) => print_listing(listing),
    }
    Ok(())
}

pub(crate) fn run_paths(catalog: &Catalog) {
    for path in catalog.page_paths() {
        println!("{}", path.path());
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_pillar(page: &PillarPage) {
    println!("{}", page.meta.title);
    println!("book: {}", page.book_url);
    let Some(featured) = &page.featured else {
        println!("no featured products");
        return;
    };
    println!();
    println!("{:<18}{:<14}TITLE", "PRODUCT", "PRICE");
    for card in featured {
        println!(
            "{:<18}{:<14}{}",
            card.summary.product_id, card.summary.price_display, card.summary.title
        );
        println!("{:<32}-> {}", "", card.href);
    }
}

fn print_guide(page: &GuidePage) {
    println!("{}", page.meta.title);
    println!();
    for (idx, card) in page.picks.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, pick_label(card));
    }
    if !page.related_guides.is_empty() {
        println!();
        println!("related:");
        for link in &page.related_guides {
            println!("  {} ({})", link.label, link.href);
        }
    }
}

/// One line per pick. A pick can lack a listing entirely, or have a listing
/// whose product neither the marketplace nor the snapshot knows.
pub(crate) fn pick_label(card: &GuidePickCard) -> String {
    match (&card.listing, &card.tour) {
        (_, Some(tour)) => format!("{} [{}]", tour.title, tour.price_display),
        (Some(listing), None) => format!("{} (no product data)", listing.display_title()),
        (None, None) => format!("(no listing for '{}')", card.pick.slug),
    }
}

fn print_listing(page: &ListingPage) {
    println!("{}", page.meta.title);
    println!(
        "{} [{}] {}",
        page.primary.title, page.primary.price_display, page.primary.booking_url
    );
    if let Some(itinerary) = &page.itinerary {
        println!();
        println!("itinerary:");
        for stop in itinerary {
            println!("  - {}: {}", stop.stop, stop.description);
        }
    }
    if !page.related.is_empty() {
        println!();
        println!("related:");
        for related in &page.related {
            println!(
                "  {} ({})",
                related.listing.display_title(),
                related.booking_url
            );
        }
    }
}
