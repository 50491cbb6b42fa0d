use super::*;

const CATALOG: &str = r#"
pillars:
  - slug: catamaran-cruises-in-aruba
    title: Catamaran Cruises in Aruba
    description: Sail and snorkel.
    product_ids: ["P1", "P2", "P9"]
  - slug: atv-and-jeep-tours-in-aruba
    title: ATV and Jeep Tours
    description: Off-road.
listings:
  - category: catamaran-cruises-in-aruba
    slug: dolphin-sail
    product_id: P1
    operator: Delphi Watersports
    angle: Open bar
    seo_title: Dolphin Catamaran Snorkel and Sail
    meta_description: Dolphin sail.
    intro: Two snorkel stops.
    why_we_recommend: One paragraph.
    who_is_this_for: ["Families", "Groups"]
  - category: catamaran-cruises-in-aruba
    slug: morning-snorkel
    product_id: P2
    operator: Red Sail Sports
    angle: Caribbean lunch
    meta_description: Morning sail.
    intro: Half-day.
  - category: catamaran-cruises-in-aruba
    slug: sunset-sail
    product_id: P3
    operator: Pelican Aruba
    angle: Sunset
    meta_description: Sunset.
    intro: Evening.
guides:
  - category: catamaran-cruises-in-aruba
    slug: morning-cruises
    title: Best Morning Cruises
    description: Early starts.
    picks:
      - slug: morning-snorkel
      - slug: dolphin-sail
  - category: catamaran-cruises-in-aruba
    slug: family-cruises
    title: Family Cruises
    description: Kids welcome.
    picks:
      - slug: dolphin-sail
  - category: catamaran-cruises-in-aruba
    slug: party-cruises
    title: Party Cruises
    description: Open bar.
    picks: []
"#;

fn catalog() -> Catalog {
    Catalog::from_yaml(CATALOG).expect("fixture catalog is valid")
}

#[test]
fn listing_lookup_by_category_and_slug() {
    let catalog = catalog();
    let listing = catalog
        .listing("catamaran-cruises-in-aruba", "dolphin-sail")
        .expect("listing exists");
    assert_eq!(listing.product_id, "P1");
    assert!(catalog.listing("atv-and-jeep-tours-in-aruba", "dolphin-sail").is_none());
    assert!(catalog.listing("catamaran-cruises-in-aruba", "nope").is_none());
}

#[test]
fn listings_by_category_preserves_authoring_order() {
    let catalog = catalog();
    let slugs: Vec<&str> = catalog
        .listings_by_category("catamaran-cruises-in-aruba")
        .into_iter()
        .map(|l| l.slug.as_str())
        .collect();
    assert_eq!(slugs, ["dolphin-sail", "morning-snorkel", "sunset-sail"]);
}

#[test]
fn listings_by_unknown_category_is_empty() {
    assert!(catalog().listings_by_category("unknown").is_empty());
}

#[test]
fn listing_by_product_id_is_scoped_to_category() {
    let catalog = catalog();
    assert_eq!(
        catalog
            .listing_by_product_id("catamaran-cruises-in-aruba", "P2")
            .map(|l| l.slug.as_str()),
        Some("morning-snorkel")
    );
    assert!(catalog
        .listing_by_product_id("atv-and-jeep-tours-in-aruba", "P2")
        .is_none());
    assert!(catalog
        .listing_by_product_id("catamaran-cruises-in-aruba", "P9")
        .is_none());
}

#[test]
fn related_guides_excludes_current_and_caps() {
    let catalog = catalog();
    let related: Vec<&str> = catalog
        .related_guides("catamaran-cruises-in-aruba", "family-cruises", 1)
        .into_iter()
        .map(|g| g.slug.as_str())
        .collect();
    assert_eq!(related, ["morning-cruises"]);

    let all: Vec<&str> = catalog
        .related_guides("catamaran-cruises-in-aruba", "morning-cruises", 3)
        .into_iter()
        .map(|g| g.slug.as_str())
        .collect();
    assert_eq!(all, ["family-cruises", "party-cruises"]);
}

#[test]
fn pillar_product_ids_empty_for_unknown_or_unfeatured() {
    let catalog = catalog();
    assert_eq!(
        catalog.pillar_product_ids("catamaran-cruises-in-aruba"),
        ["P1", "P2", "P9"]
    );
    assert!(catalog
        .pillar_product_ids("atv-and-jeep-tours-in-aruba")
        .is_empty());
    assert!(catalog.pillar_product_ids("unknown").is_empty());
}

#[test]
fn page_paths_cover_pillars_listings_and_guides() {
    let paths: Vec<String> = catalog().page_paths().iter().map(PagePath::path).collect();
    assert_eq!(
        paths,
        [
            "/catamaran-cruises-in-aruba",
            "/atv-and-jeep-tours-in-aruba",
            "/catamaran-cruises-in-aruba/dolphin-sail",
            "/catamaran-cruises-in-aruba/morning-snorkel",
            "/catamaran-cruises-in-aruba/sunset-sail",
            "/catamaran-cruises-in-aruba/morning-cruises",
            "/catamaran-cruises-in-aruba/family-cruises",
            "/catamaran-cruises-in-aruba/party-cruises",
        ]
    );
}

#[test]
fn product_ids_are_deduplicated_in_first_seen_order() {
    assert_eq!(catalog().product_ids(), ["P1", "P2", "P9", "P3"]);
}

#[test]
fn display_title_prefers_seo_title() {
    let catalog = catalog();
    let with_seo = catalog
        .listing("catamaran-cruises-in-aruba", "dolphin-sail")
        .unwrap();
    assert_eq!(with_seo.display_title(), "Dolphin Catamaran Snorkel and Sail");
    let without = catalog
        .listing("catamaran-cruises-in-aruba", "morning-snorkel")
        .unwrap();
    assert_eq!(without.display_title(), "Red Sail Sports — Caribbean lunch");
}

#[test]
fn text_block_accepts_paragraph_or_bullets() {
    let catalog = catalog();
    let listing = catalog
        .listing("catamaran-cruises-in-aruba", "dolphin-sail")
        .unwrap();
    assert_eq!(
        listing.why_we_recommend,
        Some(TextBlock::Paragraph("One paragraph.".to_string()))
    );
    assert_eq!(
        listing.who_is_this_for,
        Some(TextBlock::Bullets(vec![
            "Families".to_string(),
            "Groups".to_string()
        ]))
    );
}

#[test]
fn duplicate_listing_slug_is_rejected() {
    let yaml = r"
pillars:
  - { slug: c, title: C, description: d }
listings:
  - { category: c, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
  - { category: c, slug: a, product_id: P2, operator: o, angle: x, meta_description: m, intro: i }
";
    let err = Catalog::from_yaml(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate page")),
        "got: {err:?}"
    );
}

#[test]
fn guide_sharing_listing_path_is_rejected() {
    let yaml = r"
pillars:
  - { slug: c, title: C, description: d }
listings:
  - { category: c, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
guides:
  - { category: c, slug: a, title: t, description: d, picks: [] }
";
    assert!(matches!(
        Catalog::from_yaml(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn duplicate_product_within_category_is_rejected() {
    let yaml = r"
pillars:
  - { slug: c, title: C, description: d }
listings:
  - { category: c, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
  - { category: c, slug: b, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
";
    let err = Catalog::from_yaml(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("more than one listing")),
        "got: {err:?}"
    );
}

#[test]
fn same_product_across_categories_is_tolerated() {
    let yaml = r"
pillars:
  - { slug: c, title: C, description: d }
  - { slug: e, title: E, description: d }
listings:
  - { category: c, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
  - { category: e, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
";
    assert!(Catalog::from_yaml(yaml).is_ok());
}

#[test]
fn listing_in_unknown_category_is_rejected() {
    let yaml = r"
pillars: []
listings:
  - { category: c, slug: a, product_id: P1, operator: o, angle: x, meta_description: m, intro: i }
";
    let err = Catalog::from_yaml(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("unknown category")),
        "got: {err:?}"
    );
}

#[test]
fn padded_listing_product_id_is_rejected() {
    let yaml = r#"
pillars:
  - { slug: c, title: C, description: d }
listings:
  - { category: c, slug: a, product_id: "A ", operator: o, angle: x, meta_description: m, intro: i }
"#;
    let err = Catalog::from_yaml(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("whitespace")),
        "got: {err:?}"
    );
}

#[test]
fn padded_pillar_product_id_is_rejected() {
    let yaml = r#"
pillars:
  - { slug: c, title: C, description: d, product_ids: ["P1", " P2"] }
"#;
    let err = Catalog::from_yaml(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("' P2'")),
        "got: {err:?}"
    );
}

#[test]
fn blank_pillar_product_id_is_rejected() {
    let yaml = r#"
pillars:
  - { slug: c, title: C, description: d, product_ids: ["  "] }
"#;
    assert!(matches!(
        Catalog::from_yaml(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn dangling_guide_pick_is_not_a_load_error() {
    let yaml = r"
pillars:
  - { slug: c, title: C, description: d }
guides:
  - { category: c, slug: g, title: t, description: d, picks: [{ slug: missing }] }
";
    assert!(Catalog::from_yaml(yaml).is_ok());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_yaml("pillars: [oops"),
        Err(ConfigError::DataFileParse(_))
    ));
}

#[test]
fn load_catalog_reports_missing_file() {
    let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::DataFileIo { .. }));
}

#[test]
fn shipped_catalog_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/catalog.yaml");
    let catalog = load_catalog(&path).expect("config/catalog.yaml loads");
    assert!(!catalog.pillars().is_empty());
    assert_eq!(
        catalog
            .listings_by_category("catamaran-cruises-in-aruba")
            .len(),
        10
    );
}
