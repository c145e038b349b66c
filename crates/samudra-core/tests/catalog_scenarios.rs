//! End-to-end checks against the shipped `config/catalog.yaml`.
//! No network or database; the catalog file is read from the repo.

use std::path::Path;

use samudra_core::{
    compute_order_totals, filter_products, load_catalog, paginate, quote_for, Catalog, Category,
    FilterSelection, Material, PaymentMode, PriceRange,
};

fn shipped_catalog() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    load_catalog(&path).expect("shipped catalog should load")
}

fn ids(products: &[&samudra_core::Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn default_shop_view_lists_whole_catalog() {
    let catalog = shipped_catalog();
    let selection = FilterSelection::unrestricted(catalog.max_price());
    assert!(!selection.is_active(catalog.max_price()));
    assert_eq!(
        filter_products(catalog.products(), &selection).len(),
        catalog.products().len()
    );
}

#[test]
fn meditation_buddha_shown_for_mid_range_budget() {
    let catalog = shipped_catalog();
    let mut selection = FilterSelection::unrestricted(catalog.max_price());
    selection.toggle_material(Material::Dolomite);
    selection.price_range = PriceRange::new(50_000, 100_000).unwrap();
    let kept = filter_products(catalog.products(), &selection);
    assert_eq!(
        ids(&kept),
        ["dolomite-meditation-buddha", "standing-blessing-buddha"]
    );
}

#[test]
fn meditation_buddha_hidden_above_its_largest_size() {
    let catalog = shipped_catalog();
    let mut selection = FilterSelection::unrestricted(catalog.max_price());
    selection.price_range = PriceRange::new(200_000, 300_000).unwrap();
    let kept = ids(&filter_products(catalog.products(), &selection));
    assert!(!kept.contains(&"dolomite-meditation-buddha".to_string()));
    assert!(kept.contains(&"temple-buddha-large".to_string()));
}

#[test]
fn decorative_category_filter() {
    let catalog = shipped_catalog();
    let mut selection = FilterSelection::unrestricted(catalog.max_price());
    selection.toggle_category(Category::Decorative);
    assert_eq!(
        ids(&filter_products(catalog.products(), &selection)),
        ["artistic-buddha-face"]
    );
}

#[test]
fn cloth_has_no_products_yet() {
    let catalog = shipped_catalog();
    let mut selection = FilterSelection::unrestricted(catalog.max_price());
    selection.toggle_material(Material::Cloth);
    assert!(filter_products(catalog.products(), &selection).is_empty());
}

#[test]
fn advance_quote_for_three_foot_meditation_buddha() {
    let catalog = shipped_catalog();
    let product = catalog.find("dolomite-meditation-buddha").unwrap();
    let totals = quote_for(product, "3 ft", PaymentMode::Advance).unwrap();
    assert_eq!(totals, compute_order_totals(85_000, PaymentMode::Advance));
    assert_eq!(totals.full_total, 90_000);
    assert_eq!(totals.advance_amount, 45_000);
    assert_eq!(totals.remaining_amount, 45_000);
}

#[test]
fn gallery_splits_into_three_pages_of_six() {
    let catalog = shipped_catalog();
    let gallery = catalog.gallery();
    assert_eq!(gallery.len(), 18);

    let first = paginate(gallery, 1, 6).unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 6);

    let last = paginate(gallery, 3, 6).unwrap();
    assert_eq!(last.items.len(), 6);
    assert_eq!(last.items[0].id, 13);
    assert_eq!(last.items[0].title, "Temple Buddha Installation");
    assert!(!last.has_next);

    assert!(paginate(gallery, 4, 6).unwrap().items.is_empty());
}

#[test]
fn home_page_shows_four_featured() {
    let catalog = shipped_catalog();
    let featured = catalog.featured(4);
    assert_eq!(featured.len(), 4);
    assert!(featured.iter().all(|p| p.featured));
}
