//! `catalog` sub-commands: validate the catalog file and list products
//! through the same filter the shop page uses.

use std::path::Path;

use clap::Subcommand;
use samudra_core::{filter_products, load_catalog, FilterSelection, Product};

#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// Load the catalog file and report what it contains
    Validate,
    /// List products matching a filter
    List {
        /// Material to include; repeat or comma-separate for several
        #[arg(long)]
        material: Vec<String>,
        /// Category id to include; repeat or comma-separate for several
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        min_price: Option<u64>,
        #[arg(long)]
        max_price: Option<u64>,
    },
}

pub(crate) fn run(path: &Path, command: CatalogCommands) -> anyhow::Result<()> {
    match command {
        CatalogCommands::Validate => run_validate(path),
        CatalogCommands::List {
            material,
            category,
            min_price,
            max_price,
        } => run_list(path, &material, &category, min_price, max_price),
    }
}

/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed, or fails validation.
fn run_validate(path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;
    tracing::debug!(path = %path.display(), "catalog validated");

    println!("catalog OK: {}", path.display());
    println!("  products:     {}", catalog.products().len());
    println!("  featured:     {}", catalog.featured(usize::MAX).len());
    println!("  gallery:      {}", catalog.gallery().len());
    println!("  testimonials: {}", catalog.testimonials().len());
    println!("  max price:    {}", catalog.max_price());
    for count in catalog.category_counts() {
        println!("  {:<18}{}", count.name, count.product_count);
    }
    Ok(())
}

fn run_list(
    path: &Path,
    materials: &[String],
    categories: &[String],
    min_price: Option<u64>,
    max_price: Option<u64>,
) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;
    let materials: Vec<&str> = materials.iter().map(String::as_str).collect();
    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
    let selection = FilterSelection::from_query(
        &materials,
        &categories,
        min_price,
        max_price,
        catalog.max_price(),
    )?;

    let matched = filter_products(catalog.products(), &selection);
    if matched.is_empty() {
        println!("no products match; try clearing a filter");
        return Ok(());
    }

    println!("{}", list_header());
    for product in &matched {
        println!("{}", list_row(product));
    }
    println!(
        "\nshowing {} of {} products",
        matched.len(),
        catalog.products().len()
    );
    Ok(())
}

pub(crate) fn list_header() -> String {
    format!(
        "{:<30}{:<10}{:<18}{:>16}",
        "ID", "MATERIAL", "CATEGORY", "PRICE"
    )
}

pub(crate) fn list_row(product: &Product) -> String {
    let price = match (product.min_price(), product.max_price()) {
        (Some(lo), Some(hi)) if lo == hi => lo.to_string(),
        (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
        _ => "-".to_string(),
    };
    format!(
        "{:<30}{:<10}{:<18}{:>16}",
        product.id,
        product.material.as_str(),
        product.category.id(),
        price
    )
}
