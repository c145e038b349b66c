use std::path::Path;

use samudra_core::{load_catalog, paginate};

pub(crate) fn run_gallery(path: &Path, page: usize, page_size: usize) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;
    let page = paginate(catalog.gallery(), page, page_size)?;

    if page.total_pages == 0 {
        println!("gallery is empty");
        return Ok(());
    }
    if page.items.is_empty() {
        println!(
            "page {} is past the end; the gallery has {} page(s)",
            page.page, page.total_pages
        );
        return Ok(());
    }

    println!("{:<5}{:<40}CATEGORY", "ID", "TITLE");
    for item in page.items {
        println!("{:<5}{:<40}{}", item.id, item.title, item.category);
    }
    println!("\npage {} of {}", page.page, page.total_pages);
    Ok(())
}
