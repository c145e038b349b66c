use std::path::Path;

use samudra_core::{format_rupees, load_catalog, quote_for, OrderTotals, PaymentMode};

pub(crate) fn run_quote(
    path: &Path,
    product_id: &str,
    size_label: &str,
    advance: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(path)?;
    let product = catalog
        .find(product_id)
        .ok_or_else(|| anyhow::anyhow!("product '{product_id}' not found in catalog"))?;

    let mode = if advance {
        PaymentMode::Advance
    } else {
        PaymentMode::Full
    };
    let totals = quote_for(product, size_label, mode)?;

    println!("{} ({size_label})", product.name);
    for line in quote_lines(&totals) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn quote_lines(totals: &OrderTotals) -> Vec<String> {
    let mut lines = vec![
        format!("  {:<16}{:>14}", "Subtotal", format_rupees(totals.subtotal)),
        format!("  {:<16}{:>14}", "Delivery", format_rupees(totals.delivery_fee)),
        format!("  {:<16}{:>14}", "Total", format_rupees(totals.full_total)),
    ];
    if totals.mode == PaymentMode::Advance {
        lines.push(format!(
            "  {:<16}{:>14}",
            "Advance (50%)",
            format_rupees(totals.advance_amount)
        ));
        lines.push(format!(
            "  {:<16}{:>14}",
            "On delivery",
            format_rupees(totals.remaining_amount)
        ));
    }
    lines.push(format!(
        "  {:<16}{:>14}",
        "Due now",
        format_rupees(totals.amount_due_now)
    ));
    lines
}
