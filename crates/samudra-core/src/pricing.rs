//! Order totals for the checkout modal.
//!
//! The advance amount rounds half up, and the remaining balance is always
//! derived as `full_total - advance_amount`, so the two parts sum exactly to
//! the full total even when it is odd.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::products::Product;
use crate::CoreError;

/// Flat delivery charge added to every order, in whole currency units.
pub const DELIVERY_FEE: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Pay the whole total now.
    #[default]
    Full,
    /// Pay half now, the rest on delivery.
    Advance,
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Full => write!(f, "full"),
            PaymentMode::Advance => write!(f, "advance"),
        }
    }
}

impl FromStr for PaymentMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PaymentMode::Full),
            "advance" => Ok(PaymentMode::Advance),
            other => Err(CoreError::InvalidInput(format!(
                "payment mode must be 'full' or 'advance', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub mode: PaymentMode,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub full_total: u64,
    pub advance_amount: u64,
    pub remaining_amount: u64,
    pub amount_due_now: u64,
}

/// Compute delivery, totals and the amount due now for a chosen size price.
///
/// `full_total` saturates at `u64::MAX` rather than overflowing.
#[must_use]
pub fn compute_order_totals(subtotal: u64, mode: PaymentMode) -> OrderTotals {
    let full_total = subtotal.saturating_add(DELIVERY_FEE);
    let advance_amount = half_rounded_up(full_total);
    let remaining_amount = full_total - advance_amount;
    let amount_due_now = match mode {
        PaymentMode::Full => full_total,
        PaymentMode::Advance => advance_amount,
    };

    OrderTotals {
        mode,
        subtotal,
        delivery_fee: DELIVERY_FEE,
        full_total,
        advance_amount,
        remaining_amount,
        amount_due_now,
    }
}

/// Price a product at the size with the given label.
///
/// # Errors
///
/// Returns `CoreError::UnknownSize` when the product has no such size.
pub fn quote_for(
    product: &Product,
    size_label: &str,
    mode: PaymentMode,
) -> Result<OrderTotals, CoreError> {
    let size = product
        .size(size_label)
        .ok_or_else(|| CoreError::UnknownSize {
            product_id: product.id.clone(),
            label: size_label.to_string(),
        })?;
    Ok(compute_order_totals(size.price, mode))
}

// round(n * 0.5) with halves rounded up, in integer arithmetic.
fn half_rounded_up(n: u64) -> u64 {
    n / 2 + n % 2
}
