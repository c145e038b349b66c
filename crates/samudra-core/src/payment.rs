//! Checkout payload for the simulated payment flow, plus the input masks the
//! card form applies as the customer types.

use serde::{Deserialize, Serialize};

use crate::forms::{require, validate_email, Acknowledgement};
use crate::pricing::{OrderTotals, PaymentMode};
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Card,
    BankTransfer,
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentRequest {
    pub product_id: String,
    pub size_label: String,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub mode: PaymentMode,
    #[serde(default)]
    pub method: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub cvv: Option<String>,
}

impl PaymentRequest {
    /// Checks contact and delivery details, and card details when paying by card.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("product_id", &self.product_id)?;
        require("size_label", &self.size_label)?;
        validate_email(&self.email)?;
        require("phone", &self.phone)?;
        require("address", &self.address)?;
        require("city", &self.city)?;
        require("postal_code", &self.postal_code)?;

        if self.method == PaymentMethod::Card {
            let number = self.card_number.as_deref().unwrap_or_default();
            let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
            if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(CoreError::validation("card number must be 16 digits"));
            }
            require("card_name", self.card_name.as_deref().unwrap_or_default())?;
            validate_expiry(self.expiry_date.as_deref().unwrap_or_default())?;
            let cvv = self.cvv.as_deref().unwrap_or_default();
            if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
                return Err(CoreError::validation("cvv must be 3 or 4 digits"));
            }
        }

        Ok(())
    }
}

/// The toast shown once the simulated payment completes.
#[must_use]
pub fn payment_acknowledgement(totals: &OrderTotals) -> Acknowledgement {
    match totals.mode {
        PaymentMode::Advance => Acknowledgement::new(
            "Advance Payment Successful!",
            format!(
                "Your advance payment of {} has been processed. Remaining {} to be paid on delivery.",
                format_rupees(totals.advance_amount),
                format_rupees(totals.remaining_amount)
            ),
        ),
        PaymentMode::Full => Acknowledgement::new(
            "Payment Successful!",
            "Your order has been placed successfully. We'll send you a confirmation email shortly.",
        ),
    }
}

/// `45000` becomes `"Rs. 45,000"`.
#[must_use]
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("Rs. {grouped}")
}

/// Mask a card number as typed: digits only, grouped in fours, at most 16.
///
/// Fewer than four digits are returned ungrouped.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return digits;
    }

    let digits: Vec<char> = digits.chars().take(16).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mask an expiry date as typed into `MM/YY`.
#[must_use]
pub fn format_expiry_date(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 2 {
        return digits;
    }
    let year: String = digits.chars().skip(2).take(2).collect();
    format!("{}/{year}", &digits[..2])
}

fn validate_expiry(value: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::validation("expiry date must be MM/YY");
    let (month, year) = value.trim().split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    match month.parse::<u8>() {
        Ok(1..=12) => Ok(()),
        _ => Err(invalid()),
    }
}
