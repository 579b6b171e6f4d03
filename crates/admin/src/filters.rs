//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Low-stock badge text.
///
/// Usage in templates: `{{ product.available|stock_left }}` renders `4 left`.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn stock_left(quantity: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{quantity} left"))
}

/// Placeholder for blank optional columns.
///
/// Usage in templates: `{{ customer.contact_number|or_na }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn or_na(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let value = value.to_string();
    if value.trim().is_empty() {
        Ok("N/A".to_string())
    } else {
        Ok(value)
    }
}
