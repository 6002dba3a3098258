//! Normalization of user-supplied form values.
//!
//! Names are trimmed and must be non-empty. Prices arrive either as numbers
//! or as raw form text; text is coerced the way numeric form fields are
//! (surrounding whitespace ignored) and must end up finite. Blank text means
//! zero when creating, but is rejected when changing an existing price.

use crate::error::ApiError;

pub const INVALID_PRICE: &str = "Must be a valid number";

/// A price as handed over by the caller, before coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for PriceInput<'_> {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl<'a> From<&'a str> for PriceInput<'a> {
    fn from(value: &'a str) -> Self {
        PriceInput::Text(value)
    }
}

impl<'a> From<&'a String> for PriceInput<'a> {
    fn from(value: &'a String) -> Self {
        PriceInput::Text(value)
    }
}

/// Trim `value` and reject it when nothing is left.
pub fn normalize_name(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Like `coerce_price`, but blank text is an error instead of zero.
pub fn require_price(input: PriceInput<'_>) -> Result<f64, ApiError> {
    if let PriceInput::Text(text) = input {
        if text.trim().is_empty() {
            return Err(ApiError::Validation(INVALID_PRICE.to_string()));
        }
    }
    coerce_price(input)
}

/// Coerce a price to a finite `f64`.
pub fn coerce_price(input: PriceInput<'_>) -> Result<f64, ApiError> {
    let value = match input {
        PriceInput::Number(n) => n,
        PriceInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>()
                    .map_err(|_| ApiError::Validation(INVALID_PRICE.to_string()))?
            }
        }
    };
    if !value.is_finite() {
        return Err(ApiError::Validation(INVALID_PRICE.to_string()));
    }
    Ok(value)
}
