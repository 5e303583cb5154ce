use crate::utils::error::{DeskError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(DeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// Parses user-entered amount text. Surrounding whitespace is ignored; NaN and
/// infinities are refused since they would poison every running total they touch.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(DeskError::InvalidAmount {
            input: text.to_string(),
        }),
    }
}
