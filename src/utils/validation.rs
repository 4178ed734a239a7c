use crate::utils::error::{PageError, Result};
use crate::utils::selector::Selector;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    Selector::parse(selector).map_err(|e| PageError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: selector.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

pub fn validate_marker(field_name: &str, class: &str) -> Result<()> {
    if class.trim().is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: class.to_string(),
            reason: "Marker class cannot be empty".to_string(),
        });
    }
    if class.chars().any(char::is_whitespace) {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: class.to_string(),
            reason: "Marker class cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unit_interval(field_name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}
