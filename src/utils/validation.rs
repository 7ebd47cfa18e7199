use crate::utils::error::{RentalError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Longest rental the desk will open.
pub const MAX_RENTAL_DAYS: u32 = 3650;

/// Highest per-day rate a fleet file may set.
pub const MAX_PRICE_PER_DAY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RentalError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(RentalError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(RentalError::ValidationError {
            field: field_name.to_string(),
            value: amount.to_string(),
            reason: "amount cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RentalError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_rental_days(days: u32) -> Result<()> {
    validate_range("rental days", days, 1, MAX_RENTAL_DAYS)
}

pub fn validate_price_per_day(field_name: &str, amount: Decimal) -> Result<()> {
    validate_non_negative_amount(field_name, amount)?;
    validate_range(field_name, amount, Decimal::ZERO, MAX_PRICE_PER_DAY)
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RentalError::ValidationError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

/// Parses a rental duration typed at the console.
pub fn parse_days(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let days = trimmed
        .parse::<u32>()
        .map_err(|_| RentalError::ValidationError {
            field: "rental days".to_string(),
            value: trimmed.to_string(),
            reason: "expected a whole number of days".to_string(),
        })?;
    validate_rental_days(days)?;
    Ok(days)
}
