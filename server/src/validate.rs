//! Form-input validation shared by the create/update handlers. A failed
//! check surfaces as a 400 with a field-level message and the request is
//! not applied.

use crate::api::ApiError;
use bigdecimal::BigDecimal;

/// Require a non-empty value for `field`, returning it trimmed.
pub fn non_empty(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

pub fn non_negative_price(price: &BigDecimal) -> Result<(), ApiError> {
    if price < &BigDecimal::from(0) {
        return Err(ApiError::Validation(
            "price cannot be negative".to_string(),
        ));
    }
    Ok(())
}

pub fn non_negative_years(years: i32) -> Result<(), ApiError> {
    if years < 0 {
        return Err(ApiError::Validation(
            "years of experience cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::FromPrimitive;

    #[test]
    fn test_non_empty_trims_and_accepts() {
        assert_eq!(non_empty("name", "  Cake ").unwrap(), "Cake");
    }

    #[test]
    fn test_non_empty_rejects_blank_input() {
        assert!(non_empty("name", "").is_err());
        assert!(non_empty("name", "   ").is_err());
    }

    #[test]
    fn test_price_must_not_be_negative() {
        assert!(non_negative_price(&BigDecimal::from_f64(5.00).unwrap()).is_ok());
        assert!(non_negative_price(&BigDecimal::from(0)).is_ok());
        assert!(non_negative_price(&BigDecimal::from_f64(-0.01).unwrap()).is_err());
    }

    #[test]
    fn test_years_must_not_be_negative() {
        assert!(non_negative_years(0).is_ok());
        assert!(non_negative_years(12).is_ok());
        assert!(non_negative_years(-1).is_err());
    }
}
