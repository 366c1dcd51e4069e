//! Validation rules for the three invoice inputs.
//!
//! Raw text and JSON values go through the same coercion: surrounding
//! whitespace is ignored, the remainder must parse as a finite number, and
//! the number must be greater than zero.

use crate::{Field, InvoiceInputs};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field is required")]
    Required,
    #[error("Field must be a number")]
    NotANumber,
    #[error("Number must be greater than 0")]
    NotPositive,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("expected an object with usdPerHour, usdPriceInBrl and brlTotalValue")]
    NotAnObject,
    #[error("invalid {field}: {source}")]
    Field {
        field: Field,
        #[source]
        source: FieldError,
    },
}

/// Coerces raw text to a finite number of any sign.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Validates the text of a single input.
pub fn validate_field(raw: &str) -> Result<f64, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let value = coerce_number(raw).ok_or(FieldError::NotANumber)?;
    ensure_positive(value)
}

/// Validates one entry of a JSON object. Strings are coerced like raw text.
pub fn validate_value(value: Option<&Value>) -> Result<f64, FieldError> {
    match value {
        None | Some(Value::Null) => Err(FieldError::Required),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or(FieldError::NotANumber)
            .and_then(ensure_positive),
        Some(Value::String(s)) => validate_field(s),
        Some(_) => Err(FieldError::NotANumber),
    }
}

/// Validates a whole JSON object, failing on the first invalid field.
pub fn parse_inputs(value: &Value) -> Result<InvoiceInputs, SchemaError> {
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
    let check = |field: Field| {
        validate_value(object.get(field.key())).map_err(|source| SchemaError::Field { field, source })
    };
    Ok(InvoiceInputs {
        usd_per_hour: check(Field::UsdPerHour)?,
        usd_price_in_brl: check(Field::UsdPriceInBrl)?,
        brl_total_value: check(Field::BrlTotalValue)?,
    })
}

fn ensure_positive(value: f64) -> Result<f64, FieldError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FieldError::NotPositive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_field_reports_each_error_kind() {
        assert_eq!(validate_field(""), Err(FieldError::Required));
        assert_eq!(validate_field("   "), Err(FieldError::Required));
        assert_eq!(validate_field("abc"), Err(FieldError::NotANumber));
        assert_eq!(validate_field("5,40"), Err(FieldError::NotANumber));
        assert_eq!(validate_field("inf"), Err(FieldError::NotANumber));
        assert_eq!(validate_field("NaN"), Err(FieldError::NotANumber));
        assert_eq!(validate_field("0"), Err(FieldError::NotPositive));
        assert_eq!(validate_field("-3"), Err(FieldError::NotPositive));
    }

    #[test]
    fn validate_field_accepts_positive_numbers() {
        assert_eq!(validate_field("45"), Ok(45.0));
        assert_eq!(validate_field(" 5.40 "), Ok(5.4));
        assert_eq!(validate_field("2e4"), Ok(20_000.0));
    }

    #[test]
    fn coerce_keeps_sign_but_drops_garbage() {
        assert_eq!(coerce_number("-2"), Some(-2.0));
        assert_eq!(coerce_number("0"), Some(0.0));
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("12abc"), None);
    }

    #[test]
    fn error_messages_match_the_form() {
        assert_eq!(FieldError::Required.to_string(), "Field is required");
        assert_eq!(FieldError::NotANumber.to_string(), "Field must be a number");
        assert_eq!(FieldError::NotPositive.to_string(), "Number must be greater than 0");
    }

    #[test]
    fn parse_inputs_accepts_numbers_and_numeric_strings() {
        let parsed = parse_inputs(&json!({
            "usdPerHour": 45,
            "usdPriceInBrl": "5.40",
            "brlTotalValue": 20000.0
        }))
        .unwrap();
        assert_eq!(
            parsed,
            InvoiceInputs {
                usd_per_hour: 45.0,
                usd_price_in_brl: 5.4,
                brl_total_value: 20_000.0,
            }
        );
    }

    #[test]
    fn parse_inputs_names_the_failing_field() {
        let err = parse_inputs(&json!({ "usdPerHour": 45, "brlTotalValue": 1 })).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Field {
                field: Field::UsdPriceInBrl,
                source: FieldError::Required,
            }
        );

        let err = parse_inputs(&json!({ "usdPerHour": 0, "usdPriceInBrl": 5, "brlTotalValue": 1 }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::Field {
                field: Field::UsdPerHour,
                source: FieldError::NotPositive,
            }
        );

        let err = parse_inputs(&json!({ "usdPerHour": true, "usdPriceInBrl": 5, "brlTotalValue": 1 }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::Field {
                field: Field::UsdPerHour,
                source: FieldError::NotANumber,
            }
        );
    }

    #[test]
    fn parse_inputs_rejects_non_objects() {
        assert_eq!(parse_inputs(&json!([1, 2, 3])), Err(SchemaError::NotAnObject));
        assert_eq!(parse_inputs(&json!(null)), Err(SchemaError::NotAnObject));
    }
}
