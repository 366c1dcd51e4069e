//! Encoding of the form values into the `values` query parameter.
//!
//! The payload is a JSON object with all three keys. Loading is strict (the
//! whole object must validate) while saving is lenient: fields that are not
//! usable yet are written as `0` so the payload always has the same shape.

use crate::schema::{parse_inputs, SchemaError};
use crate::{Field, InvoiceDraft, InvoiceInputs};
use log::warn;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlStateError {
    #[error("malformed JSON in URL state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL state failed validation: {0}")]
    Schema(#[from] SchemaError),
}

/// Parses the raw parameter value.
pub fn try_decode(raw: &str) -> Result<InvoiceInputs, UrlStateError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(parse_inputs(&value)?)
}

/// Initial inputs from the parameter; anything unusable means an empty form.
pub fn decode(raw: Option<&str>) -> Option<InvoiceInputs> {
    let raw = raw?;
    match try_decode(raw) {
        Ok(inputs) => Some(inputs),
        Err(e) => {
            warn!("ignoring URL state {:?}: {}", raw, e);
            None
        }
    }
}

/// Wire shape of the parameter. Unlike [`InvoiceInputs`] it may hold zeros.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UrlValues {
    #[serde(serialize_with = "whole_or_fraction")]
    usd_per_hour: f64,
    #[serde(serialize_with = "whole_or_fraction")]
    usd_price_in_brl: f64,
    #[serde(serialize_with = "whole_or_fraction")]
    brl_total_value: f64,
}

impl From<&InvoiceDraft> for UrlValues {
    fn from(draft: &InvoiceDraft) -> Self {
        let or_zero = |field: Field| draft.get(field).unwrap_or(0.0);
        Self {
            usd_per_hour: or_zero(Field::UsdPerHour),
            usd_price_in_brl: or_zero(Field::UsdPriceInBrl),
            brl_total_value: or_zero(Field::BrlTotalValue),
        }
    }
}

/// Serializes the draft, writing `0` for every missing field.
pub fn encode(draft: &InvoiceDraft) -> Result<String, UrlStateError> {
    Ok(serde_json::to_string(&UrlValues::from(draft))?)
}

/// Whole numbers are written without a fraction so `45` stays `45`, not `45.0`.
fn whole_or_fraction<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < (1u64 << 53) as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
