//! Invoice helper core: input model, derivation and invoice text rendering.
//!
//! Everything in this crate target is pure and runs natively; the browser
//! glue lives in the binary.

use log::debug;
use std::fmt;

pub mod config;
pub mod copy_feedback;
pub mod form;
pub mod format;
pub mod schema;
pub mod url_state;

pub use format::{Currency, FormatConfig};

use config::INVOICE_NUMBER_PLACEHOLDER;

/// One of the three user supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    UsdPerHour,
    UsdPriceInBrl,
    BrlTotalValue,
}

impl Field {
    /// All fields in the order the form renders them.
    pub const ALL: [Field; 3] = [Field::UsdPriceInBrl, Field::UsdPerHour, Field::BrlTotalValue];

    /// Key used in the serialized URL state.
    pub fn key(self) -> &'static str {
        match self {
            Field::UsdPerHour => "usdPerHour",
            Field::UsdPriceInBrl => "usdPriceInBrl",
            Field::BrlTotalValue => "brlTotalValue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::UsdPerHour => config::USD_PER_HOUR_LABEL,
            Field::UsdPriceInBrl => config::USD_PRICE_IN_BRL_LABEL,
            Field::BrlTotalValue => config::BRL_TOTAL_VALUE_LABEL,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::UsdPerHour => config::USD_PER_HOUR_PLACEHOLDER,
            Field::UsdPriceInBrl => config::USD_PRICE_IN_BRL_PLACEHOLDER,
            Field::BrlTotalValue => config::BRL_TOTAL_VALUE_PLACEHOLDER,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validated invoice inputs. Every field is a finite number greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceInputs {
    /// Hourly billing rate in USD.
    pub usd_per_hour: f64,
    /// Exchange rate: BRL per 1 USD.
    pub usd_price_in_brl: f64,
    /// Total invoice amount in BRL.
    pub brl_total_value: f64,
}

impl InvoiceInputs {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::UsdPerHour => self.usd_per_hour,
            Field::UsdPriceInBrl => self.usd_price_in_brl,
            Field::BrlTotalValue => self.brl_total_value,
        }
    }
}

/// Live snapshot of the form while the user is typing.
///
/// A field is `Some` whenever its text coerces to a finite number, whatever
/// its sign; positivity is only demanded by [`InvoiceDraft::complete`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvoiceDraft {
    pub usd_per_hour: Option<f64>,
    pub usd_price_in_brl: Option<f64>,
    pub brl_total_value: Option<f64>,
}

impl InvoiceDraft {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::UsdPerHour => self.usd_per_hour,
            Field::UsdPriceInBrl => self.usd_price_in_brl,
            Field::BrlTotalValue => self.brl_total_value,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::UsdPerHour => self.usd_per_hour = value,
            Field::UsdPriceInBrl => self.usd_price_in_brl = value,
            Field::BrlTotalValue => self.brl_total_value = value,
        }
    }

    /// Returns the validated inputs when all three fields are strictly positive.
    pub fn complete(&self) -> Option<InvoiceInputs> {
        let positive = |v: Option<f64>| v.filter(|n| n.is_finite() && *n > 0.0);
        Some(InvoiceInputs {
            usd_per_hour: positive(self.usd_per_hour)?,
            usd_price_in_brl: positive(self.usd_price_in_brl)?,
            brl_total_value: positive(self.brl_total_value)?,
        })
    }
}

impl From<InvoiceInputs> for InvoiceDraft {
    fn from(inputs: InvoiceInputs) -> Self {
        Self {
            usd_per_hour: Some(inputs.usd_per_hour),
            usd_price_in_brl: Some(inputs.usd_price_in_brl),
            brl_total_value: Some(inputs.brl_total_value),
        }
    }
}

/// Quantities derived from [`InvoiceInputs`]. Partial dollars and hours are
/// dropped, so both are whole numbers; they stay `f64` to keep the full range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    pub usd_total_value: f64,
    pub total_hours: f64,
}

/// Converts the BRL total to whole dollars, then to whole hours.
pub fn derive(inputs: &InvoiceInputs) -> Derivation {
    let usd_total_value = (inputs.brl_total_value / inputs.usd_price_in_brl).floor();
    let total_hours = (usd_total_value / inputs.usd_per_hour).floor();
    Derivation {
        usd_total_value,
        total_hours,
    }
}

/// Renders the invoice description, or an empty string while the draft is incomplete.
pub fn derive_invoice_text(draft: &InvoiceDraft, config: &FormatConfig) -> String {
    let Some(inputs) = draft.complete() else {
        return String::new();
    };
    let derived = derive(&inputs);
    debug!(
        "derived {} USD / {} hours from {:?}",
        derived.usd_total_value, derived.total_hours, inputs
    );

    format!(
        "Desenvolvimento de sistemas - {hours}hrs - {rate} a hora - {usd_total} \n\
         Cotação do dia: {exchange} \n\
         Valor em moeda nacional: {brl_total} \n\
         Invoice nº {invoice}",
        hours = config.format_number(derived.total_hours),
        rate = config.format_currency(inputs.usd_per_hour, Currency::Usd),
        usd_total = config.format_currency(derived.usd_total_value, Currency::Usd),
        exchange = config.format_currency(inputs.usd_price_in_brl, Currency::Brl),
        brl_total = config.format_currency(inputs.brl_total_value, Currency::Brl),
        invoice = INVOICE_NUMBER_PLACEHOLDER,
    )
}
