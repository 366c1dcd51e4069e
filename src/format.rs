//! Locale-aware number and currency rendering.
//!
//! The locale conventions and the currency symbols are explicit
//! configuration rather than being baked into the formatting code.

use crate::config::DEFAULT_LOCALE;
use log::warn;
use std::borrow::Cow;
use std::fmt;

/// Maximum fraction digits kept by [`FormatConfig::format_number`].
const MAX_NUMBER_FRACTION_DIGITS: usize = 3;
const CURRENCY_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Brl,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Digit grouping and decimal conventions of a display locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub tag: String,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Placed between a currency symbol and the amount.
    pub symbol_separator: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencySpec {
    pub currency: Currency,
    pub symbol: String,
}

/// Display locale plus the set of currencies it knows how to label.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub locale: Locale,
    pub currencies: Vec<CurrencySpec>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl FormatConfig {
    /// Brazilian Portuguese conventions with USD and BRL labels.
    pub fn pt_br() -> Self {
        Self {
            locale: Locale {
                tag: DEFAULT_LOCALE.to_string(),
                group_separator: '.',
                decimal_separator: ',',
                symbol_separator: '\u{a0}',
            },
            currencies: vec![
                CurrencySpec {
                    currency: Currency::Usd,
                    symbol: "US$".to_string(),
                },
                CurrencySpec {
                    currency: Currency::Brl,
                    symbol: "R$".to_string(),
                },
            ],
        }
    }

    /// Symbol for `currency`, or its ISO code when the configuration has none.
    pub fn symbol(&self, currency: Currency) -> Cow<'_, str> {
        match self.currencies.iter().find(|c| c.currency == currency) {
            Some(spec) => Cow::Borrowed(spec.symbol.as_str()),
            None => {
                warn!(
                    "currency {} is not configured for locale {}, using its code",
                    currency, self.locale.tag
                );
                Cow::Borrowed(currency.code())
            }
        }
    }

    /// Grouped number with up to three fraction digits, trailing zeros trimmed.
    pub fn format_number(&self, value: f64) -> String {
        let (negative, int_part, frac_part) = split_fixed(value, MAX_NUMBER_FRACTION_DIGITS);
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(&int_part, self.locale.group_separator));
        if !frac_part.is_empty() {
            out.push(self.locale.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    /// Currency amount with symbol and exactly two decimals, e.g. `R$ 20.000,00`.
    pub fn format_currency(&self, value: f64, currency: Currency) -> String {
        let (negative, int_part, frac_part) = split_fixed(value, CURRENCY_FRACTION_DIGITS);

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol(currency));
        out.push(self.locale.symbol_separator);
        out.push_str(&group_digits(&int_part, self.locale.group_separator));
        out.push(self.locale.decimal_separator);
        out.push_str(&frac_part);
        out
    }
}

/// Rounds `value` to `digits` fraction digits and splits it into sign, integer
/// digits and fraction digits. Values that round to zero are never negative.
fn split_fixed(value: f64, digits: usize) -> (bool, String, String) {
    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, String::new()),
    };
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
    (value.is_sign_negative() && !is_zero, int_part, frac_part)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
