//! Application-level configuration constants.

// URL state
pub const QUERY_PARAM: &str = "values";

// UI Behavior
pub const COPIED_RESET_MS: u32 = 2_000;

// Invoice numbering is filled in by hand after copying.
pub const INVOICE_NUMBER_PLACEHOLDER: &str = "XXXXXXXX";

// Form fields: labels and placeholders
pub const USD_PER_HOUR_LABEL: &str = "Valor por hora (USD)";
pub const USD_PER_HOUR_PLACEHOLDER: &str = "45";
pub const USD_PRICE_IN_BRL_LABEL: &str = "Cotação do dia";
pub const USD_PRICE_IN_BRL_PLACEHOLDER: &str = "5.40";
pub const BRL_TOTAL_VALUE_LABEL: &str = "Valor total (BRL)";
pub const BRL_TOTAL_VALUE_PLACEHOLDER: &str = "20000";

// Page shell
pub const BRAND: &str = "Playground";
pub const PAGE_TITLE: &str = "Invoice Helper";
pub const PAGE_SUBTITLE: &str = "Generate a invoice description providing a few inputs.";

/// Header navigation entries as (label, href).
pub const NAV_LINKS: &[(&str, &str)] = &[("Invoice helper", "/")];

// Locale
pub const DEFAULT_LOCALE: &str = "pt-BR";
