//! Field formatters for human-readable output

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatMode {
    /// Raw values (TLV values as hex)
    Raw,
    /// Human-readable formatted output
    Human,
    /// JSON document on stdout
    Json,
}

impl FormatMode {
    pub fn description(&self) -> &'static str {
        match self {
            FormatMode::Raw => "Raw",
            FormatMode::Human => "Human-Readable",
            FormatMode::Json => "JSON",
        }
    }
}

/// Format a top-level field value based on its tag
pub fn format_value(tag: &str, value: &str, mode: &FormatMode) -> String {
    if *mode == FormatMode::Raw {
        return hex::encode_upper(value.as_bytes());
    }

    match tag {
        // Point of Initiation Method
        "01" => match value {
            "11" => "11 (Static)".to_string(),
            "12" => "12 (Dynamic)".to_string(),
            _ => value.to_string(),
        },

        // Transaction Currency (ISO 4217 numeric)
        "53" => match value.parse::<u16>().ok().and_then(get_currency_name) {
            Some(currency) => format!("{} ({})", value, currency),
            None => format!("Currency Code {}", value),
        },

        // Country Code (ISO 3166-1 alpha-2)
        "58" => match get_country_name(value) {
            Some(country) => format!("{} ({})", value, country),
            None => value.to_string(),
        },

        // Empty values are legal; make them visible
        _ if value.is_empty() => "(empty)".to_string(),

        _ => value.to_string(),
    }
}

/// ISO 3166-1 alpha-2 country codes (subset)
fn get_country_name(code: &str) -> Option<&'static str> {
    match code {
        "TH" => Some("Thailand"),
        "IN" => Some("India"),
        "SG" => Some("Singapore"),
        "MY" => Some("Malaysia"),
        "ID" => Some("Indonesia"),
        "VN" => Some("Vietnam"),
        "KH" => Some("Cambodia"),
        "LA" => Some("Laos"),
        "MM" => Some("Myanmar"),
        "PH" => Some("Philippines"),
        _ => None,
    }
}

/// ISO 4217 numeric currency codes (subset)
fn get_currency_name(code: u16) -> Option<&'static str> {
    match code {
        764 => Some("THB (Thai Baht)"),
        356 => Some("INR (Indian Rupee)"),
        702 => Some("SGD (Singapore Dollar)"),
        458 => Some("MYR (Malaysian Ringgit)"),
        360 => Some("IDR (Indonesian Rupiah)"),
        704 => Some("VND (Vietnamese Dong)"),
        116 => Some("KHR (Cambodian Riel)"),
        418 => Some("LAK (Lao Kip)"),
        104 => Some("MMK (Myanmar Kyat)"),
        608 => Some("PHP (Philippine Peso)"),
        840 => Some("USD (US Dollar)"),
        _ => None,
    }
}
