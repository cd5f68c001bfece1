//! EMV QR tag catalogue

/// EMV QR tag identifier (two decimal digits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmvQrTag(pub &'static str);

impl EmvQrTag {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Top-level payload tags
pub mod top {
    use super::EmvQrTag;

    pub const PAYLOAD_FORMAT_INDICATOR: EmvQrTag = EmvQrTag("00");
    pub const POINT_OF_INITIATION_METHOD: EmvQrTag = EmvQrTag("01");

    // Merchant account information templates
    pub const PROMPTPAY_MERCHANT_ACCOUNT: EmvQrTag = EmvQrTag("29");
    pub const PROMPTPAY_BILL_PAYMENT: EmvQrTag = EmvQrTag("30");

    // Transaction data
    pub const MERCHANT_CATEGORY_CODE: EmvQrTag = EmvQrTag("52");
    pub const TRANSACTION_CURRENCY: EmvQrTag = EmvQrTag("53");
    pub const TRANSACTION_AMOUNT: EmvQrTag = EmvQrTag("54");
    pub const TIP_OR_CONVENIENCE_INDICATOR: EmvQrTag = EmvQrTag("55");
    pub const CONVENIENCE_FEE_FIXED: EmvQrTag = EmvQrTag("56");
    pub const CONVENIENCE_FEE_PERCENTAGE: EmvQrTag = EmvQrTag("57");

    // Merchant data
    pub const COUNTRY_CODE: EmvQrTag = EmvQrTag("58");
    pub const MERCHANT_NAME: EmvQrTag = EmvQrTag("59");
    pub const MERCHANT_CITY: EmvQrTag = EmvQrTag("60");
    pub const POSTAL_CODE: EmvQrTag = EmvQrTag("61");
    pub const ADDITIONAL_DATA_FIELD_TEMPLATE: EmvQrTag = EmvQrTag("62");
    pub const CRC: EmvQrTag = EmvQrTag("63");
    pub const MERCHANT_LANGUAGE_TEMPLATE: EmvQrTag = EmvQrTag("64");
}

/// Sub-tags of the PromptPay merchant account information template
pub mod promptpay {
    use super::EmvQrTag;

    pub const APPLICATION_IDENTIFIER: EmvQrTag = EmvQrTag("00");
    pub const MOBILE_NUMBER: EmvQrTag = EmvQrTag("01");
    pub const NATIONAL_ID: EmvQrTag = EmvQrTag("02");
    pub const TAX_ID: EmvQrTag = EmvQrTag("03");
    pub const EWALLET_ID: EmvQrTag = EmvQrTag("04");
}

fn tag_number(tag: &str) -> Option<u8> {
    if tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()) {
        tag.parse().ok()
    } else {
        None
    }
}

/// Get a human-readable name for a top-level EMV QR tag
pub fn get_tag_name(tag: &str) -> &'static str {
    match tag {
        "00" => "Payload Format Indicator",
        "01" => "Point of Initiation Method",
        "29" => "Merchant Account Information (PromptPay)",
        "30" => "Merchant Account Information (PromptPay Bill Payment)",
        "52" => "Merchant Category Code",
        "53" => "Transaction Currency",
        "54" => "Transaction Amount",
        "55" => "Tip or Convenience Indicator",
        "56" => "Value of Convenience Fee Fixed",
        "57" => "Value of Convenience Fee Percentage",
        "58" => "Country Code",
        "59" => "Merchant Name",
        "60" => "Merchant City",
        "61" => "Postal Code",
        "62" => "Additional Data Field Template",
        "63" => "CRC",
        "64" => "Merchant Information - Language Template",
        _ => match tag_number(tag) {
            Some(2..=51) => "Merchant Account Information",
            Some(65..=79) => "RFU for EMVCo",
            Some(80..=99) => "Unreserved Template",
            _ => "Unknown Tag",
        },
    }
}

/// Get a human-readable name for a PromptPay template sub-tag
pub fn get_promptpay_subtag_name(tag: &str) -> &'static str {
    match tag {
        "00" => "Application Identifier (AID)",
        "01" => "Mobile Number",
        "02" => "National ID",
        "03" => "Tax ID",
        "04" => "E-Wallet ID",
        _ => "Unknown Sub-tag",
    }
}

/// Get a human-readable name for a sub-tag of the given template tag
pub fn get_subtag_name(template: &str, tag: &str) -> &'static str {
    match (template, tag) {
        ("29", _) => get_promptpay_subtag_name(tag),
        ("30", "00") => "Application Identifier (AID)",
        ("30", "01") => "Biller ID",
        ("30", "02") => "Reference 1",
        ("30", "03") => "Reference 2",
        ("62", "01") => "Bill Number",
        ("62", "02") => "Mobile Number",
        ("62", "03") => "Store Label",
        ("62", "04") => "Loyalty Number",
        ("62", "05") => "Reference Label",
        ("62", "06") => "Customer Label",
        ("62", "07") => "Terminal Label",
        ("62", "08") => "Purpose of Transaction",
        ("62", "09") => "Additional Consumer Data Request",
        ("64", "00") => "Language Preference",
        ("64", "01") => "Merchant Name - Alternate Language",
        ("64", "02") => "Merchant City - Alternate Language",
        _ => "Unknown Sub-tag",
    }
}

/// Whether a top-level tag's value is itself a TLV record set
pub fn is_template(tag: &str) -> bool {
    matches!(tag_number(tag), Some(26..=51 | 62 | 64 | 80..=99))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(get_tag_name(top::MERCHANT_NAME.as_str()), "Merchant Name");
        assert_eq!(get_tag_name("15"), "Merchant Account Information");
        assert_eq!(get_tag_name("85"), "Unreserved Template");
        assert_eq!(get_tag_name("XY"), "Unknown Tag");
        assert_eq!(get_promptpay_subtag_name("03"), "Tax ID");
        assert_eq!(get_subtag_name("29", "01"), "Mobile Number");
        assert_eq!(get_subtag_name("62", "05"), "Reference Label");
        assert_eq!(get_subtag_name("26", "00"), "Unknown Sub-tag");
    }

    #[test]
    fn test_templates() {
        assert!(is_template(top::PROMPTPAY_MERCHANT_ACCOUNT.as_str()));
        assert!(is_template(top::ADDITIONAL_DATA_FIELD_TEMPLATE.as_str()));
        assert!(!is_template(top::MERCHANT_NAME.as_str()));
        assert!(!is_template("04"));
        assert!(!is_template("2"));
    }
}
