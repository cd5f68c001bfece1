//! End-to-end extraction over complete PromptPay payloads as produced by
//! Thai banking apps (payload format, point of initiation, template 29,
//! currency, country, merchant name and city, CRC).

use emvqr_scheme::{
    classify, extract, extract_strict, AccountClassification, AccountType, PaymentMethodDraft,
    PaymentScheme, Scheme,
};
use serde_json::json;

const MOBILE: &str = "00020101021129370016A0000006770101110113006681234567853037645802TH5915Somchai Noodles6007Bangkok63042537";
const NATIONAL_ID: &str = "00020101021229370016A0000006770101110213123456789012353037645406120.505802TH5910Khun Malee6007Bangkok6304D3A3";
const TAX_ID: &str = "00020101021129370016A0000006770101110313010553600000053037645802TH5914Siam Coffee Co6007Bangkok63044EAB";
const EWALLET_NO_NAME: &str = "00020101021129390016A000000677010111041500499900028850553037645802TH6007Bangkok6304A767";
const THAI_NAME: &str = "00020101021129370016A0000006770101110113006681234567853037645802TH5905สมชาย6007Bangkok63042C5F";

#[test]
fn test_each_identifier_type() {
    let cases = [
        (MOBILE, AccountType::Mobile, "0066812345678", "Somchai Noodles"),
        (NATIONAL_ID, AccountType::NationalId, "1234567890123", "Khun Malee"),
        (TAX_ID, AccountType::TaxId, "0105536000000", "Siam Coffee Co"),
        (EWALLET_NO_NAME, AccountType::Ewallet, "004999000288505", ""),
    ];

    for (payload, account_type, id, payee) in cases {
        let info = extract(payload);
        assert_eq!(info.scheme, Scheme::PromptPay, "{payload}");
        assert_eq!(info.account_type, account_type, "{payload}");
        assert_eq!(info.id.as_deref(), Some(id), "{payload}");
        assert_eq!(info.payee_name.as_deref(), Some(payee), "{payload}");
        assert_eq!(info.raw_payload, payload);
        assert_eq!(extract_strict(payload), Ok(info));
    }
}

#[test]
fn test_thai_merchant_name() {
    let info = extract(THAI_NAME);
    assert_eq!(info.payee_name.as_deref(), Some("สมชาย"));
    assert_eq!(info.id.as_deref(), Some("0066812345678"));
}

#[test]
fn test_classification_of_real_payloads() {
    assert_eq!(
        classify(extract(TAX_ID).account_type),
        AccountClassification::Business
    );
    assert_eq!(
        classify(extract(NATIONAL_ID).account_type),
        AccountClassification::Personal
    );
    assert_eq!(
        classify(extract(EWALLET_NO_NAME).account_type),
        AccountClassification::Unknown
    );
}

#[test]
fn test_truncated_scan_still_extracts_prefix() {
    // Camera cut off the end of the code: CRC and city are lost
    let cut = &MOBILE[..MOBILE.len() - 20];
    let info = extract(cut);
    assert_eq!(info.account_type, AccountType::Mobile);
    assert_eq!(info.id.as_deref(), Some("0066812345678"));
    assert!(extract_strict(cut).is_err());
}

#[test]
fn test_info_json_shape() {
    let info = extract("29230012A0000006770101031235902Jo");
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({
            "type": "mobile",
            "id": "123",
            "scheme": "PROMPTPAY",
            "rawPayload": "29230012A0000006770101031235902Jo",
            "payeeName": "Jo",
        })
    );

    let unknown = extract("2912000899999999");
    assert_eq!(
        serde_json::to_value(&unknown).unwrap(),
        json!({
            "type": "unknown",
            "id": null,
            "scheme": "UNKNOWN",
            "rawPayload": "2912000899999999",
        })
    );
}

#[test]
fn test_draft_json_shape() {
    let draft = PaymentMethodDraft::from_scan(PaymentScheme::PromptPay, TAX_ID);
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["paymentScheme"], "PROMPTPAY");
    assert_eq!(value["accountType"], "Business");
    assert_eq!(value["detectedType"], "tax_id");
    assert_eq!(value["accountId"], "0105536000000");
    assert_eq!(value["payeeName"], "Siam Coffee Co");
    assert_eq!(value["qrRawPayload"], TAX_ID);
    assert!(value.get("upiVpa").is_none());

    let back: PaymentMethodDraft = serde_json::from_value(value).unwrap();
    assert_eq!(back, draft);
}
