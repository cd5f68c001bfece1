//! Payment-method records built from a scanned QR payload
//!
//! The draft is what a venue's onboarding flow persists next to the photo of
//! the QR code. Building it is pure; storage happens elsewhere.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::{classify, AccountClassification, AccountType};
use crate::promptpay::extract;
use crate::upi::parse_upi;

/// Payment scheme the venue declared when submitting the scan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentScheme {
    Upi,
    PromptPay,
    Other(String),
}

impl PaymentScheme {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentScheme::Upi => "UPI",
            PaymentScheme::PromptPay => "PROMPTPAY",
            PaymentScheme::Other(name) => name,
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentScheme {
    fn from(name: String) -> Self {
        if name.eq_ignore_ascii_case("UPI") {
            PaymentScheme::Upi
        } else if name.eq_ignore_ascii_case("PROMPTPAY") {
            PaymentScheme::PromptPay
        } else {
            PaymentScheme::Other(name)
        }
    }
}

impl From<PaymentScheme> for String {
    fn from(scheme: PaymentScheme) -> Self {
        match scheme {
            PaymentScheme::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PaymentScheme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PaymentScheme::from(s.to_string()))
    }
}

/// Payment-method record derived from a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDraft {
    pub payment_scheme: PaymentScheme,
    pub qr_raw_payload: String,
    pub account_type: AccountClassification,
    pub detected_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_vpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_payee_name: Option<String>,
}

impl PaymentMethodDraft {
    /// Build the record for a payload scanned under the declared scheme
    pub fn from_scan(payment_scheme: PaymentScheme, qr_raw_payload: &str) -> Self {
        let mut draft = Self {
            payment_scheme,
            qr_raw_payload: qr_raw_payload.to_string(),
            account_type: AccountClassification::Unknown,
            detected_type: AccountType::Unknown,
            account_id: None,
            payee_name: None,
            upi_vpa: None,
            upi_payee_name: None,
        };

        match draft.payment_scheme {
            PaymentScheme::PromptPay => {
                let info = extract(qr_raw_payload);
                draft.detected_type = info.account_type;
                draft.account_type = classify(info.account_type);
                draft.account_id = info.id;
                draft.payee_name = info.payee_name;
            }
            PaymentScheme::Upi => {
                if let Some(intent) = parse_upi(qr_raw_payload) {
                    draft.upi_vpa = Some(intent.vpa);
                    draft.upi_payee_name = intent.payee_name;
                }
            }
            PaymentScheme::Other(_) => {}
        }

        debug!(
            scheme = %draft.payment_scheme,
            detected_type = %draft.detected_type,
            account_type = %draft.account_type,
            "built payment method draft"
        );

        draft
    }
}
