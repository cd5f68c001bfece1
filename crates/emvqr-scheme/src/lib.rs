//! EMV QR Scheme - Payment scheme detection for scanned payment QR payloads
//!
//! This crate recognises PromptPay payloads by the AID inside their merchant
//! account information template, extracts the payee's account identifier,
//! classifies it, and builds the payment-method record a venue's onboarding
//! flow stores. UPI intent URIs are handled alongside since they arrive
//! through the same scan path.

pub mod account;
pub mod onboarding;
pub mod promptpay;
pub mod upi;

pub use account::{classify, AccountClassification, AccountType, ParseAccountTypeError};
pub use onboarding::{PaymentMethodDraft, PaymentScheme};
pub use promptpay::{extract, extract_strict, PromptPayInfo, Scheme};
pub use upi::{parse_upi, UpiIntent};

/// Known Application Identifiers (AIDs) carried in merchant account templates
pub mod aids {
    /// Registered PromptPay AID prefix, shared by every PromptPay product
    pub const PROMPTPAY: &str = "A00000067701";

    /// PromptPay credit transfer
    pub const PROMPTPAY_CREDIT_TRANSFER: &str = "A000000677010111";

    /// PromptPay bill payment
    pub const PROMPTPAY_BILL_PAYMENT: &str = "A000000677010112";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aids() {
        assert_eq!(aids::PROMPTPAY.len(), 12);
        assert!(aids::PROMPTPAY_CREDIT_TRANSFER.starts_with(aids::PROMPTPAY));
        assert!(aids::PROMPTPAY_BILL_PAYMENT.starts_with(aids::PROMPTPAY));
    }
}
