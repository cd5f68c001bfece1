//! Account identifier types and their business classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of account identifier found in a PromptPay template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Mobile,
    NationalId,
    TaxId,
    Ewallet,
    Unknown,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Mobile => "mobile",
            AccountType::NationalId => "national_id",
            AccountType::TaxId => "tax_id",
            AccountType::Ewallet => "ewallet",
            AccountType::Unknown => "unknown",
        }
    }

    /// Whether this type carries an account identifier
    pub fn is_known(&self) -> bool {
        !matches!(self, AccountType::Unknown)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown account type {0:?}")]
pub struct ParseAccountTypeError(pub String);

impl FromStr for AccountType {
    type Err = ParseAccountTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(AccountType::Mobile),
            "national_id" => Ok(AccountType::NationalId),
            "tax_id" => Ok(AccountType::TaxId),
            "ewallet" => Ok(AccountType::Ewallet),
            "unknown" => Ok(AccountType::Unknown),
            other => Err(ParseAccountTypeError(other.to_string())),
        }
    }
}

/// Coarse business classification stored with a venue's payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClassification {
    Business,
    Personal,
    Unknown,
}

impl AccountClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountClassification::Business => "Business",
            AccountClassification::Personal => "Personal",
            AccountClassification::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AccountClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an account identifier type
///
/// Tax IDs belong to registered businesses; mobile numbers and national IDs
/// to individuals. E-wallet references say nothing about the holder.
pub fn classify(account_type: AccountType) -> AccountClassification {
    match account_type {
        AccountType::TaxId => AccountClassification::Business,
        AccountType::Mobile | AccountType::NationalId => AccountClassification::Personal,
        AccountType::Ewallet | AccountType::Unknown => AccountClassification::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(AccountType::TaxId), AccountClassification::Business);
        assert_eq!(classify(AccountType::Mobile), AccountClassification::Personal);
        assert_eq!(classify(AccountType::NationalId), AccountClassification::Personal);
        assert_eq!(classify(AccountType::Ewallet), AccountClassification::Unknown);
        assert_eq!(classify(AccountType::Unknown), AccountClassification::Unknown);
    }

    #[test]
    fn test_classify_from_stored_string() {
        let classify_str = |s: &str| classify(s.parse().unwrap()).to_string();
        assert_eq!(classify_str("tax_id"), "Business");
        assert_eq!(classify_str("ewallet"), "Unknown");
        assert_eq!(classify_str("mobile"), "Personal");
    }

    #[test]
    fn test_parse_account_type_rejects_unknown_names() {
        assert_eq!(
            "passport".parse::<AccountType>(),
            Err(ParseAccountTypeError("passport".to_string()))
        );
        assert_eq!("national_id".parse(), Ok(AccountType::NationalId));
    }

    #[test]
    fn test_account_type_string_forms_agree() {
        for account_type in [
            AccountType::Mobile,
            AccountType::NationalId,
            AccountType::TaxId,
            AccountType::Ewallet,
            AccountType::Unknown,
        ] {
            assert_eq!(account_type.as_str().parse(), Ok(account_type));
        }
        assert!(!AccountType::Unknown.is_known());
        assert!(AccountType::Ewallet.is_known());
    }
}
