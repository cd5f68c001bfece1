//! PromptPay payload recognition and account extraction

use emvqr_common::tags::{promptpay, top};
use emvqr_common::{decode, decode_nested, decode_strict, DecodeError, DecodedMap, EmvQrTag};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::AccountType;
use crate::aids;

/// Payment scheme recognised in a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    PromptPay,
    Unknown,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::PromptPay => "PROMPTPAY",
            Scheme::Unknown => "UNKNOWN",
        }
    }
}

/// Account information extracted from a scanned payload
///
/// `id` is only set for a known account type, and `payee_name` only once the
/// PromptPay AID has matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPayInfo {
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub id: Option<String>,
    pub scheme: Scheme,
    pub raw_payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
}

impl PromptPayInfo {
    /// Result for a payload that is not PromptPay
    fn unrecognized(payload: &str) -> Self {
        Self {
            account_type: AccountType::Unknown,
            id: None,
            scheme: Scheme::Unknown,
            raw_payload: payload.to_string(),
            payee_name: None,
        }
    }

    pub fn is_promptpay(&self) -> bool {
        self.scheme == Scheme::PromptPay
    }
}

/// Identifier sub-tags in lookup order; the first one present wins
const ACCOUNT_SUBTAGS: [(EmvQrTag, AccountType); 4] = [
    (promptpay::MOBILE_NUMBER, AccountType::Mobile),
    (promptpay::NATIONAL_ID, AccountType::NationalId),
    (promptpay::TAX_ID, AccountType::TaxId),
    (promptpay::EWALLET_ID, AccountType::Ewallet),
];

/// Extract PromptPay account information from a payload
///
/// Lenient: truncated or corrupt input decodes as far as it can, and anything
/// that does not carry the PromptPay AID in tag 29 comes back as an unknown
/// scheme. Never fails.
pub fn extract(payload: &str) -> PromptPayInfo {
    let fields = decode(payload);
    let template = fields
        .get(top::PROMPTPAY_MERCHANT_ACCOUNT.as_str())
        .map(|value| decode_nested(value));

    extract_from(payload, &fields, template.as_ref())
}

/// Extract PromptPay account information, rejecting malformed TLV
///
/// Both the top-level record set and the tag 29 template must decode cleanly.
/// A well-formed payload from another scheme is still `Ok` with an unknown
/// scheme.
pub fn extract_strict(payload: &str) -> Result<PromptPayInfo, DecodeError> {
    let fields = decode_strict(payload)?;
    let template = fields
        .get(top::PROMPTPAY_MERCHANT_ACCOUNT.as_str())
        .map(|value| decode_strict(value))
        .transpose()?;

    Ok(extract_from(payload, &fields, template.as_ref()))
}

fn extract_from(
    payload: &str,
    fields: &DecodedMap<'_>,
    template: Option<&DecodedMap<'_>>,
) -> PromptPayInfo {
    let Some(template) = template else {
        debug!("no PromptPay merchant account template");
        return PromptPayInfo::unrecognized(payload);
    };

    let aid = template.get(promptpay::APPLICATION_IDENTIFIER.as_str());
    if !aid.is_some_and(|aid| aid.starts_with(aids::PROMPTPAY)) {
        debug!(aid = ?aid, "merchant account template is not PromptPay");
        return PromptPayInfo::unrecognized(payload);
    }

    let payee_name = fields
        .get(top::MERCHANT_NAME.as_str())
        .copied()
        .unwrap_or_default()
        .to_string();

    let account = ACCOUNT_SUBTAGS.iter().find_map(|(tag, account_type)| {
        template
            .get(tag.as_str())
            .map(|id| (*account_type, id.to_string()))
    });

    let (account_type, id) = match account {
        Some((account_type, id)) => (account_type, Some(id)),
        None => {
            debug!("PromptPay template carries no account identifier");
            (AccountType::Unknown, None)
        }
    };

    PromptPayInfo {
        account_type,
        id,
        scheme: Scheme::PromptPay,
        raw_payload: payload.to_string(),
        payee_name: Some(payee_name),
    }
}
