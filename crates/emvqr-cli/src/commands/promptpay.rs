use std::process::ExitCode;

use emvqr_common::tags::promptpay;
use emvqr_common::get_promptpay_subtag_name;
use emvqr_scheme::{classify, extract, extract_strict, AccountClassification, AccountType, PromptPayInfo};
use serde::Serialize;
use tracing::info;

use crate::formatters::FormatMode;

use super::print_json;

/// Extraction result together with its business classification
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptPayReport<'a> {
    #[serde(flatten)]
    info: &'a PromptPayInfo,
    classification: AccountClassification,
}

fn subtag_label(account_type: AccountType) -> &'static str {
    let tag = match account_type {
        AccountType::Mobile => promptpay::MOBILE_NUMBER,
        AccountType::NationalId => promptpay::NATIONAL_ID,
        AccountType::TaxId => promptpay::TAX_ID,
        AccountType::Ewallet => promptpay::EWALLET_ID,
        AccountType::Unknown => return "no identifier",
    };
    get_promptpay_subtag_name(tag.as_str())
}

pub fn cmd_promptpay(payload: &str, strict: bool, format_mode: FormatMode) -> ExitCode {
    let info = if strict {
        match extract_strict(payload) {
            Ok(info) => info,
            Err(err) => {
                eprintln!("Failed to decode payload: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        extract(payload)
    };

    let classification = classify(info.account_type);
    info!(
        scheme = info.scheme.as_str(),
        account_type = %info.account_type,
        %classification,
        "extracted PromptPay info"
    );

    match format_mode {
        FormatMode::Json => {
            let report = PromptPayReport {
                info: &info,
                classification,
            };
            if !print_json(&report) {
                return ExitCode::FAILURE;
            }
        }
        FormatMode::Raw => {
            println!("type={}", info.account_type);
            println!("id={}", info.id.as_deref().unwrap_or_default());
            println!("scheme={}", info.scheme.as_str());
            if let Some(ref payee_name) = info.payee_name {
                println!("payeeName={}", payee_name);
            }
            println!("classification={}", classification);
        }
        FormatMode::Human => {
            println!("PromptPay Extraction - {} Mode\n", format_mode.description());
            println!("Scheme: {}", info.scheme.as_str());
            println!(
                "Account Type: {} ({})",
                info.account_type,
                subtag_label(info.account_type)
            );
            if let Some(ref id) = info.id {
                println!("Account ID: {}", id);
            }
            if let Some(ref payee_name) = info.payee_name {
                if payee_name.is_empty() {
                    println!("Payee Name: (not present)");
                } else {
                    println!("Payee Name: {}", payee_name);
                }
            }
            println!("Classification: {}", classification);

            if !info.is_promptpay() {
                println!("\nPayload does not carry the PromptPay AID in tag 29");
            }
        }
    }

    ExitCode::SUCCESS
}
