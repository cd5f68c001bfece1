use std::process::ExitCode;

use emvqr_scheme::{PaymentMethodDraft, PaymentScheme};

use crate::formatters::FormatMode;

use super::print_json;

fn print_optional(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{}: {}", label, value);
    }
}

pub fn cmd_onboard(scheme: PaymentScheme, payload: &str, format_mode: FormatMode) -> ExitCode {
    let draft = PaymentMethodDraft::from_scan(scheme, payload);

    match format_mode {
        FormatMode::Json => {
            if !print_json(&draft) {
                return ExitCode::FAILURE;
            }
        }
        FormatMode::Raw => match serde_json::to_string(&draft) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialize output: {}", err);
                return ExitCode::FAILURE;
            }
        },
        FormatMode::Human => {
            println!("Payment Method Draft - {} Mode\n", format_mode.description());
            println!("Payment Scheme: {}", draft.payment_scheme);
            println!("Detected Type: {}", draft.detected_type);
            println!("Account Type: {}", draft.account_type);
            print_optional("Account ID", draft.account_id.as_deref());
            print_optional("Payee Name", draft.payee_name.as_deref());
            print_optional("UPI VPA", draft.upi_vpa.as_deref());
            print_optional("UPI Payee Name", draft.upi_payee_name.as_deref());
            println!("QR Payload: {}", draft.qr_raw_payload);
        }
    }

    ExitCode::SUCCESS
}
