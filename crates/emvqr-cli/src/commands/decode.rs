use std::process::ExitCode;

use emvqr_common::{decode, decode_nested, decode_strict, get_tag_name, DecodeError, DecodedMap};
use tracing::info;

use crate::formatters::FormatMode;

use super::{display_tags, print_json};

fn decode_with(payload: &str, strict: bool, nested: bool) -> Result<DecodedMap<'_>, DecodeError> {
    match (strict, nested) {
        (true, _) => decode_strict(payload),
        (false, true) => Ok(decode_nested(payload)),
        (false, false) => Ok(decode(payload)),
    }
}

pub fn cmd_decode(
    payload: &str,
    nested: Option<&str>,
    strict: bool,
    format_mode: FormatMode,
) -> ExitCode {
    let fields = match decode_with(payload, strict, false) {
        Ok(fields) => fields,
        Err(err) => {
            eprintln!("Failed to decode payload: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (fields, template) = match nested {
        Some(tag) => {
            let Some(value) = fields.get(tag).copied() else {
                eprintln!("Tag {} ({}) not present in payload", tag, get_tag_name(tag));
                return ExitCode::FAILURE;
            };
            match decode_with(value, strict, true) {
                Ok(inner) => (inner, Some(tag)),
                Err(err) => {
                    eprintln!("Failed to decode template {}: {}", tag, err);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => (fields, None),
    };

    info!(fields = fields.len(), template = ?template, "decoded payload");

    if format_mode == FormatMode::Json {
        return if print_json(&fields) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    println!("EMV QR Decode - {} Mode\n", format_mode.description());
    match template {
        Some(tag) => println!("Template {} ({}):", tag, get_tag_name(tag)),
        None => println!("Top-level fields:"),
    }

    if fields.is_empty() {
        println!("  (no fields decoded)");
    } else {
        display_tags(&fields, template, &format_mode);
    }

    ExitCode::SUCCESS
}
