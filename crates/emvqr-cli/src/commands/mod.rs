pub mod decode;
pub mod dump;
pub mod dump_all_tags;
pub mod onboard;
pub mod promptpay;

use emvqr_common::{get_subtag_name, get_tag_name, DecodedMap};

use crate::formatters::{self, FormatMode};

/// Display decoded fields, named either as top-level tags or as sub-tags of `template`
pub(crate) fn display_tags(fields: &DecodedMap<'_>, template: Option<&str>, mode: &FormatMode) {
    for (tag, value) in fields {
        let (tag_name, formatted_value) = match template {
            Some(template) => (
                get_subtag_name(template, tag),
                if *mode == FormatMode::Raw {
                    hex::encode_upper(value.as_bytes())
                } else {
                    value.to_string()
                },
            ),
            None => (get_tag_name(tag), formatters::format_value(tag, value, mode)),
        };

        println!("  [{}] {}: {}", tag, tag_name, formatted_value);
    }
}

/// Print a value as pretty JSON, reporting serialization failures on stderr
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(err) => {
            eprintln!("Failed to serialize output: {}", err);
            false
        }
    }
}
