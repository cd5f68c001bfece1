//! Dump all TLV records in a payload, including unknown tags

use emvqr_common::{get_subtag_name, get_tag_name, is_template, records, DecodeError, Record};
use serde::Serialize;

use crate::formatters::{self, FormatMode};

/// Longest value printed in full before truncating
const MAX_DISPLAY_CHARS: usize = 48;

/// A record with its name and, for templates, its decoded sub-records
///
/// Offsets of sub-records are relative to the template value.
#[derive(Debug, Serialize)]
pub struct DumpedRecord<'a> {
    #[serde(flatten)]
    pub record: Record<'a>,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DumpedRecord<'a>>,
    /// Why decoding of this template's contents stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Collect records in stream order, descending one level into template tags
///
/// Returns everything decoded before the first malformed record, plus that error.
pub fn collect_records<'a>(
    data: &'a str,
    template: Option<&str>,
) -> (Vec<DumpedRecord<'a>>, Option<DecodeError>) {
    let mut collected = Vec::new();

    for record in records(data) {
        let record = match record {
            Ok(record) => record,
            Err(err) => return (collected, Some(err)),
        };

        let name = match template {
            Some(template) => get_subtag_name(template, record.tag),
            None => get_tag_name(record.tag),
        };

        let (fields, error) = if template.is_none() && is_template(record.tag) {
            let (fields, error) = collect_records(record.value, Some(record.tag));
            (fields, error.map(|err| err.to_string()))
        } else {
            (Vec::new(), None)
        };

        collected.push(DumpedRecord {
            record,
            name,
            fields,
            error,
        });
    }

    (collected, None)
}

/// Print collected records as an indented tree
pub fn dump_all_tags(dumped: &[DumpedRecord<'_>], mode: &FormatMode) {
    print_records(dumped, 1, false, mode);
}

fn print_records(dumped: &[DumpedRecord<'_>], indent: usize, nested: bool, mode: &FormatMode) {
    let indent_str = " ".repeat(indent * 2);

    for entry in dumped {
        let record = &entry.record;

        print!("{}", indent_str);
        print!("[{}] {} ({}): ", record.tag, entry.name, record.len());

        if !entry.fields.is_empty() || entry.error.is_some() {
            println!();
            print_records(&entry.fields, indent + 1, true, mode);
            if let Some(ref error) = entry.error {
                println!("{}  ! {}", indent_str, error);
            }
            continue;
        }

        let formatted = if !nested {
            formatters::format_value(record.tag, record.value, mode)
        } else if *mode == FormatMode::Raw {
            hex::encode_upper(record.value.as_bytes())
        } else {
            record.value.to_string()
        };

        if formatted.chars().count() <= MAX_DISPLAY_CHARS {
            println!("{}", formatted);
        } else {
            let shown: String = formatted.chars().take(MAX_DISPLAY_CHARS).collect();
            println!("{}... ({} characters)", shown, formatted.chars().count());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_descends_into_templates() {
        let (dumped, error) = collect_records("00020129230012A0000006770101031235902Jo", None);
        assert!(error.is_none());

        let tags: Vec<&str> = dumped.iter().map(|d| d.record.tag).collect();
        assert_eq!(tags, ["00", "29", "59"]);

        let template = &dumped[1];
        assert_eq!(template.name, "Merchant Account Information (PromptPay)");
        assert_eq!(template.fields.len(), 2);
        assert_eq!(template.fields[1].name, "Mobile Number");
        assert_eq!(template.fields[1].record.value, "123");
        assert!(dumped[2].fields.is_empty());
    }

    #[test]
    fn test_collect_reports_errors() {
        // Template 29 is truncated inside; the top level then breaks on "XY"
        let (dumped, error) = collect_records("29060012AB00XY", None);
        assert_eq!(dumped.len(), 1);
        assert!(dumped[0].fields.is_empty());
        assert!(dumped[0].error.is_some());
        assert!(matches!(error, Some(DecodeError::InvalidLength { offset: 10, .. })));
    }

    #[test]
    fn test_json_shape() {
        let (dumped, _) = collect_records("5902Jo", None);
        let json = serde_json::to_value(&dumped).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "offset": 0, "tag": "59", "value": "Jo", "name": "Merchant Name" }
            ])
        );
    }
}
