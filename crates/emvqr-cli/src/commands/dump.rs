use std::process::ExitCode;

use serde::Serialize;

use crate::formatters::FormatMode;

use super::dump_all_tags::{collect_records, dump_all_tags, DumpedRecord};
use super::print_json;

#[derive(Serialize)]
struct DumpReport<'a> {
    records: Vec<DumpedRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn cmd_dump(payload: &str, format_mode: FormatMode) -> ExitCode {
    let (records, error) = collect_records(payload, None);

    if format_mode == FormatMode::Json {
        let report = DumpReport {
            records,
            error: error.map(|err| err.to_string()),
        };
        return if print_json(&report) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    println!("EMV QR Tag Dump - All TLV Records\n");
    println!("Payload length: {} characters", payload.chars().count());
    println!("Top-level records: {}\n", records.len());

    dump_all_tags(&records, &format_mode);

    if let Some(err) = error {
        println!("\nDecoding stopped early: {}", err);
    }

    println!("\n=== Dump Complete ===");
    ExitCode::SUCCESS
}
