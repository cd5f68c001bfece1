//! Payload input from the command line or stdin

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};

/// Use the payload argument, or read one line from stdin when it is absent or `-`
pub fn resolve_payload(arg: Option<String>) -> Result<String> {
    match arg {
        Some(payload) if payload != "-" => Ok(payload),
        _ => read_payload(io::stdin().lock()),
    }
}

/// Read a single payload line, without its line terminator
pub fn read_payload<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read payload from stdin")?;

    let payload = line.trim_end_matches(['\r', '\n']);
    if payload.is_empty() {
        bail!("no payload given on the command line or stdin");
    }

    Ok(payload.to_string())
}
