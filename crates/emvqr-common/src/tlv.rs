//! TLV (Tag-Length-Value) decoding for EMV QR text payloads
//!
//! Positions and lengths count characters (Unicode scalar values), not bytes.
//! For the ASCII payloads most scanners produce the two are identical, but a
//! merchant name in Thai script must not split a code point.

use std::collections::BTreeMap;
use std::iter::FusedIterator;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Width of the tag field in characters
pub const TAG_LEN: usize = 2;

/// Width of the decimal length field in characters
pub const LENGTH_FIELD_LEN: usize = 2;

const HEADER_LEN: usize = TAG_LEN + LENGTH_FIELD_LEN;

/// Tag to value mapping produced by [`decode`], borrowing from the payload
pub type DecodedMap<'a> = BTreeMap<&'a str, &'a str>;

/// Reasons a TLV scan stops before the end of the payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid length field {field:?} for tag {tag:?} at offset {offset}")]
    InvalidLength {
        offset: usize,
        tag: String,
        field: String,
    },
    #[error("tag {tag:?} at offset {offset} declares {declared} characters but only {available} remain")]
    Truncated {
        offset: usize,
        tag: String,
        declared: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Character offset of the record header that failed
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::InvalidLength { offset, .. } | DecodeError::Truncated { offset, .. } => {
                *offset
            }
        }
    }
}

/// A single decoded record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    /// Character offset of the tag within the scanned string
    pub offset: usize,
    pub tag: &'a str,
    pub value: &'a str,
}

impl Record<'_> {
    /// Value length in characters, as declared in the length field
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Strict record reader over a payload
///
/// Yields records left to right. The first malformed record is reported as an
/// error and ends the iteration. One to three trailing characters that cannot
/// form a header are ignored, not reported.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a str,
    offset: usize,
    done: bool,
}

/// Iterate over the records of `payload`
pub fn records(payload: &str) -> Records<'_> {
    Records {
        rest: payload,
        offset: 0,
        done: false,
    }
}

impl<'a> Records<'a> {
    fn fail(&mut self, err: DecodeError) -> Option<Result<Record<'a>, DecodeError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Fewer than four characters left: normal end of stream
        let Some((tag, after_tag)) = split_chars(self.rest, TAG_LEN) else {
            self.done = true;
            return None;
        };
        let Some((field, after_header)) = split_chars(after_tag, LENGTH_FIELD_LEN) else {
            self.done = true;
            return None;
        };

        let offset = self.offset;

        let Some(declared) = parse_length(field) else {
            return self.fail(DecodeError::InvalidLength {
                offset,
                tag: tag.to_string(),
                field: field.to_string(),
            });
        };

        let Some((value, rest)) = split_chars(after_header, declared) else {
            return self.fail(DecodeError::Truncated {
                offset,
                tag: tag.to_string(),
                declared,
                available: after_header.chars().count(),
            });
        };

        self.rest = rest;
        self.offset += HEADER_LEN + declared;

        Some(Ok(Record { offset, tag, value }))
    }
}

impl FusedIterator for Records<'_> {}

/// Decode a payload into a tag to value map
///
/// Best-effort: scanning stops at the first record whose length field is not
/// two decimal digits or whose value runs past the end of the payload, and
/// everything decoded before it is returned. A repeated tag keeps its last
/// value. Never fails.
pub fn decode(payload: &str) -> DecodedMap<'_> {
    let mut map = BTreeMap::new();

    for record in records(payload) {
        match record {
            Ok(record) => {
                trace!(tag = record.tag, offset = record.offset, len = record.len(), "TLV record");
                map.insert(record.tag, record.value);
            }
            Err(err) => {
                debug!(error = %err, decoded = map.len(), "TLV scan stopped early");
                break;
            }
        }
    }

    map
}

/// Decode the value of a template tag as its own record set
///
/// Only some top-level tags carry nested TLV content; the caller picks which
/// value to re-decode. Same leniency as [`decode`].
pub fn decode_nested(value: &str) -> DecodedMap<'_> {
    decode(value)
}

/// Decode a payload, failing on the first malformed record
pub fn decode_strict(payload: &str) -> Result<DecodedMap<'_>, DecodeError> {
    let mut map = BTreeMap::new();
    for record in records(payload) {
        let record = record?;
        map.insert(record.tag, record.value);
    }
    Ok(map)
}

/// Find the value of `tag` in a payload
///
/// Follows [`decode`] semantics: the last occurrence before any malformed
/// record wins.
pub fn find_tag<'a>(payload: &'a str, tag: &str) -> Option<&'a str> {
    records(payload)
        .map_while(Result::ok)
        .filter(|record| record.tag == tag)
        .last()
        .map(|record| record.value)
}

/// Split off the first `n` characters, or `None` if fewer remain
fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)?;
    Some(s.split_at(end))
}

fn parse_length(field: &str) -> Option<usize> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
