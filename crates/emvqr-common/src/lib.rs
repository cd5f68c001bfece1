//! EMV QR Common - TLV decoding and tag catalogue for EMV QR payment payloads
//!
//! EMV QR payloads are plain text built from records of a two-character tag,
//! a two-digit decimal length and a value of exactly that many characters.
//! Some top-level tags (the Merchant Account Information templates) carry a
//! second TLV record set inside their value.

pub mod tags;
mod tlv;

pub use tags::{get_promptpay_subtag_name, get_subtag_name, get_tag_name, is_template, EmvQrTag};
pub use tlv::{
    decode, decode_nested, decode_strict, find_tag, records, DecodeError, DecodedMap, Record,
    Records, LENGTH_FIELD_LEN, TAG_LEN,
};
