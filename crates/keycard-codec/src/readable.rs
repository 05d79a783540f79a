//! Readable text form of a record.
//!
//! Sixteen two-digit uppercase hexadecimal octets separated by single spaces:
//!
//! ```text
//! 54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00
//! ```
//!
//! Parsing is slightly more lenient than formatting: surrounding whitespace
//! is ignored, tokens may be separated by any run of whitespace, and hex
//! digits may be lowercase. Each token must still be exactly two digits.

use keycard_core::{
    Error, Result,
    constants::{KEY_LENGTH, READABLE_SEPARATOR},
};

/// Format octets as the readable form.
///
/// # Example
/// ```
/// use keycard_codec::readable::format_readable;
///
/// let mut key = [0u8; 16];
/// key[0] = 0x54;
/// key[1] = 0x0A;
/// assert!(format_readable(&key).starts_with("54 0A 00"));
/// ```
#[must_use]
pub fn format_readable(key: &[u8; KEY_LENGTH]) -> String {
    key.iter()
        .map(|octet| format!("{octet:02X}"))
        .collect::<Vec<_>>()
        .join(READABLE_SEPARATOR)
}

/// Parse the readable form into octets.
///
/// # Errors
/// Returns `Error::InvalidReadableFormat` unless the text holds exactly 16
/// whitespace-separated tokens of two hex digits each.
pub fn parse_readable(text: &str) -> Result<[u8; KEY_LENGTH]> {
    let mut key = [0u8; KEY_LENGTH];
    let mut count = 0;

    for token in text.split_whitespace() {
        if count == KEY_LENGTH {
            return Err(Error::InvalidReadableFormat(format!(
                "more than {KEY_LENGTH} octets"
            )));
        }
        key[count] = parse_octet(token)?;
        count += 1;
    }

    if count != KEY_LENGTH {
        return Err(Error::InvalidReadableFormat(format!(
            "expected {KEY_LENGTH} octets, got {count}"
        )));
    }
    Ok(key)
}

fn parse_octet(token: &str) -> Result<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidReadableFormat(format!(
            "'{token}' is not a two-digit hex octet"
        )));
    }
    u8::from_str_radix(token, 16)
        .map_err(|e| Error::InvalidReadableFormat(format!("'{token}': {e}")))
}
