//! Core constants for the key record format.
//!
//! A key record is a fixed 16-octet value describing a physical access key:
//! who issued it (a numeric id), when it was cut, and which building and room
//! it opens. These constants pin down the record geometry and the domains of
//! its fields so that every packer, parser and validator agrees on them.
//!
//! # Record Structure
//!
//! ```text
//! offset  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//!        [    id    ][ timestamp ][location][c][reserved ]
//! ```
//!
//! | Octets | Content | Width |
//! |--------|---------|-------|
//! | 0-3 | key id, big-endian | 32 bits |
//! | 4-7 | packed creation timestamp, big-endian | 32 bits |
//! | 8-10 | packed building and room, big-endian | 24 bits |
//! | 11 | XOR checksum of octets 0-10 | 8 bits |
//! | 12-15 | reserved, always zero | 32 bits |
//!
//! # Usage
//!
//! ```
//! use keycard_core::constants::*;
//!
//! assert_eq!(KEY_LENGTH, 16);
//! assert_eq!(CHECKSUM_INDEX, PAYLOAD_LENGTH);
//! assert_eq!(RESERVED_RANGE.len(), 4);
//! ```
//!
//! # Compatibility
//!
//! Readers of this format outside this workspace depend on the exact octet
//! layout. Modifying these values breaks interoperability with existing keys.

use std::ops::Range;

// ============================================================================
// Record Geometry
// ============================================================================

/// Total length of a serialized key record in octets.
///
/// # Examples
///
/// ```
/// use keycard_core::constants::KEY_LENGTH;
///
/// let buffer = [0u8; KEY_LENGTH];
/// assert_eq!(buffer.len(), 16);
/// ```
pub const KEY_LENGTH: usize = 16;

/// Number of leading octets covered by the checksum.
///
/// Octets `0..PAYLOAD_LENGTH` (id, timestamp and location) are folded into
/// the checksum stored at [`CHECKSUM_INDEX`].
pub const PAYLOAD_LENGTH: usize = 11;

/// Position of the checksum octet.
///
/// ```text
/// 54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00
///                                  ^^
///                                  checksum
/// ```
pub const CHECKSUM_INDEX: usize = 11;

/// Octets reserved for future use. Always zero in records this crate builds.
pub const RESERVED_RANGE: Range<usize> = 12..16;

/// Octet range of the big-endian key id.
pub const ID_RANGE: Range<usize> = 0..4;

/// Octet range of the big-endian packed timestamp.
pub const TIMESTAMP_RANGE: Range<usize> = 4..8;

/// Octet range of the big-endian packed location.
///
/// Only the low 16 bits of this 24-bit region carry data, so the first octet
/// of the range is zero in every well-formed record.
pub const LOCATION_RANGE: Range<usize> = 8..11;

// ============================================================================
// Field Domains
// ============================================================================

/// Year encoded as offset zero in the timestamp word.
pub const YEAR_EPOCH: i32 = 2000;

/// Last year whose offset from [`YEAR_EPOCH`] fits an octet.
///
/// Only the low nibble of the offset survives packing, so years from 2016
/// onwards alias earlier ones on the wire. They are still accepted.
///
/// # Examples
///
/// ```
/// use keycard_core::constants::{MAX_YEAR, YEAR_EPOCH};
///
/// assert_eq!(MAX_YEAR - YEAR_EPOCH, 255);
/// ```
pub const MAX_YEAR: i32 = 2255;

/// Largest room code (12 bits).
pub const MAX_ROOM: u16 = 0xFFF;

/// Largest key id (32 bits).
///
/// Ids arrive from untyped sources as 64-bit values and are checked against
/// this bound before packing.
pub const MAX_KEY_ID: u64 = 0xFFFF_FFFF;

/// Key id used when the issuer does not supply one.
///
/// # Examples
///
/// ```
/// use keycard_core::constants::DEFAULT_KEY_ID;
///
/// assert_eq!(format!("{DEFAULT_KEY_ID:#010X}"), "0x54071030");
/// ```
pub const DEFAULT_KEY_ID: u32 = 0x5407_1030;

/// Number of entries in the building enumeration, sentinel included.
pub const BUILDING_COUNT: usize = 16;

// ============================================================================
// Text Forms
// ============================================================================

/// Separator between octets in the readable form.
///
/// # Examples
///
/// ```
/// use keycard_core::constants::READABLE_SEPARATOR;
///
/// let readable = "54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00";
/// assert_eq!(readable.split(READABLE_SEPARATOR).count(), 16);
/// ```
pub const READABLE_SEPARATOR: &str = " ";

/// Length of the readable form: 16 two-digit octets and 15 separators.
pub const READABLE_LENGTH: usize = KEY_LENGTH * 3 - 1;

/// Text format accepted for creation timestamps supplied as strings.
///
/// # Examples
///
/// ```
/// use keycard_core::constants::TIMESTAMP_FORMAT;
///
/// let parsed = chrono::NaiveDateTime::parse_from_str("2009-02-23 12:16:48", TIMESTAMP_FORMAT);
/// assert!(parsed.is_ok());
/// ```
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
