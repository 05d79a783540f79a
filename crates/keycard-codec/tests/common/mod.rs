//! Common test utilities for integration tests.
//!
//! Fixtures for the reference key used throughout the suite and helpers
//! that build keys with sensible defaults.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use keycard_codec::KeyRecord;
use keycard_core::{Building, Room, constants::DEFAULT_KEY_ID};

/// Readable form of [`reference_key`].
pub const REFERENCE_READABLE: &str = "54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00";

/// Octets of [`reference_key`].
pub const REFERENCE_OCTETS: [u8; 16] = [
    0x54, 0x07, 0x10, 0x30, 0x92, 0x5D, 0x88, 0x60, 0x00, 0x21, 0x20, 0x55, 0x00, 0x00, 0x00, 0x00,
];

/// Build a timestamp, panicking on invalid test input.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("test timestamp must be valid")
}

/// Key cut 2009-02-23 12:16:48 for building B, room 120, default id.
pub fn reference_key() -> KeyRecord {
    KeyRecord::new(
        at(2009, 2, 23, 12, 16, 48),
        Building::B,
        room("120"),
        DEFAULT_KEY_ID,
    )
    .expect("reference key must build")
}

/// Parse room text, panicking on invalid test input.
pub fn room(text: &str) -> Room {
    text.parse().expect("test room must be valid")
}

/// Build a key at the given time with otherwise fixed fields.
pub fn key_at(created: NaiveDateTime) -> KeyRecord {
    KeyRecord::new(created, Building::H, room("3a"), 0x0102_0304).expect("test key must build")
}
