//! Packing of structured key fields into the canonical 16-octet form.
//!
//! Packing is infallible: every field arrives already validated (typed
//! [`Building`] and [`Room`], a 32-bit id, a timestamp checked by
//! [`validate_timestamp`](crate::validation::validate_timestamp)). Values
//! wider than their bit field are truncated, never rejected, which is what
//! makes years from 2016 onwards alias on the wire.

use crate::{checksum, layout::*};
use chrono::{Datelike, NaiveDateTime, Timelike};
use keycard_core::{
    Building, Room,
    constants::{CHECKSUM_INDEX, ID_RANGE, KEY_LENGTH, LOCATION_RANGE, TIMESTAMP_RANGE, YEAR_EPOCH},
};
use tracing::trace;

/// Pack a creation timestamp into its 32-bit word.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use keycard_codec::pack::pack_timestamp;
///
/// let created = NaiveDate::from_ymd_opt(2009, 2, 23)
///     .unwrap()
///     .and_hms_opt(12, 16, 48)
///     .unwrap();
/// assert_eq!(pack_timestamp(&created), 0x925D_8860);
/// ```
#[must_use]
pub fn pack_timestamp(created: &NaiveDateTime) -> u32 {
    let hour = created.hour();
    let pm = u32::from(hour > PM_THRESHOLD);
    let hour12 = hour - PM_THRESHOLD * pm;
    // Wrapping keeps the low nibble for out-of-epoch years.
    let year = created.year().wrapping_sub(YEAR_EPOCH) as u32;

    TS_YEAR.insert(year)
        | TS_MONTH.insert(created.month())
        | TS_DAY.insert(created.day())
        | TS_HOUR.insert(hour12)
        | TS_MINUTE.insert(created.minute())
        | TS_SECOND.insert(created.second())
        | TS_PM.insert(pm)
}

/// Pack building and room into the location word.
#[must_use]
pub fn pack_location(building: Building, room: Room) -> u32 {
    LOC_BUILDING.insert(u32::from(building.index())) | LOC_ROOM.insert(u32::from(room.as_u16()))
}

/// Pack all fields into the canonical record, checksum included.
///
/// Reserved octets 12-15 are zero.
#[must_use]
pub fn pack(id: u32, created: &NaiveDateTime, building: Building, room: Room) -> [u8; KEY_LENGTH] {
    let timestamp = pack_timestamp(created);
    let location = pack_location(building, room);

    let mut key = [0u8; KEY_LENGTH];
    key[ID_RANGE].copy_from_slice(&id.to_be_bytes());
    key[TIMESTAMP_RANGE].copy_from_slice(&timestamp.to_be_bytes());
    // Location occupies the low three octets of its big-endian word.
    key[LOCATION_RANGE].copy_from_slice(&location.to_be_bytes()[1..]);
    key[CHECKSUM_INDEX] = checksum::calculate(&key);

    trace!(id, timestamp, location, "packed key");
    key
}
