//! Unpacking of the canonical 16-octet form back into structured fields.
//!
//! Unpacking inverts [`pack`](crate::pack) bit for bit, including its hour
//! asymmetry: `hour = hour12 + 12 * pm`. Field combinations that do not form
//! a calendar-valid timestamp, and building indices outside the enumeration,
//! are rejected. The checksum is not consulted here.

use crate::layout::*;
use chrono::{NaiveDate, NaiveDateTime};
use keycard_core::{
    Building, Error, Result, Room,
    constants::{ID_RANGE, KEY_LENGTH, LOCATION_RANGE, TIMESTAMP_RANGE, YEAR_EPOCH},
};

/// Structured fields recovered from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFields {
    pub id: u32,
    pub created: NaiveDateTime,
    pub building: Building,
    pub room: Room,
}

/// Recover the creation timestamp from its packed word.
///
/// # Errors
/// Returns `Error::InvalidTimestamp` if the fields do not name a real date
/// and time (month 0, February 30th, minute 60, hour 12 with pm set, ...).
pub fn unpack_timestamp(word: u32) -> Result<NaiveDateTime> {
    // Year offset is a nibble, so this cannot overflow.
    let year = YEAR_EPOCH + TS_YEAR.extract(word) as i32;
    let month = TS_MONTH.extract(word);
    let day = TS_DAY.extract(word);
    let hour = TS_HOUR.extract(word) + PM_THRESHOLD * TS_PM.extract(word);
    let minute = TS_MINUTE.extract(word);
    let second = TS_SECOND.extract(word);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| Error::InvalidTimestamp {
            message: format!(
                "packed word {word:#010X} decodes to {year:04}-{month:02}-{day:02} \
                 {hour:02}:{minute:02}:{second:02}"
            ),
        })
}

/// Recover building and room from the 24-bit location word.
///
/// # Errors
/// Returns `Error::InvalidBuilding` if the bits above the room select an
/// index outside the 16-entry enumeration.
pub fn unpack_location(word: u32) -> Result<(Building, Room)> {
    let building = Building::from_index(word >> LOC_BUILDING.shift)?;
    // 12 bits always fit the room domain.
    let room = Room::new(LOC_ROOM.extract(word) as u16)?;
    Ok((building, room))
}

/// Unpack every field of a record.
///
/// # Errors
/// Returns `Error::InvalidTimestamp` or `Error::InvalidBuilding` when the
/// corresponding region does not decode.
pub fn unpack(key: &[u8; KEY_LENGTH]) -> Result<KeyFields> {
    let id = read_be(&key[ID_RANGE]);
    let created = unpack_timestamp(read_be(&key[TIMESTAMP_RANGE]))?;
    let (building, room) = unpack_location(read_be(&key[LOCATION_RANGE]))?;

    Ok(KeyFields {
        id,
        created,
        building,
        room,
    })
}

/// Read up to four octets as a big-endian integer.
fn read_be(octets: &[u8]) -> u32 {
    octets
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{pack, pack_timestamp};
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(11)]
    #[case(12)]
    #[case(13)]
    #[case(23)]
    fn test_hour_round_trip(#[case] hour: u32) {
        let created = at(2009, 2, 23, hour, 30, 15);
        let back = unpack_timestamp(pack_timestamp(&created)).unwrap();
        assert_eq!(back, created);
    }

    #[test]
    fn test_hour_zero_with_pm_decodes_as_noon() {
        // Never produced by the packer, but the inverse rule still applies.
        let word = TS_YEAR.insert(9) | TS_MONTH.insert(2) | TS_DAY.insert(23) | TS_PM.insert(1);
        assert_eq!(unpack_timestamp(word).unwrap().hour(), 12);
    }

    #[test]
    fn test_year_alias_decodes_to_low_nibble() {
        let back = unpack_timestamp(pack_timestamp(&at(2019, 6, 1, 8, 0, 0))).unwrap();
        assert_eq!(back.year(), 2003);
        assert_eq!(back.month(), 6);
    }

    #[rstest]
    #[case::month_zero(TS_MONTH.insert(0) | TS_DAY.insert(1))]
    #[case::month_thirteen(TS_MONTH.insert(13) | TS_DAY.insert(1))]
    #[case::day_zero(TS_MONTH.insert(1))]
    #[case::day_thirty_two(TS_MONTH.insert(1) | TS_DAY.insert(32))]
    #[case::february_thirtieth(TS_MONTH.insert(2) | TS_DAY.insert(30))]
    #[case::hour_twenty_four(TS_MONTH.insert(1) | TS_DAY.insert(1) | TS_HOUR.insert(12) | TS_PM.insert(1))]
    #[case::minute_sixty(TS_MONTH.insert(1) | TS_DAY.insert(1) | TS_MINUTE.insert(60))]
    #[case::second_sixty_two(TS_MONTH.insert(1) | TS_DAY.insert(1) | TS_SECOND.insert(62))]
    fn test_invalid_timestamp_words(#[case] word: u32) {
        assert!(matches!(
            unpack_timestamp(word),
            Err(Error::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_location_extremes() {
        assert_eq!(
            unpack_location(0xFFFF).unwrap(),
            (Building::S, Room::new(0xFFF).unwrap())
        );
        assert_eq!(
            unpack_location(0).unwrap(),
            (Building::Unassigned, Room::new(0).unwrap())
        );
    }

    #[test]
    fn test_location_top_octet_rejected() {
        assert!(matches!(
            unpack_location(0x01_0000),
            Err(Error::InvalidBuilding(_))
        ));
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let created = at(2014, 7, 4, 17, 45, 3);
        let room = Room::new(0xA0F).unwrap();
        let key = pack(0xDEAD_BEEF, &created, Building::K, room);

        let fields = unpack(&key).unwrap();
        assert_eq!(fields.id, 0xDEAD_BEEF);
        assert_eq!(fields.created, created);
        assert_eq!(fields.building, Building::K);
        assert_eq!(fields.room, room);
    }

    #[test]
    fn test_unpack_ignores_checksum_and_reserved() {
        let mut key = pack(1, &at(2001, 1, 1, 1, 1, 1), Building::A, Room::new(1).unwrap());
        key[11] ^= 0xFF;
        key[14] = 0x7F;
        assert!(unpack(&key).is_ok());
    }
}
