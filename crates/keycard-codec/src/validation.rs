//! Field validation for key construction.
//!
//! Keys are often assembled from loosely typed input: a building letter typed
//! by an operator, a room number read from a door plate, an id from a
//! database column wider than 32 bits. The functions here turn such input
//! into the typed fields the packer expects, or fail with the error kind for
//! that field.
//!
//! When several fields are validated together they are checked in the fixed
//! order timestamp, building, room, id, and the first failure is reported.
//! [`KeyRecordBuilder`](crate::KeyRecordBuilder) follows that order.
//!
//! # Examples
//!
//! ```
//! use keycard_codec::validation::{parse_building, parse_room, validate_id};
//!
//! assert!(parse_building("B").is_ok());
//! assert!(parse_building("I").is_err()); // not a building letter
//! assert!(parse_room("fff").is_ok());
//! assert!(parse_room("1000").is_err()); // exceeds 0xFFF
//! assert!(validate_id(0x1_0000_0000).is_err());
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use keycard_core::{
    Building, Error, Result, Room,
    constants::{MAX_KEY_ID, MAX_YEAR, TIMESTAMP_FORMAT, YEAR_EPOCH},
};

/// Validate a creation timestamp and drop its sub-second part.
///
/// # Errors
/// Returns `Error::InvalidTimestamp` if the year falls outside
/// 2000-2255, the range whose offset from the epoch fits an octet.
pub fn validate_timestamp(created: &NaiveDateTime) -> Result<NaiveDateTime> {
    let year = created.year();
    if !(YEAR_EPOCH..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidTimestamp {
            message: format!("year {year} is outside {YEAR_EPOCH}-{MAX_YEAR}"),
        });
    }
    created
        .with_nanosecond(0)
        .ok_or_else(|| Error::InvalidTimestamp {
            message: format!("cannot truncate {created} to whole seconds"),
        })
}

/// Parse and validate a timestamp written as `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
/// Returns `Error::InvalidTimestamp` if the text is not a calendar-valid
/// timestamp in that format, or its year is out of range.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let created = NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        Error::InvalidTimestamp {
            message: format!("'{text}': {e}"),
        }
    })?;
    validate_timestamp(&created)
}

/// Parse a building symbol (`""` for unassigned).
///
/// # Errors
/// Returns `Error::InvalidBuilding` for anything other than the empty string
/// or one of the 15 building letters.
pub fn parse_building(symbol: &str) -> Result<Building> {
    symbol.parse()
}

/// Parse hexadecimal room text.
///
/// # Errors
/// Returns `Error::InvalidRoom` if the text is not hexadecimal or its value
/// exceeds 0xFFF.
pub fn parse_room(text: &str) -> Result<Room> {
    text.parse()
}

/// Narrow a key id to 32 bits.
///
/// # Errors
/// Returns `Error::InvalidId` if the id exceeds 0xFFFFFFFF.
pub fn validate_id(id: u64) -> Result<u32> {
    if id > MAX_KEY_ID {
        return Err(Error::InvalidId { id });
    }
    Ok(id as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case(2000)]
    #[case(2009)]
    #[case(2016)]
    #[case(2255)]
    fn test_timestamp_year_in_range(#[case] year: i32) {
        let created = NaiveDate::from_ymd_opt(year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(validate_timestamp(&created).unwrap(), created);
    }

    #[rstest]
    #[case(1999)]
    #[case(2256)]
    #[case(1970)]
    fn test_timestamp_year_out_of_range(#[case] year: i32) {
        let created = NaiveDate::from_ymd_opt(year, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(matches!(
            validate_timestamp(&created),
            Err(Error::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_timestamp_sub_second_truncated() {
        let created = NaiveDate::from_ymd_opt(2009, 2, 23)
            .unwrap()
            .and_hms_milli_opt(12, 16, 48, 750)
            .unwrap();
        let validated = validate_timestamp(&created).unwrap();
        assert_eq!(validated.nanosecond(), 0);
        assert_eq!(validated.second(), 48);
    }

    #[rstest]
    #[case("2009-02-23 12:16:48")]
    #[case(" 2012-02-29 00:00:00 ")] // leap day, surrounding whitespace
    fn test_parse_timestamp_valid(#[case] text: &str) {
        assert!(parse_timestamp(text).is_ok());
    }

    #[rstest]
    #[case("2009-02-30 12:00:00")] // no such day
    #[case("2009-13-01 12:00:00")]
    #[case("2009-01-01 24:00:00")]
    #[case("23/02/2009 12:16:48")] // wrong format
    #[case("")]
    #[case("1999-12-31 23:59:59")] // before epoch
    fn test_parse_timestamp_invalid(#[case] text: &str) {
        assert!(matches!(
            parse_timestamp(text),
            Err(Error::InvalidTimestamp { .. })
        ));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0x5407_1030, 0x5407_1030)]
    #[case(0xFFFF_FFFF, u32::MAX)]
    fn test_validate_id_valid(#[case] id: u64, #[case] expected: u32) {
        assert_eq!(validate_id(id).unwrap(), expected);
    }

    #[rstest]
    #[case(0x1_0000_0000)]
    #[case(u64::MAX)]
    fn test_validate_id_invalid(#[case] id: u64) {
        assert!(matches!(validate_id(id), Err(Error::InvalidId { id: rejected }) if rejected == id));
    }

    #[test]
    fn test_building_and_room_errors_are_distinct() {
        assert!(matches!(parse_building("X"), Err(Error::InvalidBuilding(_))));
        assert!(matches!(parse_room("X"), Err(Error::InvalidRoom(_))));
    }
}
