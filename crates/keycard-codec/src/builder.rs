use crate::{
    record::KeyRecord,
    validation::{parse_building, parse_room, parse_timestamp, validate_id, validate_timestamp},
};
use chrono::NaiveDateTime;
use keycard_core::{Error, Result, constants::DEFAULT_KEY_ID};

#[derive(Debug, Clone)]
enum Created {
    Missing,
    Value(NaiveDateTime),
    Text(String),
}

/// Builder for key records assembled from untyped input.
///
/// Nothing is validated until [`build`](KeyRecordBuilder::build), which
/// checks the fields in the order timestamp, building, room, id and reports
/// the first failure. Building defaults to unassigned, room to `"0"` and id
/// to [`DEFAULT_KEY_ID`]. The timestamp has no default.
///
/// # Example
/// ```
/// use keycard_codec::KeyRecordBuilder;
///
/// let key = KeyRecordBuilder::new()
///     .created_text("2009-02-23 12:16:48")
///     .building("B")
///     .room("120")
///     .id(0x5407_1030)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     key.dump_readable(),
///     "54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct KeyRecordBuilder {
    created: Created,
    building: String,
    room: String,
    id: u64,
}

impl KeyRecordBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        KeyRecordBuilder {
            created: Created::Missing,
            building: String::new(),
            room: String::from("0"),
            id: u64::from(DEFAULT_KEY_ID),
        }
    }

    /// Set the creation timestamp
    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = Created::Value(created);
        self
    }

    /// Set the creation timestamp from `YYYY-MM-DD HH:MM:SS` text
    pub fn created_text(mut self, created: impl Into<String>) -> Self {
        self.created = Created::Text(created.into());
        self
    }

    /// Set the building symbol (`""` for unassigned)
    pub fn building(mut self, symbol: impl Into<String>) -> Self {
        self.building = symbol.into();
        self
    }

    /// Set the room as hexadecimal text
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Set the room from a number
    ///
    /// Values above 0xFFF are kept as-is and rejected by `build()`.
    pub fn room_number(mut self, room: u32) -> Self {
        self.room = format!("{room:x}");
        self
    }

    /// Set the key id
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Validate the fields and pack the record
    ///
    /// # Errors
    /// Returns the first of `Error::InvalidTimestamp`,
    /// `Error::InvalidBuilding`, `Error::InvalidRoom`, `Error::InvalidId`
    /// that applies.
    pub fn build(self) -> Result<KeyRecord> {
        let created = match &self.created {
            Created::Missing => {
                return Err(Error::InvalidTimestamp {
                    message: "creation timestamp not set".to_string(),
                });
            }
            Created::Value(created) => validate_timestamp(created)?,
            Created::Text(text) => parse_timestamp(text)?,
        };
        let building = parse_building(&self.building)?;
        let room = parse_room(&self.room)?;
        let id = validate_id(self.id)?;

        KeyRecord::new(created, building, room, id)
    }
}

impl Default for KeyRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
