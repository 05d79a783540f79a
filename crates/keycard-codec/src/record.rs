use crate::{
    builder::KeyRecordBuilder,
    checksum, pack,
    readable::{format_readable, parse_readable},
    unpack::unpack,
    validation::validate_timestamp,
};
use bytes::Bytes;
use chrono::NaiveDateTime;
use keycard_core::{
    Building, Error, Result, Room,
    constants::{CHECKSUM_INDEX, DEFAULT_KEY_ID, KEY_LENGTH},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

/// A physical-access key record.
///
/// Holds the structured fields of a key together with its canonical 16-octet
/// form. The octets are fixed at construction: packed from the fields by
/// [`KeyRecord::new`], or kept verbatim from the input by the parse family.
/// They are never recomputed, so a parsed record with a wrong checksum keeps
/// its wrong checksum and reports it through [`KeyRecord::is_valid`].
///
/// Two records are equal when their octets are equal.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use keycard_codec::KeyRecord;
/// use keycard_core::{Building, Room};
///
/// let created = NaiveDate::from_ymd_opt(2009, 2, 23)
///     .unwrap()
///     .and_hms_opt(12, 16, 48)
///     .unwrap();
/// let key = KeyRecord::with_default_id(created, Building::B, "120".parse().unwrap()).unwrap();
///
/// assert_eq!(
///     key.dump_readable(),
///     "54 07 10 30 92 5D 88 60 00 21 20 55 00 00 00 00"
/// );
/// assert!(key.is_valid());
///
/// let parsed = KeyRecord::parse(&key.dump()).unwrap();
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyRecord {
    id: u32,
    created: NaiveDateTime,
    building: Building,
    room: Room,
    bytes: [u8; KEY_LENGTH],
}

impl KeyRecord {
    /// Build a record from typed fields and pack it.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` if `created` falls outside
    /// 2000-2255.
    pub fn new(created: NaiveDateTime, building: Building, room: Room, id: u32) -> Result<Self> {
        let created = validate_timestamp(&created)?;
        let bytes = pack::pack(id, &created, building, room);

        Ok(KeyRecord {
            id,
            created,
            building,
            room,
            bytes,
        })
    }

    /// Build a record carrying [`DEFAULT_KEY_ID`].
    ///
    /// # Errors
    /// Same as [`KeyRecord::new`].
    pub fn with_default_id(created: NaiveDateTime, building: Building, room: Room) -> Result<Self> {
        Self::new(created, building, room, DEFAULT_KEY_ID)
    }

    /// Start a builder for untyped input.
    #[must_use]
    pub fn builder() -> KeyRecordBuilder {
        KeyRecordBuilder::new()
    }

    /// Parse a record from a sequence of integers.
    ///
    /// Accepts any integer type so callers holding wider values (`i32`,
    /// `u16`, ...) get range checking instead of a silent truncation.
    ///
    /// # Errors
    /// - `Error::InvalidLength` if there are not exactly 16 values
    /// - `Error::OctetOutOfRange` if a value is outside 0-255
    /// - `Error::InvalidTimestamp` / `Error::InvalidBuilding` if the octets
    ///   do not decode
    pub fn parse<T>(octets: &[T]) -> Result<Self>
    where
        T: Copy + TryInto<u8> + fmt::Display,
    {
        if octets.len() != KEY_LENGTH {
            return Err(Error::InvalidLength {
                expected: KEY_LENGTH,
                actual: octets.len(),
            });
        }

        let mut bytes = [0u8; KEY_LENGTH];
        for (index, (slot, &value)) in bytes.iter_mut().zip(octets).enumerate() {
            *slot = value.try_into().map_err(|_| Error::OctetOutOfRange {
                index,
                value: value.to_string(),
            })?;
        }

        Self::from_bytes(bytes)
    }

    /// Parse a record from the readable text form.
    ///
    /// # Errors
    /// Returns `Error::InvalidReadableFormat` if the text is not 16
    /// whitespace-separated two-digit hex octets, or a decoding error as for
    /// [`KeyRecord::parse`].
    pub fn parse_readable(text: &str) -> Result<Self> {
        Self::from_bytes(parse_readable(text)?)
    }

    /// Parse a record from its raw 16-octet stream form.
    ///
    /// # Errors
    /// Returns `Error::InvalidLength` if `raw` is not exactly 16 octets, or a
    /// decoding error as for [`KeyRecord::parse`].
    pub fn parse_stream(raw: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LENGTH] = raw.try_into().map_err(|_| Error::InvalidLength {
            expected: KEY_LENGTH,
            actual: raw.len(),
        })?;
        Self::from_bytes(bytes)
    }

    /// Decode a record from its octets, keeping them verbatim.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` or `Error::InvalidBuilding` if the
    /// octets do not decode.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Result<Self> {
        let fields = unpack(&bytes)?;

        if checksum::verify(&bytes) {
            trace!(id = fields.id, "parsed key");
        } else {
            debug!(
                id = fields.id,
                stored = bytes[CHECKSUM_INDEX],
                expected = checksum::calculate(&bytes),
                "parsed key with checksum mismatch"
            );
        }

        Ok(KeyRecord {
            id: fields.id,
            created: fields.created,
            building: fields.building,
            room: fields.room,
            bytes,
        })
    }

    /// Returns `true` if the checksum octet matches octets 0-10.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        checksum::verify(&self.bytes)
    }

    /// Canonical octets.
    #[must_use]
    pub fn dump(&self) -> [u8; KEY_LENGTH] {
        self.bytes
    }

    /// Canonical octets, borrowed.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    /// Readable form, e.g. `"54 07 10 30 ..."`.
    #[must_use]
    pub fn dump_readable(&self) -> String {
        format_readable(&self.bytes)
    }

    /// Raw stream form: the 16 octets with no framing.
    #[must_use]
    pub fn dump_stream(&self) -> Bytes {
        Bytes::copy_from_slice(&self.bytes)
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    #[must_use]
    pub fn building(&self) -> Building {
        self.building
    }

    #[must_use]
    pub fn room(&self) -> Room {
        self.room
    }

    /// Stored checksum octet, whether or not it verifies.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.bytes[CHECKSUM_INDEX]
    }
}

impl PartialEq for KeyRecord {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for KeyRecord {}

impl Hash for KeyRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("id", &format_args!("{:#010X}", self.id))
            .field("created", &self.created)
            .field("building", &self.building.symbol())
            .field("room", &self.room.to_string())
            .finish()
    }
}

/// Writes the readable form.
impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.dump_readable())
    }
}

impl FromStr for KeyRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_readable(s)
    }
}

impl TryFrom<[u8; KEY_LENGTH]> for KeyRecord {
    type Error = Error;

    fn try_from(bytes: [u8; KEY_LENGTH]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for KeyRecord {
    type Error = Error;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::parse_stream(raw)
    }
}

impl TryFrom<String> for KeyRecord {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::parse_readable(&text)
    }
}

impl From<KeyRecord> for String {
    fn from(key: KeyRecord) -> Self {
        key.dump_readable()
    }
}
