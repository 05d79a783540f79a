use crate::{
    Result,
    constants::{BUILDING_COUNT, MAX_ROOM},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Building a key opens.
///
/// A closed enumeration of 16 entries whose discriminant is the 4-bit index
/// stored on the wire. Index 0 is the [`Building::Unassigned`] sentinel; the
/// letters `I`, `J`, `O` and `Q` are not used.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Building {
    #[default]
    Unassigned = 0,
    A = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    F = 6,
    G = 7,
    H = 8,
    K = 9,
    L = 10,
    M = 11,
    N = 12,
    P = 13,
    R = 14,
    S = 15,
}

impl Building {
    /// Every building in index order.
    pub const ALL: [Building; BUILDING_COUNT] = [
        Building::Unassigned,
        Building::A,
        Building::B,
        Building::C,
        Building::D,
        Building::E,
        Building::F,
        Building::G,
        Building::H,
        Building::K,
        Building::L,
        Building::M,
        Building::N,
        Building::P,
        Building::R,
        Building::S,
    ];

    /// Look up a building by its wire index.
    ///
    /// # Errors
    /// Returns `Error::InvalidBuilding` if the index is not in 0-15.
    #[inline]
    pub fn from_index(index: u32) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::InvalidBuilding(format!("index {index} is not in 0-15")))
    }

    /// Wire index of the building (0-15).
    #[inline]
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a building by its single-letter symbol.
    ///
    /// # Errors
    /// Returns `Error::InvalidBuilding` if the letter is not one of the 15
    /// building symbols. Symbols are case-sensitive.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.symbol() == Some(symbol))
            .ok_or_else(|| Error::InvalidBuilding(format!("'{symbol}' is not a building symbol")))
    }

    /// Single-letter symbol, or `None` for the unassigned sentinel.
    #[must_use]
    pub fn symbol(self) -> Option<char> {
        match self {
            Building::Unassigned => None,
            Building::A => Some('A'),
            Building::B => Some('B'),
            Building::C => Some('C'),
            Building::D => Some('D'),
            Building::E => Some('E'),
            Building::F => Some('F'),
            Building::G => Some('G'),
            Building::H => Some('H'),
            Building::K => Some('K'),
            Building::L => Some('L'),
            Building::M => Some('M'),
            Building::N => Some('N'),
            Building::P => Some('P'),
            Building::R => Some('R'),
            Building::S => Some('S'),
        }
    }

    /// Returns `true` for the unassigned sentinel.
    #[inline]
    #[must_use]
    pub fn is_unassigned(self) -> bool {
        matches!(self, Building::Unassigned)
    }
}

/// Writes the symbol, or nothing for the unassigned sentinel.
impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{symbol}"),
            None => Ok(()),
        }
    }
}

impl std::str::FromStr for Building {
    type Err = Error;

    /// Parse a building symbol. The empty string is the unassigned sentinel.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Building::Unassigned),
            (Some(symbol), None) => Building::from_symbol(symbol),
            _ => Err(Error::InvalidBuilding(format!(
                "'{s}' is not a building symbol"
            ))),
        }
    }
}

impl TryFrom<String> for Building {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Building> for String {
    fn from(building: Building) -> Self {
        building.to_string()
    }
}

/// Room code within a building (0x000-0xFFF).
///
/// Conventionally written as up to three lowercase hexadecimal digits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Room(u16);

impl Room {
    /// Create a room code with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidRoom` if the value exceeds 0xFFF.
    pub fn new(value: u16) -> Result<Self> {
        if value > MAX_ROOM {
            return Err(Error::InvalidRoom(format!(
                "{value:#x} exceeds {MAX_ROOM:#x}"
            )));
        }
        Ok(Room(value))
    }

    /// Get the raw room code.
    #[inline]
    #[must_use]
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl std::str::FromStr for Room {
    type Err = Error;

    /// Parse hexadecimal room text such as `"120"` or `"FFF"`.
    ///
    /// Leading zeros are accepted; signs, prefixes and whitespace are not.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidRoom(format!("'{s}' is not hexadecimal")));
        }
        let digits = s.trim_start_matches('0');
        if digits.len() > 3 {
            return Err(Error::InvalidRoom(format!("'{s}' exceeds {MAX_ROOM:#x}")));
        }
        let value = if digits.is_empty() {
            0
        } else {
            u16::from_str_radix(digits, 16)
                .map_err(|e| Error::InvalidRoom(format!("'{s}': {e}")))?
        };
        Room::new(value)
    }
}

impl TryFrom<u16> for Room {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Room::new(value)
    }
}

impl TryFrom<String> for Room {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Room> for String {
    fn from(room: Room) -> Self {
        room.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_building_indices_are_dense() {
        for (i, building) in Building::ALL.iter().enumerate() {
            assert_eq!(building.index() as usize, i);
            assert_eq!(Building::from_index(i as u32).unwrap(), *building);
        }
        assert!(Building::from_index(16).is_err());
    }

    #[rstest]
    #[case('A', 1)]
    #[case('H', 8)]
    #[case('K', 9)]
    #[case('P', 13)]
    #[case('S', 15)]
    fn test_building_symbol_valid(#[case] symbol: char, #[case] index: u8) {
        let building = Building::from_symbol(symbol).unwrap();
        assert_eq!(building.index(), index);
        assert_eq!(building.symbol(), Some(symbol));
    }

    #[rstest]
    #[case('I')]
    #[case('J')]
    #[case('O')]
    #[case('Q')]
    #[case('T')]
    #[case('a')] // symbols are uppercase only
    fn test_building_symbol_invalid(#[case] symbol: char) {
        assert!(matches!(
            Building::from_symbol(symbol),
            Err(Error::InvalidBuilding(_))
        ));
    }

    #[rstest]
    #[case("", Building::Unassigned)]
    #[case("B", Building::B)]
    #[case("R", Building::R)]
    fn test_building_from_str(#[case] input: &str, #[case] expected: Building) {
        let building: Building = input.parse().unwrap();
        assert_eq!(building, expected);
        assert_eq!(building.to_string(), input);
    }

    #[rstest]
    #[case("AB")]
    #[case("Z")]
    #[case(" ")]
    fn test_building_from_str_invalid(#[case] input: &str) {
        let result: Result<Building> = input.parse();
        assert!(matches!(result, Err(Error::InvalidBuilding(_))));
    }

    #[test]
    fn test_building_default_is_unassigned() {
        assert!(Building::default().is_unassigned());
        assert_eq!(Building::Unassigned.symbol(), None);
    }

    #[rstest]
    #[case("0", 0x000)]
    #[case("120", 0x120)]
    #[case("fff", 0xFFF)]
    #[case("FFF", 0xFFF)]
    #[case("000a", 0x00A)]
    fn test_room_valid(#[case] input: &str, #[case] expected: u16) {
        let room: Room = input.parse().unwrap();
        assert_eq!(room.as_u16(), expected);
    }

    #[rstest]
    #[case("1000")] // > 0xFFF
    #[case("ffff")]
    #[case("")]
    #[case("xyz")]
    #[case("+12")]
    #[case("0x12")]
    #[case(" 12")]
    fn test_room_invalid(#[case] input: &str) {
        let result: Result<Room> = input.parse();
        assert!(matches!(result, Err(Error::InvalidRoom(_))));
    }

    #[test]
    fn test_room_formats_lowercase_hex() {
        assert_eq!(Room::new(0xABC).unwrap().to_string(), "abc");
        assert_eq!(Room::new(0x00A).unwrap().to_string(), "a");
        assert!(Room::new(0x1000).is_err());
    }

    #[test]
    fn test_serde_text_forms() {
        let json = serde_json::to_string(&Building::M).unwrap();
        assert_eq!(json, "\"M\"");
        let back: Building = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Building::M);

        let json = serde_json::to_string(&Room::new(0x2F0).unwrap()).unwrap();
        assert_eq!(json, "\"2f0\"");
        assert!(serde_json::from_str::<Room>("\"1000\"").is_err());
    }
}
