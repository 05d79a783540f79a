//! Bit-field layout of the packed timestamp and location words.
//!
//! Both words pack several narrow fields into one big-endian integer. Every
//! shift and mask used by the packer and the unpacker comes from the table
//! below, so the two directions cannot drift apart.
//!
//! # Timestamp word (octets 4-7)
//!
//! ```text
//!  31    28 27    24 23      18 17     13 12      7 6       1  0
//! [ year  ][ month ][   day    ][ hour12 ][ minute ][ second ][pm]
//!   4 bits  4 bits    6 bits     5 bits    6 bits    6 bits   1
//! ```
//!
//! - `year` holds `year - 2000`, truncated to its low nibble.
//! - `hour12` is `hour - 12` when `hour > 12` (and `pm` is set), otherwise
//!   `hour` unchanged with `pm` clear. Noon is therefore `12` with `pm = 0`
//!   and midnight is `0` with `pm = 0`.
//!
//! # Location word (octets 8-10)
//!
//! ```text
//!  23       16 15      12 11                0
//! [  unused  ][ building ][       room       ]
//!    8 bits      4 bits         12 bits
//! ```
//!
//! The unused top octet is always zero in records built by this crate.

/// A contiguous run of bits inside a packed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Position of the least significant bit of the field.
    pub shift: u32,
    /// Number of bits in the field.
    pub width: u32,
}

impl BitField {
    #[must_use]
    pub const fn new(shift: u32, width: u32) -> Self {
        BitField { shift, width }
    }

    /// Mask of the field's bits before shifting into place.
    #[inline]
    #[must_use]
    pub const fn max(self) -> u32 {
        (1 << self.width) - 1
    }

    /// Mask of the field's bits in its packed position.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.max() << self.shift
    }

    /// Place `value` in the field. Bits above the field's width are dropped.
    #[inline]
    #[must_use]
    pub const fn insert(self, value: u32) -> u32 {
        (value & self.max()) << self.shift
    }

    /// Read the field out of a packed word.
    #[inline]
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.shift
    }
}

// Timestamp word
pub const TS_YEAR: BitField = BitField::new(28, 4);
pub const TS_MONTH: BitField = BitField::new(24, 4);
pub const TS_DAY: BitField = BitField::new(18, 6);
pub const TS_HOUR: BitField = BitField::new(13, 5);
pub const TS_MINUTE: BitField = BitField::new(7, 6);
pub const TS_SECOND: BitField = BitField::new(1, 6);
pub const TS_PM: BitField = BitField::new(0, 1);

// Location word
pub const LOC_BUILDING: BitField = BitField::new(12, 4);
pub const LOC_ROOM: BitField = BitField::new(0, 12);

/// Bits of the 24-bit location region that carry data.
pub const LOC_DATA_MASK: u32 = LOC_BUILDING.mask() | LOC_ROOM.mask();

/// Hours above this value are written with the pm flag set.
pub const PM_THRESHOLD: u32 = 12;
