//! Tokio codec for streams of back-to-back key records.
//!
//! The raw stream form of a record has no framing, so a transport carrying
//! several records is simply their octets concatenated. `KeyCodec` slices
//! such a stream into 16-octet records for Tokio's `Framed`, `FramedRead`
//! and `FramedWrite`.
//!
//! # Architecture
//!
//! ```text
//! Byte stream -> Decoder -> KeyRecord (octets kept verbatim)
//! KeyRecord -> Encoder -> Byte stream (16 octets, no delimiters)
//! ```
//!
//! # Error Handling
//!
//! A record that fails to decode is consumed before the error is returned,
//! so the stream stays aligned on 16-octet boundaries and the caller may
//! keep reading. A partial record left when the stream ends is reported as
//! `Error::InvalidLength`. Checksum mismatches are not errors; inspect
//! [`KeyRecord::is_valid`] on each decoded record.
//!
//! # Usage with Tokio Framed
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use keycard_codec::KeyCodec;
//! use tokio::fs::File;
//! use tokio_util::codec::FramedRead;
//!
//! # async fn example() -> keycard_core::Result<()> {
//! let file = File::open("keys.bin").await?;
//! let mut keys = FramedRead::new(file, KeyCodec::new());
//!
//! while let Some(key) = keys.next().await {
//!     let key = key?;
//!     println!("{key:?} valid={}", key.is_valid());
//! }
//! # Ok(())
//! # }
//! ```

use bytes::{Buf, BytesMut};
use keycard_core::{Error, Result, constants::KEY_LENGTH};
use tokio_util::codec::{Decoder, Encoder};
use tracing::debug;

use crate::KeyRecord;

/// Tokio codec for concatenated key records.
#[derive(Debug, Clone, Default)]
pub struct KeyCodec {
    decoded: u64,
}

impl KeyCodec {
    /// Create a new codec.
    ///
    /// # Example
    ///
    /// ```
    /// use keycard_codec::KeyCodec;
    ///
    /// let codec = KeyCodec::new();
    /// assert_eq!(codec.decoded(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records taken off the stream so far, failed ones included.
    pub fn decoded(&self) -> u64 {
        self.decoded
    }
}

impl Decoder for KeyCodec {
    type Item = KeyRecord;
    type Error = Error;

    /// Decode the next record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(KeyRecord))` - A complete record was decoded
    /// - `Ok(None)` - Fewer than 16 octets are buffered
    /// - `Err(Error)` - The next 16 octets do not decode; they are consumed
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::BytesMut;
    /// use tokio_util::codec::Decoder;
    /// use keycard_codec::KeyCodec;
    ///
    /// let mut codec = KeyCodec::new();
    /// let mut buffer = BytesMut::from(&[0x54u8, 0x07, 0x10, 0x30][..]);
    /// assert!(codec.decode(&mut buffer).unwrap().is_none());
    ///
    /// buffer.extend_from_slice(&[0x92, 0x5D, 0x88, 0x60, 0x00, 0x21, 0x20, 0x55, 0, 0, 0, 0]);
    /// let key = codec.decode(&mut buffer).unwrap().unwrap();
    /// assert!(key.is_valid());
    /// assert!(buffer.is_empty());
    /// ```
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < KEY_LENGTH {
            src.reserve(KEY_LENGTH - src.len());
            return Ok(None);
        }

        let mut octets = [0u8; KEY_LENGTH];
        src.copy_to_slice(&mut octets);
        self.decoded += 1;

        let key = KeyRecord::from_bytes(octets)?;
        debug!(
            sequence = self.decoded,
            id = key.id(),
            valid = key.is_valid(),
            "decoded key from stream"
        );
        Ok(Some(key))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        match self.decode(src)? {
            Some(key) => Ok(Some(key)),
            None if src.is_empty() => Ok(None),
            None => {
                let actual = src.len();
                src.clear();
                Err(Error::InvalidLength {
                    expected: KEY_LENGTH,
                    actual,
                })
            }
        }
    }
}

impl Encoder<KeyRecord> for KeyCodec {
    type Error = Error;

    /// Write the record's octets verbatim.
    fn encode(&mut self, item: KeyRecord, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(KEY_LENGTH);
        dst.extend_from_slice(item.as_bytes());
        Ok(())
    }
}
