//! Reading a single record from a byte source.
//!
//! Each reader takes ownership of its source, reads at most 16 octets, and
//! drops the source before decoding. Files and sockets are therefore closed
//! on every exit path, including read errors and short reads. Pass
//! `&mut source` to keep using a source afterwards.
//!
//! Short sources fail with `Error::InvalidLength`, reporting how many octets
//! were available.

use crate::record::KeyRecord;
use keycard_core::{Result, constants::KEY_LENGTH};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

impl KeyRecord {
    /// Read one record from a blocking source.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading fails, `Error::InvalidLength` if the
    /// source ends before 16 octets, or a decoding error as for
    /// [`KeyRecord::parse_stream`].
    ///
    /// # Example
    /// ```
    /// use keycard_codec::KeyRecord;
    ///
    /// let raw: &[u8] = &[
    ///     0x54, 0x07, 0x10, 0x30, 0x92, 0x5D, 0x88, 0x60,
    ///     0x00, 0x21, 0x20, 0x55, 0x00, 0x00, 0x00, 0x00,
    /// ];
    /// let key = KeyRecord::parse_from_source(raw).unwrap();
    /// assert!(key.is_valid());
    /// ```
    pub fn parse_from_source<R: Read>(source: R) -> Result<Self> {
        let mut buffer = Vec::with_capacity(KEY_LENGTH);
        let read = source.take(KEY_LENGTH as u64).read_to_end(&mut buffer)?;
        trace!(read, "read key from source");
        Self::parse_stream(&buffer)
    }

    /// Open a file and read one record from its start.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened or read, otherwise as
    /// for [`KeyRecord::parse_from_source`].
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::parse_from_source(file)
    }

    /// Read one record from an async source.
    ///
    /// # Errors
    /// Same as [`KeyRecord::parse_from_source`].
    pub async fn parse_from_async_source<R>(source: R) -> Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut buffer = Vec::with_capacity(KEY_LENGTH);
        let read = source
            .take(KEY_LENGTH as u64)
            .read_to_end(&mut buffer)
            .await?;
        trace!(read, "read key from async source");
        Self::parse_stream(&buffer)
    }
}
