// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::{readers, Error};

/// Bounds-checked, forward-only reader over a transaction buffer
///
/// All reads check `offset + n <= len` (without overflow) before advancing,
/// an out-of-bounds request fails with [`Error::NotEnoughData`] and leaves
/// the offset untouched.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over the provided buffer
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Bytes remaining
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check whether the cursor is exhausted
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Check whether `n` more bytes are available
    pub fn has_data(&self, n: usize) -> bool {
        match self.offset.checked_add(n) {
            Some(end) => end <= self.data.len(),
            None => false,
        }
    }

    /// Read exactly `n` bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if !self.has_data(n) {
            return Err(Error::NotEnoughData);
        }

        let start = self.offset;
        self.offset += n;

        #[cfg(feature = "log")]
        log::trace!(
            "read {} bytes, offset {} -> {} / {}",
            n,
            start,
            self.offset,
            self.data.len()
        );

        Ok(&self.data[start..self.offset])
    }

    /// Read a fixed size array
    pub fn read_array<const N: usize>(&mut self) -> Result<&'a [u8; N], Error> {
        let b = self.read_bytes(N)?;
        b.try_into().map_err(|_| Error::NotEnoughData)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let b = self.read_bytes(1)?;
        Ok(readers::read_u8(b, 0))
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let b = self.read_bytes(2)?;
        Ok(readers::read_u16(b, 0))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let b = self.read_bytes(4)?;
        Ok(readers::read_u32(b, 0))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        let b = self.read_bytes(8)?;
        Ok(readers::read_u64(b, 0))
    }

    /// Read a `u32` length prefix
    pub fn read_len(&mut self) -> Result<usize, Error> {
        let n = self.read_u32()?;
        usize::try_from(n).map_err(|_| Error::NotEnoughData)
    }

    /// Read a `u32` length-prefixed byte string
    pub fn read_prefixed(&mut self) -> Result<&'a [u8], Error> {
        let n = self.read_len()?;
        self.read_bytes(n)
    }

    /// Split off the next `n` bytes as a nested cursor, advancing this
    /// cursor past them
    pub fn split(&mut self, n: usize) -> Result<Cursor<'a>, Error> {
        self.read_bytes(n).map(Cursor::new)
    }

    /// Check the cursor has been fully consumed
    pub fn finish(&self) -> Result<(), Error> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(Error::InvalidData),
        }
    }
}
