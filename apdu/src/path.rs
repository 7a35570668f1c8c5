// Copyright (c) 2022-2023 The MobileCoin Foundation

//! BIP32 derivation path encoding
//!
//! ## Encoding
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      LEN      |          PATH[0] (BE)                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |               |          PATH[N] (BE) ...                     /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use byteorder::{BigEndian, ByteOrder};
use encdec::{DecodeOwned, Encode};
use heapless::Vec;

use crate::ApduError;

/// Maximum BIP32 path depth
pub const MAX_BIP32_PATH: usize = 5;

/// Hardened derivation flag
pub const HARDENED: u32 = 0x8000_0000;

/// BIP32 derivation path, between 1 and [`MAX_BIP32_PATH`] elements
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Bip32Path(Vec<u32, MAX_BIP32_PATH>);

impl Bip32Path {
    /// Create a new path from a slice of elements
    pub fn new(elements: &[u32]) -> Result<Self, ApduError> {
        if elements.is_empty() {
            return Err(ApduError::InvalidEncoding);
        }

        Vec::from_slice(elements)
            .map(Self)
            .map_err(|_| ApduError::InvalidEncoding)
    }

    /// Fetch element at the provided index
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Path depth
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clear path elements
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl AsRef<[u32]> for Bip32Path {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl Encode for Bip32Path {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(1 + self.0.len() * 4)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.encode_len()?;
        if buff.len() < n {
            return Err(ApduError::InvalidLength);
        }

        buff[0] = self.0.len() as u8;
        for (i, v) in self.0.iter().enumerate() {
            BigEndian::write_u32(&mut buff[1 + i * 4..], *v);
        }

        Ok(n)
    }
}

impl DecodeOwned for Bip32Path {
    type Output = Self;

    type Error = ApduError;

    /// Decode a length-prefixed path, a depth of zero or over [`MAX_BIP32_PATH`]
    /// is rejected with [`ApduError::InvalidEncoding`]
    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        let len = match buff.first() {
            Some(v) => *v as usize,
            None => return Err(ApduError::InvalidLength),
        };

        if len == 0 || len > MAX_BIP32_PATH {
            return Err(ApduError::InvalidEncoding);
        }

        let n = 1 + len * 4;
        if buff.len() < n {
            return Err(ApduError::InvalidLength);
        }

        let mut p = Vec::new();
        for c in buff[1..n].chunks_exact(4) {
            // Bounded by the depth check above
            let _ = p.push(BigEndian::read_u32(c));
        }

        Ok((Self(p), n))
    }
}
