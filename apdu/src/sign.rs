// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction signing APDUs
//!
//! Raw NIS1 transactions are streamed to the device in chunks of at most
//! [`MAX_APDU_PAYLOAD`] bytes. The first chunk carries the BIP32 derivation
//! path ahead of the transaction bytes, subsequent chunks carry only
//! transaction bytes.
//!
//! Chunk ordering is signalled via P1 ([`SignFlags`]):
//! - [`SignFlags::CONTINUATION`] is clear for the first chunk and set for every following chunk
//! - [`SignFlags::MORE`] is set while more chunks are to follow
//!
//! ## Encoding (first chunk)
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |   PATH_LEN    |       PATH (PATH_LEN * 4 bytes, BE)           /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! /                     TRANSACTION DATA...                       /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The response to the final chunk is deferred until the user has
//! reviewed the transaction, returning the 64-byte signature.

use encdec::{DecodeOwned, Encode};

use crate::{
    path::Bip32Path, ApduError, ApduStatic, Instruction, MAX_APDU_PAYLOAD, NEM_APDU_CLA,
};

/// Signature length (ed25519)
pub const SIGNATURE_LEN: usize = 64;

bitflags::bitflags! {
    /// Sign request P1 flags
    pub struct SignFlags: u8 {
        /// Set for all chunks following the first
        const CONTINUATION = 0x01;
        /// Set while further chunks are to follow
        const MORE = 0x80;
    }
}

impl SignFlags {
    /// Check whether this is the first chunk of a transaction
    pub fn is_first(&self) -> bool {
        !self.contains(SignFlags::CONTINUATION)
    }

    /// Check whether more chunks are to follow
    pub fn has_more(&self) -> bool {
        self.contains(SignFlags::MORE)
    }
}

/// Transaction signing request chunk
#[derive(Clone, PartialEq, Debug)]
pub struct SignTxReq<'a> {
    /// Chunk flags (transmitted in P1)
    pub flags: SignFlags,

    /// Derivation path, present on the first chunk only
    pub path: Option<Bip32Path>,

    /// Transaction data
    pub data: &'a [u8],
}

impl<'a> ApduStatic for SignTxReq<'a> {
    const CLA: u8 = NEM_APDU_CLA;

    const INS: u8 = Instruction::Sign as u8;
}

impl<'a> SignTxReq<'a> {
    /// Create a new first-chunk request
    pub fn first(path: Bip32Path, data: &'a [u8], more: bool) -> Self {
        let mut flags = SignFlags::empty();
        flags.set(SignFlags::MORE, more);

        Self {
            flags,
            path: Some(path),
            data,
        }
    }

    /// Create a new continuation request
    pub fn next(data: &'a [u8], more: bool) -> Self {
        let mut flags = SignFlags::CONTINUATION;
        flags.set(SignFlags::MORE, more);

        Self {
            flags,
            path: None,
            data,
        }
    }

    /// P1 value for this request
    pub fn p1(&self) -> u8 {
        self.flags.bits()
    }

    /// Decode a request payload, using the P1 flags to determine whether
    /// a derivation path is expected
    pub fn decode(p1: u8, buff: &'a [u8]) -> Result<(Self, usize), ApduError> {
        let flags = SignFlags::from_bits_truncate(p1);

        let (path, n) = match flags.is_first() {
            true => {
                let (p, n) = Bip32Path::decode_owned(buff)?;
                (Some(p), n)
            }
            false => (None, 0),
        };

        Ok((
            Self {
                flags,
                path,
                data: &buff[n..],
            },
            buff.len(),
        ))
    }
}

impl<'a> Encode for SignTxReq<'a> {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        let mut n = self.data.len();
        if let Some(p) = &self.path {
            n += p.encode_len()?;
        }
        Ok(n)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let mut index = 0;

        // Paths are only valid on the first chunk
        match (&self.path, self.flags.is_first()) {
            (Some(p), true) => index += p.encode(buff)?,
            (None, false) => (),
            _ => return Err(ApduError::InvalidEncoding),
        }

        if buff.len() < index + self.data.len() {
            return Err(ApduError::InvalidLength);
        }

        buff[index..][..self.data.len()].copy_from_slice(self.data);
        index += self.data.len();

        Ok(index)
    }
}

/// Transaction signature response, returned once the user approves
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SignResp {
    pub signature: [u8; SIGNATURE_LEN],
}

impl SignResp {
    pub fn new(signature: [u8; SIGNATURE_LEN]) -> Self {
        Self { signature }
    }
}

impl Encode for SignResp {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(SIGNATURE_LEN)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        if buff.len() < SIGNATURE_LEN {
            return Err(ApduError::InvalidLength);
        }

        buff[..SIGNATURE_LEN].copy_from_slice(&self.signature);

        Ok(SIGNATURE_LEN)
    }
}

impl DecodeOwned for SignResp {
    type Output = Self;

    type Error = ApduError;

    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        let mut signature = [0u8; SIGNATURE_LEN];

        match buff.get(..SIGNATURE_LEN) {
            Some(b) => signature.copy_from_slice(b),
            None => return Err(ApduError::InvalidLength),
        }

        Ok((Self { signature }, SIGNATURE_LEN))
    }
}

/// Split a transaction into a sequence of [`SignTxReq`] chunks
pub struct SignChunks<'a> {
    path: Option<Bip32Path>,
    tx: &'a [u8],
    first: bool,
}

impl<'a> SignChunks<'a> {
    /// Create a chunk iterator for the provided path and raw transaction
    pub fn new(path: Bip32Path, tx: &'a [u8]) -> Self {
        Self {
            path: Some(path),
            tx,
            first: true,
        }
    }
}

impl<'a> Iterator for SignChunks<'a> {
    type Item = SignTxReq<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.first && self.tx.is_empty() {
            return None;
        }

        let capacity = match &self.path {
            Some(p) => MAX_APDU_PAYLOAD - 1 - p.len() * 4,
            None => MAX_APDU_PAYLOAD,
        };

        let n = self.tx.len().min(capacity);
        let (data, rest) = self.tx.split_at(n);
        self.tx = rest;
        let more = !rest.is_empty();

        let r = match self.path.take() {
            Some(p) => SignTxReq::first(p, data, more),
            None => SignTxReq::next(data, more),
        };
        self.first = false;

        Some(r)
    }
}
