// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Protocol / APDU definitions for NEM app communication
//!
//! This module provides the command set understood by the NEM wallet application,
//! status words returned to the host, and the encodings for signing requests.
//!
//! Unlike the transaction payload (which is little-endian NIS1 serialisation),
//! BIP32 derivation paths are transmitted as big-endian `u32`s, prefixed by a
//! single length byte.
//!
//! Transactions larger than a single APDU are streamed as a sequence of
//! [`SignTxReq`][sign::SignTxReq] chunks, see [`sign`] for P1 flag semantics.
//!

#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(test)]
use core::fmt::Debug;

pub use ledger_proto::{ApduError, ApduReq, ApduStatic};

pub mod app_config;
pub mod network;
pub mod path;
pub mod prelude;
pub mod sign;
pub mod status;

/// NEM APDU Class
pub const NEM_APDU_CLA: u8 = 0xe0;

/// Maximum APDU payload length
pub const MAX_APDU_PAYLOAD: usize = 255;

/// NEM APDU instruction codes
#[derive(Copy, Clone, Debug, PartialEq, num_enum::TryFromPrimitive)]
#[repr(u8)]
pub enum Instruction {
    /// Fetch account public key / address
    GetPublicKey = 0x02,

    /// Sign a (possibly chunked) transaction
    Sign = 0x04,

    /// Fetch delegated harvesting remote account
    GetRemoteAccount = 0x05,

    /// Fetch application configuration / version
    GetAppConfiguration = 0x06,
}

/// Helper macro for encoding `bitflags` types
#[macro_export]
macro_rules! encdec_bitflags {
    ($b:ty) => {
        impl encdec::Encode for $b {
            type Error = ApduError;

            fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
                let bits: u8 = self.bits();
                encdec::Encode::encode(&bits, buff).map_err(|e| e.into())
            }

            fn encode_len(&self) -> Result<usize, Self::Error> {
                let bits: u8 = self.bits();
                encdec::Encode::encode_len(&bits).map_err(|e| e.into())
            }
        }

        impl encdec::DecodeOwned for $b {
            type Output = $b;
            type Error = ApduError;

            fn decode_owned(buff: &[u8]) -> Result<(Self, usize), Self::Error> {
                match buff.first() {
                    Some(b) => Ok((<$b>::from_bits_truncate(*b), 1)),
                    None => Err(ApduError::InvalidLength),
                }
            }
        }
    };
}
