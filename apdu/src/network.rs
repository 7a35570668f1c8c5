// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM network selection
//!
//! The network (and the hash algorithm used for addresses and signatures)
//! is selected by the coin-type-adjacent element of the BIP32 path,
//! `m/44'/43'/<network>'/...`.

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::path::{Bip32Path, HARDENED};

/// NEM network identifiers (also the leading address byte)
#[derive(
    Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter, TryFromPrimitive,
)]
#[repr(u8)]
pub enum NetworkType {
    Mainnet = 0x68,
    Testnet = 0x98,
    MijinMainnet = 0x60,
    MijinTestnet = 0x90,
}

/// Hash algorithm for the selected network
#[derive(Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum Algorithm {
    /// Keccak-256 (pre-standardisation SHA3 padding)
    Keccak,
    /// FIPS-202 SHA3-256
    Sha3,
}

impl NetworkType {
    /// Resolve network type from a derivation path, using the third element
    pub fn from_path(path: &Bip32Path) -> Option<Self> {
        let v = path.get(2)?;

        // Network element must be hardened
        if v & HARDENED == 0 {
            return None;
        }

        match u8::try_from(v & !HARDENED) {
            Ok(n) => NetworkType::try_from(n).ok(),
            Err(_) => None,
        }
    }

    /// Hash algorithm used for this network
    pub fn algorithm(&self) -> Algorithm {
        match self {
            NetworkType::Mainnet | NetworkType::Testnet => Algorithm::Keccak,
            NetworkType::MijinMainnet | NetworkType::MijinTestnet => Algorithm::Sha3,
        }
    }
}
