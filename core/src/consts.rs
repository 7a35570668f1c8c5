// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Ledger NEM App Constants

use static_assertions::const_assert;

/// Application version, reported via `GetAppConfiguration`
pub const APP_VERSION_MAJOR: u8 = parse_version(env!("CARGO_PKG_VERSION_MAJOR"));
pub const APP_VERSION_MINOR: u8 = parse_version(env!("CARGO_PKG_VERSION_MINOR"));
pub const APP_VERSION_PATCH: u8 = parse_version(env!("CARGO_PKG_VERSION_PATCH"));

/// Maximum reassembled transaction size
pub const MAX_RAW_TX: usize = 1024;

/// Maximum number of fields extracted from a single transaction
pub const MAX_FIELD_COUNT: usize = 32;

/// Display value buffer size
pub const MAX_FIELD_LEN: usize = 512;

/// Display label buffer size
pub const MAX_FIELDNAME_LEN: usize = 32;

/// Maximum BIP32 path depth
pub use ledger_nem_apdu::path::MAX_BIP32_PATH;

/// Encoded (base32) address length
pub const NEM_ADDRESS_LENGTH: usize = 40;

/// Raw address length (network byte + ripemd160 + checksum)
pub const NEM_ADDRESS_RAW_LENGTH: usize = 25;

/// ed25519 public key length
pub const NEM_PUBLIC_KEY_LENGTH: usize = 32;

/// Transaction hash length
pub const NEM_TRANSACTION_HASH_LENGTH: usize = 32;

/// Common transaction header length,
/// type, version, reserved, network, timestamp, signer, fee, deadline
pub const COMMON_HEADER_LEN: usize = 4 + 1 + 2 + 1 + 4 + (4 + NEM_PUBLIC_KEY_LENGTH) + 8 + 4;

/// Divisibility of XEM amounts
pub const XEM_DIVISIBILITY: u8 = 6;

const_assert!(COMMON_HEADER_LEN == 60);
const_assert!(MAX_RAW_TX >= COMMON_HEADER_LEN);
const_assert!(MAX_FIELD_LEN > 2 * NEM_TRANSACTION_HASH_LENGTH);
const_assert!(MAX_FIELD_LEN > NEM_ADDRESS_LENGTH);
const_assert!(MAX_FIELD_COUNT <= u8::MAX as usize);

const fn parse_version(s: &str) -> u8 {
    let b = s.as_bytes();
    let mut v: u8 = 0;
    let mut i = 0;

    while i < b.len() {
        v = v.wrapping_mul(10).wrapping_add(b[i].wrapping_sub(b'0'));
        i += 1;
    }

    v
}
