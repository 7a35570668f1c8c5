// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM address derivation
//!
//! `address = base32(network || ripemd160(H(pk)) || H(network || ripemd160(H(pk)))[..4])`
//! where `H` is Keccak-256 for mainnet / testnet and SHA3-256 for mijin networks.

use data_encoding::BASE32;
use ripemd::Ripemd160;
use sha3::{Digest, Keccak256, Sha3_256};

use crate::{
    apdu::network::{Algorithm, NetworkType},
    consts::{NEM_ADDRESS_LENGTH, NEM_ADDRESS_RAW_LENGTH, NEM_PUBLIC_KEY_LENGTH},
};

/// Derive the base32 address for a public key on the provided network
pub fn public_key_to_address(
    public_key: &[u8; NEM_PUBLIC_KEY_LENGTH],
    network: NetworkType,
) -> [u8; NEM_ADDRESS_LENGTH] {
    match network.algorithm() {
        Algorithm::Keccak => derive::<Keccak256>(public_key, network),
        Algorithm::Sha3 => derive::<Sha3_256>(public_key, network),
    }
}

#[cfg_attr(feature = "noinline", inline(never))]
fn derive<H: Digest>(
    public_key: &[u8; NEM_PUBLIC_KEY_LENGTH],
    network: NetworkType,
) -> [u8; NEM_ADDRESS_LENGTH] {
    let mut raw = [0u8; NEM_ADDRESS_RAW_LENGTH];

    let h = H::digest(public_key);
    let r = Ripemd160::digest(&h);

    raw[0] = network as u8;
    raw[1..21].copy_from_slice(&r);

    let checksum = H::digest(&raw[..21]);
    raw[21..].copy_from_slice(&checksum[..4]);

    let mut addr = [0u8; NEM_ADDRESS_LENGTH];
    BASE32.encode_mut(&raw, &mut addr);

    addr
}
