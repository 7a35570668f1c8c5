// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction test vectors
//!
//! Each vector pairs a [`TxDesc`] with the derivation path used for signing
//! and the ordered `(label, value)` fields expected on review.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{builder::TxDesc, Error};

/// Hardened derivation path element
pub const HARDENED: u32 = 0x8000_0000;

/// Transaction test vector
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Vector {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Derivation path, `m/44'/43'/<network>'/...`
    pub path: String,

    pub tx: TxDesc,

    /// Expected `(label, value)` pairs
    pub fields: Vec<(String, String)>,
}

impl Vector {
    /// Load a vector from JSON
    pub fn load(s: &str) -> Result<Self, Error> {
        let v = serde_json::from_str(s)?;
        Ok(v)
    }

    /// Read a vector from a JSON file
    pub fn read<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Self::load(&s)
    }

    /// Serialise the vector transaction
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        self.tx.encode()
    }

    /// Derivation path elements
    pub fn path(&self) -> Result<Vec<u32>, Error> {
        parse_path(&self.path)
    }
}

/// Parse a `m/44'/43'/...` style derivation path
pub fn parse_path(s: &str) -> Result<Vec<u32>, Error> {
    let invalid = || Error::InvalidPath(s.to_string());

    let mut parts = s.split('/');
    if parts.next() != Some("m") {
        return Err(invalid());
    }

    parts
        .map(|p| {
            let (v, hardened) = match p.strip_suffix('\'') {
                Some(v) => (v, true),
                None => (p, false),
            };

            let v: u32 = v.parse().map_err(|_| invalid())?;
            if v & HARDENED != 0 {
                return Err(invalid());
            }

            match hardened {
                true => Ok(v | HARDENED),
                false => Ok(v),
            }
        })
        .collect()
}

const SOURCES: &[&str] = &[
    include_str!("../vectors/transfer.json"),
    include_str!("../vectors/transfer_hex_message.json"),
    include_str!("../vectors/transfer_encrypted_message.json"),
    include_str!("../vectors/transfer_empty_message.json"),
    include_str!("../vectors/transfer_mosaics.json"),
    include_str!("../vectors/transfer_mosaics_2.json"),
    include_str!("../vectors/transfer_no_mosaics.json"),
    include_str!("../vectors/importance_transfer.json"),
    include_str!("../vectors/aggregate_modification.json"),
    include_str!("../vectors/aggregate_modification_v2.json"),
    include_str!("../vectors/aggregate_modification_v2_no_change.json"),
    include_str!("../vectors/provision_subnamespace.json"),
    include_str!("../vectors/mosaic_definition.json"),
    include_str!("../vectors/mosaic_definition_levy.json"),
    include_str!("../vectors/mosaic_supply_change.json"),
    include_str!("../vectors/mosaic_supply_delete.json"),
    include_str!("../vectors/multisig_transfer.json"),
    include_str!("../vectors/multisig_provision_root.json"),
    include_str!("../vectors/multisig_mosaic_definition.json"),
    include_str!("../vectors/multisig_mosaic_definition_levy.json"),
    include_str!("../vectors/cosignature.json"),
    include_str!("../vectors/cosignature_transfer.json"),
    include_str!("../vectors/cosignature_provision.json"),
];

lazy_static! {
    /// Bundled test vectors
    pub static ref VECTORS: Vec<Vector> = SOURCES
        .iter()
        .map(|s| Vector::load(s).expect("invalid bundled vector"))
        .collect();
}

/// Fetch a bundled vector by name
pub fn find(name: &str) -> Result<&'static Vector, Error> {
    VECTORS
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| Error::UnknownVector(name.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn load_vectors() {
        assert_eq!(VECTORS.len(), SOURCES.len());

        for v in VECTORS.iter() {
            let b = v.encode().unwrap();
            assert!(b.len() > 60, "{}", v.name);
            assert!(!v.fields.is_empty(), "{}", v.name);
        }

        assert!(find("transfer").is_ok());
        assert!(find("missing").is_err());
    }

    #[test]
    fn read_missing_file() {
        let r = Vector::read("vectors/does_not_exist.json");
        assert!(matches!(r, Err(Error::Io(_))), "{r:?}");
    }

    #[test]
    fn derivation_paths() {
        assert_eq!(
            parse_path("m/44'/43'/152'/0'/0'").unwrap(),
            &[
                0x8000_002c,
                0x8000_002b,
                0x8000_0098,
                0x8000_0000,
                0x8000_0000
            ]
        );
        assert_eq!(parse_path("m/1/2'").unwrap(), &[1, 0x8000_0002]);
        assert_eq!(parse_path("m").unwrap(), &[] as &[u32]);

        assert!(parse_path("44'/43'").is_err());
        assert!(parse_path("m/x'").is_err());
        assert!(parse_path("m/2147483648'").is_err());
    }
}
