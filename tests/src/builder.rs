// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NIS1 transaction builder
//!
//! Transactions are described in JSON (see `vectors/`) and serialised to the
//! little-endian wire encoding expected by the wallet. Every variable length
//! element is prefixed with a `u32` length.

use std::io::Write;

use byteorder::{LittleEndian as LE, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Encoded address length
pub const ADDRESS_LEN: usize = 40;

/// ed25519 public key length
pub const PUBLIC_KEY_LEN: usize = 32;

/// SHA3-256 transaction hash length
pub const HASH_LEN: usize = 32;

/// Parent length sentinel for root namespaces
const ROOT_NAMESPACE: u32 = u32::MAX;

/// Default signer public key
const DEFAULT_SIGNER: &str = "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844";

/// Transaction description, common header and transaction body
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TxDesc {
    #[serde(default = "default_version")]
    pub version: u8,

    #[serde(default = "default_network")]
    pub network: u8,

    #[serde(default)]
    pub timestamp: u32,

    /// Signer public key (hex)
    #[serde(default = "default_signer")]
    pub signer: String,

    /// Fee in micro XEM
    pub fee: u64,

    #[serde(default)]
    pub deadline: u32,

    pub body: Body,
}

fn default_version() -> u8 {
    1
}

fn default_network() -> u8 {
    0x98
}

fn default_signer() -> String {
    DEFAULT_SIGNER.to_string()
}

fn default_payload_type() -> u32 {
    1
}

/// Transaction bodies
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    Transfer {
        recipient: String,
        amount: u64,
        #[serde(default)]
        message: Option<MessageDesc>,
        /// Attached mosaics (version 2 only)
        #[serde(default)]
        mosaics: Vec<MosaicDesc>,
    },
    ImportanceTransfer {
        mode: u32,
        /// Remote account public key (hex)
        remote: String,
    },
    AggregateModification {
        modifications: Vec<ModificationDesc>,
        /// Relative change to minimum cosignatories (version 2 only)
        #[serde(default)]
        min_cosignatories: Option<i32>,
    },
    MultisigSignature {
        /// Hash of the transaction being cosigned (hex)
        hash: String,
        multisig_address: String,
        /// Transaction being cosigned, appended for review
        #[serde(default)]
        cosigned: Option<Box<TxDesc>>,
    },
    Multisig {
        inner: Box<TxDesc>,
    },
    ProvisionNamespace {
        sink: String,
        rental_fee: u64,
        namespace: String,
        /// Parent namespace, `None` to create a new root
        #[serde(default)]
        parent: Option<String>,
    },
    MosaicDefinition {
        /// Creator public key (hex)
        creator: String,
        namespace: String,
        name: String,
        description: String,
        #[serde(default)]
        properties: Vec<PropertyDesc>,
        #[serde(default)]
        levy: Option<LevyDesc>,
        sink: String,
        rental_fee: u64,
    },
    MosaicSupplyChange {
        namespace: String,
        name: String,
        supply_type: u32,
        delta: u64,
    },
}

/// Transfer message
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MessageDesc {
    /// Payload type, 1 for plaintext, 2 for encrypted
    #[serde(default = "default_payload_type")]
    pub payload_type: u32,

    /// Text payload
    #[serde(default)]
    pub text: Option<String>,

    /// Raw payload (hex), used where `text` is not set
    #[serde(default)]
    pub hex: Option<String>,
}

/// Mosaic attachment
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MosaicDesc {
    pub namespace: String,
    pub name: String,
    pub quantity: u64,
}

/// Cosignatory modification
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModificationDesc {
    /// 1 to add, 2 to delete
    pub modification_type: u32,
    /// Cosignatory public key (hex)
    pub cosignatory: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PropertyDesc {
    pub name: String,
    pub value: String,
}

/// Mosaic levy
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LevyDesc {
    /// 1 for absolute, 2 for percentile
    pub fee_type: u32,
    pub recipient: String,
    pub namespace: String,
    pub name: String,
    pub fee: u64,
}

impl TxDesc {
    /// Serialise the transaction to its wire encoding
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut w = Vec::new();

        w.write_u32::<LE>(self.body.tx_type())?;
        w.write_u8(self.version)?;
        w.write_u16::<LE>(0)?;
        w.write_u8(self.network)?;
        w.write_u32::<LE>(self.timestamp)?;
        write_prefixed(&mut w, &decode_fixed("signer", &self.signer, PUBLIC_KEY_LEN)?)?;
        w.write_u64::<LE>(self.fee)?;
        w.write_u32::<LE>(self.deadline)?;

        self.body.encode(self.version, &mut w)?;

        Ok(w)
    }
}

impl Body {
    /// Transaction type tag
    pub fn tx_type(&self) -> u32 {
        match self {
            Body::Transfer { .. } => 0x0101,
            Body::ImportanceTransfer { .. } => 0x0801,
            Body::AggregateModification { .. } => 0x1001,
            Body::MultisigSignature { .. } => 0x1002,
            Body::Multisig { .. } => 0x1004,
            Body::ProvisionNamespace { .. } => 0x2001,
            Body::MosaicDefinition { .. } => 0x4001,
            Body::MosaicSupplyChange { .. } => 0x4002,
        }
    }

    fn encode(&self, version: u8, w: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            Body::Transfer {
                recipient,
                amount,
                message,
                mosaics,
            } => {
                write_address(w, recipient)?;
                w.write_u64::<LE>(*amount)?;

                match message {
                    Some(m) => {
                        let payload = m.payload()?;
                        w.write_u32::<LE>(8 + payload.len() as u32)?;
                        w.write_u32::<LE>(m.payload_type)?;
                        write_prefixed(w, &payload)?;
                    }
                    None => w.write_u32::<LE>(0)?,
                }

                if version == 2 {
                    w.write_u32::<LE>(mosaics.len() as u32)?;
                    for m in mosaics {
                        let mut s = Vec::new();
                        write_prefixed(&mut s, &mosaic_id(&m.namespace, &m.name)?)?;
                        s.write_u64::<LE>(m.quantity)?;

                        write_prefixed(w, &s)?;
                    }
                }
            }
            Body::ImportanceTransfer { mode, remote } => {
                w.write_u32::<LE>(*mode)?;
                write_prefixed(w, &decode_fixed("remote", remote, PUBLIC_KEY_LEN)?)?;
            }
            Body::AggregateModification {
                modifications,
                min_cosignatories,
            } => {
                w.write_u32::<LE>(modifications.len() as u32)?;
                for m in modifications {
                    let mut s = Vec::new();
                    s.write_u32::<LE>(m.modification_type)?;
                    write_prefixed(
                        &mut s,
                        &decode_fixed("cosignatory", &m.cosignatory, PUBLIC_KEY_LEN)?,
                    )?;

                    write_prefixed(w, &s)?;
                }

                if version == 2 {
                    match min_cosignatories {
                        Some(c) => {
                            w.write_u32::<LE>(4)?;
                            w.write_i32::<LE>(*c)?;
                        }
                        None => w.write_u32::<LE>(0)?,
                    }
                }
            }
            Body::MultisigSignature {
                hash,
                multisig_address,
                cosigned,
            } => {
                let mut s = Vec::new();
                write_prefixed(&mut s, &decode_fixed("hash", hash, HASH_LEN)?)?;
                write_prefixed(w, &s)?;

                write_address(w, multisig_address)?;

                if let Some(tx) = cosigned {
                    write_prefixed(w, &tx.encode()?)?;
                }
            }
            Body::Multisig { inner } => {
                write_prefixed(w, &inner.encode()?)?;
            }
            Body::ProvisionNamespace {
                sink,
                rental_fee,
                namespace,
                parent,
            } => {
                write_address(w, sink)?;
                w.write_u64::<LE>(*rental_fee)?;
                write_prefixed(w, namespace.as_bytes())?;

                match parent {
                    Some(p) => write_prefixed(w, p.as_bytes())?,
                    None => w.write_u32::<LE>(ROOT_NAMESPACE)?,
                }
            }
            Body::MosaicDefinition {
                creator,
                namespace,
                name,
                description,
                properties,
                levy,
                sink,
                rental_fee,
            } => {
                let mut d = Vec::new();
                write_prefixed(&mut d, &decode_fixed("creator", creator, PUBLIC_KEY_LEN)?)?;
                write_prefixed(&mut d, &mosaic_id(namespace, name)?)?;
                write_prefixed(&mut d, description.as_bytes())?;

                d.write_u32::<LE>(properties.len() as u32)?;
                for p in properties {
                    let mut s = Vec::new();
                    write_prefixed(&mut s, p.name.as_bytes())?;
                    write_prefixed(&mut s, p.value.as_bytes())?;

                    write_prefixed(&mut d, &s)?;
                }

                match levy {
                    Some(l) => {
                        let mut s = Vec::new();
                        s.write_u32::<LE>(l.fee_type)?;
                        write_address(&mut s, &l.recipient)?;
                        write_prefixed(&mut s, &mosaic_id(&l.namespace, &l.name)?)?;
                        s.write_u64::<LE>(l.fee)?;

                        write_prefixed(&mut d, &s)?;
                    }
                    None => d.write_u32::<LE>(0)?,
                }

                write_prefixed(w, &d)?;
                write_address(w, sink)?;
                w.write_u64::<LE>(*rental_fee)?;
            }
            Body::MosaicSupplyChange {
                namespace,
                name,
                supply_type,
                delta,
            } => {
                write_prefixed(w, &mosaic_id(namespace, name)?)?;
                w.write_u32::<LE>(*supply_type)?;
                w.write_u64::<LE>(*delta)?;
            }
        }

        Ok(())
    }
}

impl MessageDesc {
    /// Resolve message payload bytes
    pub fn payload(&self) -> Result<Vec<u8>, Error> {
        match (&self.text, &self.hex) {
            (Some(t), _) => Ok(t.as_bytes().to_vec()),
            (None, Some(h)) => Ok(hex::decode(h)?),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Write a `u32` length-prefixed byte string
fn write_prefixed(w: &mut impl Write, data: &[u8]) -> Result<(), Error> {
    w.write_u32::<LE>(data.len() as u32)?;
    w.write_all(data)?;
    Ok(())
}

/// Write a length-prefixed address, checking the encoded length
fn write_address(w: &mut impl Write, address: &str) -> Result<(), Error> {
    if address.len() != ADDRESS_LEN {
        return Err(Error::InvalidLength("address", address.len()));
    }
    write_prefixed(w, address.as_bytes())
}

/// Encode a mosaic id structure, `namespace_len | namespace | name_len | name`
fn mosaic_id(namespace: &str, name: &str) -> Result<Vec<u8>, Error> {
    let mut id = Vec::new();
    write_prefixed(&mut id, namespace.as_bytes())?;
    write_prefixed(&mut id, name.as_bytes())?;
    Ok(id)
}

/// Decode a fixed length hex value
fn decode_fixed(kind: &'static str, s: &str, len: usize) -> Result<Vec<u8>, Error> {
    let b = hex::decode(s)?;
    if b.len() != len {
        return Err(Error::InvalidLength(kind, b.len()));
    }
    Ok(b)
}

#[cfg(test)]
mod test {
    use super::*;

    fn load(s: &str) -> TxDesc {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn header_layout() {
        let tx = load(
            r#"{
            "fee": 150000,
            "timestamp": 16,
            "deadline": 32,
            "body": { "type": "importance_transfer", "mode": 1, "remote": "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844" }
        }"#,
        );

        let b = tx.encode().unwrap();
        assert_eq!(b.len(), 60 + 4 + 4 + 32);

        assert_eq!(&b[..4], &[0x01, 0x08, 0x00, 0x00]);
        assert_eq!(&b[4..8], &[0x01, 0x00, 0x00, 0x98]);
        assert_eq!(&b[8..12], &16u32.to_le_bytes());
        assert_eq!(&b[12..16], &32u32.to_le_bytes());
        assert_eq!(&b[48..56], &150_000u64.to_le_bytes());
        assert_eq!(&b[56..60], &32u32.to_le_bytes());
    }

    #[test]
    fn root_namespace_sentinel() {
        let tx = load(
            r#"{
            "fee": 150000,
            "body": { "type": "provision_namespace", "sink": "TAMESPACEWH4MKFMBCVFERDPOOP4FK7MTDJEYP35", "rental_fee": 100000000, "namespace": "ns" }
        }"#,
        );

        let b = tx.encode().unwrap();
        assert_eq!(&b[b.len() - 4..], &[0xff; 4]);
    }

    #[test]
    fn invalid_lengths() {
        let tx = load(
            r#"{
            "fee": 0,
            "body": { "type": "transfer", "recipient": "TSHORT", "amount": 1 }
        }"#,
        );
        assert!(matches!(tx.encode(), Err(Error::InvalidLength("address", 6))));

        let tx = load(
            r#"{
            "fee": 0,
            "signer": "abcd",
            "body": { "type": "transfer", "recipient": "TBE56Z7MLQZ4S755JZL46VRYM7OD37SLPGFZPO5O", "amount": 1 }
        }"#,
        );
        assert!(matches!(tx.encode(), Err(Error::InvalidLength("signer", 2))));
    }
}
