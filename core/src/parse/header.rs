// Copyright (c) 2022-2023 The MobileCoin Foundation

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use super::{Cursor, Error};
use crate::consts::NEM_PUBLIC_KEY_LENGTH;

/// NIS1 transaction type tags
#[derive(
    Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter, TryFromPrimitive,
)]
#[repr(u32)]
pub enum TransactionType {
    Transfer = 0x0101,
    ImportanceTransfer = 0x0801,
    AggregateModification = 0x1001,
    MultisigSignature = 0x1002,
    Multisig = 0x1004,
    ProvisionNamespace = 0x2001,
    MosaicDefinition = 0x4001,
    MosaicSupplyChange = 0x4002,
}

impl TransactionType {
    /// Display label for this transaction type
    pub const fn label(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "Transfer TX",
            TransactionType::ImportanceTransfer => "Importance Transfer TX",
            TransactionType::AggregateModification => "Modify Multisig Aggregate TX",
            TransactionType::MultisigSignature => "Multi Sig. TX",
            TransactionType::Multisig => "Multisig TX",
            TransactionType::ProvisionNamespace => "Provision Namespace TX",
            TransactionType::MosaicDefinition => "Mosaic Definition TX",
            TransactionType::MosaicSupplyChange => "Mosaic Supply Change",
        }
    }
}

/// Common transaction header, shared by every NIS1 transaction
///
/// ```text
/// type:u32 | version:u8 | reserved:u16 | network:u8 | timestamp:u32
/// | pubkey_len:u32 (32) | signer:[u8; 32] | fee:u64 | deadline:u32
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Header<'a> {
    /// Raw type tag (kept as bytes for the type field)
    pub tx_type: &'a [u8],
    pub version: u8,
    pub network: u8,
    pub timestamp: u32,
    pub signer: &'a [u8; NEM_PUBLIC_KEY_LENGTH],
    /// Raw fee (kept as bytes for the fee field)
    pub fee: &'a [u8],
    pub deadline: u32,
}

impl<'a> Header<'a> {
    /// Read a common header from the cursor
    pub fn parse(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let tx_type = c.read_bytes(4)?;
        let version = c.read_u8()?;
        let _reserved = c.read_u16()?;
        let network = c.read_u8()?;
        let timestamp = c.read_u32()?;

        let pk_len = c.read_len()?;
        let signer = c.read_array::<NEM_PUBLIC_KEY_LENGTH>()?;

        let fee = c.read_bytes(8)?;
        let deadline = c.read_u32()?;

        if pk_len != NEM_PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidData);
        }

        if version != 1 && version != 2 {
            return Err(Error::InvalidData);
        }

        Ok(Self {
            tx_type,
            version,
            network,
            timestamp,
            signer,
            fee,
            deadline,
        })
    }

    /// Resolve the transaction type tag
    pub fn kind(&self) -> Result<TransactionType, Error> {
        let mut c = Cursor::new(self.tx_type);
        let v = c.read_u32()?;

        TransactionType::try_from(v).map_err(|_| Error::InvalidData)
    }
}
