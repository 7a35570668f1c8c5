// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Extracted transaction fields
//!
//! The decoder produces a [`FieldTable`] of [`Field`]s, each borrowing a slice of
//! the original transaction buffer. Fields are displayed in insertion order,
//! with labels from [`resolve_field_name`] and values from
//! [`format_field`][crate::format::format_field].

use heapless::Vec;
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter};

use crate::{consts::MAX_FIELD_COUNT, parse::Error};

mod names;
pub use names::resolve_field_name;

/// Field wire representation
#[derive(Copy, Clone, PartialEq, Debug, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum DataType {
    Int8 = 0x01,
    Uint8 = 0x02,
    Uint16 = 0x03,
    Uint32 = 0x04,
    Uint64 = 0x05,
    Hash256 = 0x06,
    PublicKey = 0x07,
    Str = 0x17,
    /// XEM amount (u64, 6 decimals)
    Nem = 0xa0,
    MosaicCount = 0xa1,
    /// Raw mosaic quantity (u64)
    MosaicCurrency = 0xa2,
    Message = 0xa3,
    Address = 0xa4,
    /// Length-prefixed name / value pair
    Property = 0xa5,
}

impl DataType {
    /// Fixed data length for this type, `None` for variable length types
    pub const fn fixed_len(&self) -> Option<usize> {
        match self {
            DataType::Int8 | DataType::Uint8 => Some(1),
            DataType::Uint16 => Some(2),
            DataType::Uint32 | DataType::MosaicCount => Some(4),
            DataType::Uint64 | DataType::Nem | DataType::MosaicCurrency => Some(8),
            DataType::Hash256 | DataType::PublicKey => Some(32),
            DataType::Str | DataType::Message | DataType::Address | DataType::Property => None,
        }
    }
}

/// Semantic field identifiers
#[derive(Copy, Clone, PartialEq, Debug, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum FieldId {
    // u32 fields
    TransactionType = 0x30,
    InnerTransactionType = 0x31,
    AmModificationType = 0x32,
    AmRelativeChange = 0x33,
    AmCosignatoryNum = 0x34,
    ItMode = 0x35,
    MosaicCount = 0x36,
    LevyFeeType = 0x37,
    DetailTransactionType = 0x39,

    // u64 fields
    TxnFee = 0x70,
    MultisigFee = 0x71,
    Duration = 0x72,
    RentalFee = 0x73,
    LevyFee = 0x74,

    // Public keys
    ItRemote = 0x80,
    AmCosignatory = 0x81,

    // Strings
    RecipientAddress = 0x90,
    TxnMessage = 0x91,
    EncMessage = 0x92,
    MultisigAddress = 0x93,
    Namespace = 0x94,
    ParentNamespace = 0x95,
    RootNamespace = 0x96,
    SinkAddress = 0x97,
    Mosaic = 0x98,
    Description = 0x99,
    Property = 0x9a,
    LevyMosaic = 0x9b,
    LevyAddress = 0x9c,
    TransferMosaic = 0x9d,

    // Hashes
    Hash256 = 0xb0,

    // Mosaics
    MosaicAmount = 0xd0,
    MosaicUnits = 0xd1,
    CreateSupplyDelta = 0xd2,
    DeleteSupplyDelta = 0xd3,
    MosaicUnknownType = 0xd4,
}

/// A single extracted field, borrowing from the transaction buffer
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Field<'a> {
    pub id: FieldId,
    pub data_type: DataType,
    pub data: &'a [u8],
}

impl<'a> Field<'a> {
    /// Create a new field, checking data length is consistent with the data type
    pub fn new(id: FieldId, data_type: DataType, data: &'a [u8]) -> Result<Self, Error> {
        match data_type.fixed_len() {
            Some(n) if n != data.len() => Err(Error::InvalidData),
            _ => Ok(Self {
                id,
                data_type,
                data,
            }),
        }
    }

    /// Length of the referenced data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Ordered, fixed capacity collection of extracted fields
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldTable<'a> {
    fields: Vec<Field<'a>, MAX_FIELD_COUNT>,
}

impl<'a> FieldTable<'a> {
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, failing with [`Error::TooManyFields`] once
    /// [`MAX_FIELD_COUNT`] is reached
    pub fn add_field(
        &mut self,
        id: FieldId,
        data_type: DataType,
        data: &'a [u8],
    ) -> Result<(), Error> {
        let f = Field::new(id, data_type, data)?;

        self.fields.push(f).map_err(|_| Error::TooManyFields)
    }

    /// Fetch the field at the provided index
    pub fn get(&self, index: usize) -> Result<&Field<'a>, Error> {
        self.fields.get(index).ok_or(Error::InvalidData)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field<'a>> {
        self.fields.iter()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
