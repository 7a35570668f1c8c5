// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NIS1 transaction decoder
//!
//! [`parse_transaction`] reads the common header, emits the transaction
//! type field and dispatches to the matching sub-grammar. Every field in the
//! resulting [`FieldTable`] borrows from the input buffer, no transaction
//! bytes are copied.
//!
//! Multisig wrappers may contain any other transaction type but not another
//! multisig wrapper, bounding nesting to a single level.

use crate::{
    consts::{NEM_ADDRESS_LENGTH, NEM_PUBLIC_KEY_LENGTH},
    fields::{DataType, FieldId, FieldTable},
};

mod error;
pub use error::Error;

mod cursor;
pub use cursor::Cursor;

pub mod readers;

mod header;
pub use header::{Header, TransactionType};

mod aggregate;
mod importance;
mod mosaic;
mod multisig;
mod namespace;
mod signature;
mod transfer;

/// Nesting level of the transaction being decoded
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) enum Level {
    /// Top level transaction
    Outer,
    /// Transaction contained in a multisig wrapper
    Inner,
}

/// Decode a complete NIS1 transaction into an ordered field table
///
/// Fails with [`Error::NotEnoughData`] for truncated input,
/// [`Error::InvalidData`] for inconsistent or trailing data and
/// [`Error::TooManyFields`] where the table capacity would be exceeded.
#[cfg_attr(feature = "noinline", inline(never))]
pub fn parse_transaction(data: &[u8]) -> Result<FieldTable, Error> {
    let mut t = FieldTable::new();
    let mut c = Cursor::new(data);

    let h = Header::parse(&mut c)?;
    t.add_field(FieldId::TransactionType, DataType::Uint32, h.tx_type)?;

    dispatch(&mut c, &h, &mut t, Level::Outer)?;

    // Every signed byte must have been decoded
    c.finish()?;

    #[cfg(feature = "log")]
    log::debug!("decoded {} fields from {} bytes", t.len(), data.len());

    Ok(t)
}

/// Decode the body of a transaction following its common header
pub(crate) fn dispatch<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
    level: Level,
) -> Result<(), Error> {
    let kind = h.kind()?;

    #[cfg(feature = "log")]
    log::debug!("decode {} (v{}, {:?})", kind, h.version, level);

    match (kind, level) {
        (TransactionType::Transfer, _) => transfer::parse(c, h, t),
        (TransactionType::ImportanceTransfer, _) => importance::parse(c, h, t),
        (TransactionType::AggregateModification, _) => aggregate::parse(c, h, t),
        (TransactionType::MultisigSignature, _) => signature::parse(c, h, t, level),
        (TransactionType::Multisig, Level::Outer) => {
            multisig::parse(c, h, t, FieldId::InnerTransactionType)
        }
        (TransactionType::Multisig, Level::Inner) => Err(Error::InvalidData),
        (TransactionType::ProvisionNamespace, _) => namespace::parse(c, h, t),
        (TransactionType::MosaicDefinition, _) => mosaic::parse_definition(c, h, t),
        (TransactionType::MosaicSupplyChange, _) => mosaic::parse_supply_change(c, h, t),
    }
}

/// Read a length-prefixed address, the prefix must match the address length
pub(crate) fn read_address<'a>(c: &mut Cursor<'a>) -> Result<&'a [u8], Error> {
    match c.read_len()? {
        NEM_ADDRESS_LENGTH => c.read_bytes(NEM_ADDRESS_LENGTH),
        _ => Err(Error::InvalidData),
    }
}

/// Read a length-prefixed public key, the prefix must match the key length
pub(crate) fn read_public_key<'a>(c: &mut Cursor<'a>) -> Result<&'a [u8], Error> {
    match c.read_len()? {
        NEM_PUBLIC_KEY_LENGTH => c.read_bytes(NEM_PUBLIC_KEY_LENGTH),
        _ => Err(Error::InvalidData),
    }
}

/// Append the header fee field
pub(crate) fn add_fee<'a>(h: &Header<'a>, t: &mut FieldTable<'a>) -> Result<(), Error> {
    t.add_field(FieldId::TxnFee, DataType::Nem, h.fee)
}
