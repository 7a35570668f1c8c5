// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Multisig signature (cosignature) transactions (`0x1002`)
//!
//! ```text
//! hash_obj_len:u32 | hash_len:u32 (32) | hash | multisig:address
//!   [inner_len:u32 | inner transactions]   (optional, top level only)
//! ```
//!
//! A top level cosignature may be followed by the transaction being
//! cosigned, decoded like a multisig wrapper body for review.

use super::{add_fee, multisig, read_address, Cursor, Error, Header, Level};
use crate::{
    consts::NEM_TRANSACTION_HASH_LENGTH,
    fields::{DataType, FieldId, FieldTable},
};

pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
    level: Level,
) -> Result<(), Error> {
    let n = c.read_len()?;
    let mut o = c.split(n)?;

    let hash = match o.read_len()? {
        NEM_TRANSACTION_HASH_LENGTH => o.read_bytes(NEM_TRANSACTION_HASH_LENGTH)?,
        _ => return Err(Error::InvalidData),
    };
    o.finish()?;

    let address = read_address(c)?;

    t.add_field(FieldId::Hash256, DataType::Hash256, hash)?;
    t.add_field(FieldId::MultisigAddress, DataType::Address, address)?;

    match (level, c.is_empty()) {
        (Level::Outer, false) => multisig::parse(c, h, t, FieldId::DetailTransactionType),
        _ => add_fee(h, t),
    }
}
