// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Provision namespace transactions (`0x2001`)
//!
//! ```text
//! sink:address | rental_fee:u64 | namespace_len:u32 | namespace
//!   | parent_len:u32 | parent   (parent_len 0xffffffff for a new root)
//! ```

use super::{add_fee, read_address, readers, Cursor, Error, Header};
use crate::fields::{DataType, FieldId, FieldTable};

/// Parent length sentinel indicating a new root namespace
const ROOT_NAMESPACE: u32 = u32::MAX;

pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let sink = read_address(c)?;
    let rental_fee = c.read_bytes(8)?;
    let namespace = c.read_prefixed()?;

    t.add_field(FieldId::Namespace, DataType::Str, namespace)?;

    let parent_len = c.read_bytes(4)?;
    match readers::read_u32(parent_len, 0) {
        ROOT_NAMESPACE => t.add_field(FieldId::RootNamespace, DataType::Str, parent_len)?,
        n => {
            let parent = c.read_bytes(n as usize)?;
            t.add_field(FieldId::ParentNamespace, DataType::Str, parent)?;
        }
    }

    t.add_field(FieldId::SinkAddress, DataType::Address, sink)?;
    t.add_field(FieldId::RentalFee, DataType::Nem, rental_fee)?;

    add_fee(h, t)
}
