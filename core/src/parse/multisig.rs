// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Multisig wrapper transactions (`0x1004`), `inner_len:u32 | inner transactions`

use super::{dispatch, Cursor, Error, Header, Level};
use crate::fields::{DataType, FieldId, FieldTable};

/// Parse a multisig body, tagging each inner transaction with `type_id`
pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
    type_id: FieldId,
) -> Result<(), Error> {
    let n = c.read_len()?;
    let mut inner = c.split(n)?;

    t.add_field(FieldId::MultisigFee, DataType::Nem, h.fee)?;

    if inner.is_empty() {
        return Err(Error::InvalidData);
    }

    while !inner.is_empty() {
        let start = inner.offset();

        let ih = Header::parse(&mut inner)?;
        t.add_field(type_id, DataType::Uint32, ih.tx_type)?;

        dispatch(&mut inner, &ih, t, Level::Inner)?;

        // Each inner transaction must make progress
        if inner.offset() == start {
            return Err(Error::InvalidData);
        }
    }

    Ok(())
}
