// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Importance transfer transactions (`0x0801`), `mode:u32 | remote:public_key`

use super::{add_fee, read_public_key, Cursor, Error, Header};
use crate::fields::{DataType, FieldId, FieldTable};

pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let mode = c.read_bytes(4)?;
    let remote = read_public_key(c)?;

    t.add_field(FieldId::ItMode, DataType::Uint32, mode)?;
    t.add_field(FieldId::ItRemote, DataType::Hash256, remote)?;

    add_fee(h, t)
}
