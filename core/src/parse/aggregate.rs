// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Multisig aggregate modification transactions (`0x1001`)
//!
//! ```text
//! count:u32 | (struct_len:u32 | mod_type:u32 | cosignatory:public_key) * count
//!   [min_cos_len:u32 | relative_change:i32]   (version 2, change present when min_cos_len > 0)
//! ```

use super::{add_fee, read_public_key, readers, Cursor, Error, Header};
use crate::fields::{DataType, FieldId, FieldTable};

pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let count_bytes = c.read_bytes(4)?;
    let count = readers::read_u32(count_bytes, 0);

    t.add_field(FieldId::AmCosignatoryNum, DataType::Uint32, count_bytes)?;

    for _ in 0..count {
        let n = c.read_len()?;
        let mut m = c.split(n)?;

        let mod_type = m.read_bytes(4)?;
        let cosignatory = read_public_key(&mut m)?;
        m.finish()?;

        t.add_field(FieldId::AmModificationType, DataType::Uint32, mod_type)?;
        t.add_field(FieldId::AmCosignatory, DataType::Hash256, cosignatory)?;
    }

    if h.version == 2 {
        let len_bytes = c.read_bytes(4)?;

        // A zero length renders as "no change"
        match readers::read_u32(len_bytes, 0) {
            0 => t.add_field(FieldId::AmRelativeChange, DataType::Uint32, len_bytes)?,
            n => {
                let mut m = c.split(n as usize)?;
                let change = m.read_bytes(4)?;
                m.finish()?;

                t.add_field(FieldId::AmRelativeChange, DataType::Uint32, change)?;
            }
        }
    }

    add_fee(h, t)
}
