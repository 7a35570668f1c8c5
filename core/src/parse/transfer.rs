// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transfer transactions (`0x0101`)
//!
//! ```text
//! recipient:address | amount:u64 | msg_len:u32
//!   [payload_type:u32 | payload_len:u32 | payload]   (msg_len > 0)
//!   [mosaic_count:u32 | mosaic...]                   (version 2)
//! ```

use super::{add_fee, read_address, readers, Cursor, Error, Header};
use crate::fields::{DataType, FieldId, FieldTable};

/// Plaintext message payload type, anything else is treated as encrypted
const PAYLOAD_PLAIN: u32 = 1;

/// Native currency mosaic identifier
const NEM_NAMESPACE: &[u8] = b"nem";
const XEM_MOSAIC: &[u8] = b"xem";

pub(super) fn parse<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let recipient = read_address(c)?;
    let amount = c.read_bytes(8)?;
    let msg_len = c.read_len()?;

    t.add_field(FieldId::RecipientAddress, DataType::Address, recipient)?;

    // Version 1 transfers carry only XEM
    if h.version == 1 {
        t.add_field(FieldId::MosaicAmount, DataType::Nem, amount)?;
    }

    if msg_len == 0 {
        t.add_field(FieldId::TxnMessage, DataType::Message, &[])?;
    } else {
        let mut m = c.split(msg_len)?;
        let payload_type = m.read_u32()?;
        let payload = m.read_prefixed()?;
        m.finish()?;

        match payload_type {
            PAYLOAD_PLAIN => t.add_field(FieldId::TxnMessage, DataType::Message, payload)?,
            _ => t.add_field(FieldId::EncMessage, DataType::Message, &[])?,
        }
    }

    add_fee(h, t)?;

    if h.version == 2 {
        let count_bytes = c.read_bytes(4)?;
        let count = readers::read_u32(count_bytes, 0);

        if count == 0 {
            t.add_field(FieldId::MosaicAmount, DataType::Nem, amount)?;
        } else {
            t.add_field(FieldId::MosaicCount, DataType::Uint32, count_bytes)?;
            for _ in 0..count {
                parse_mosaic(c, t)?;
            }
        }
    }

    Ok(())
}

/// Parse a single `mosaic_len:u32 | id_len:u32 | ns | name | quantity:u64` entry
fn parse_mosaic<'a>(c: &mut Cursor<'a>, t: &mut FieldTable<'a>) -> Result<(), Error> {
    let mosaic_len = c.read_len()?;
    let mut m = c.split(mosaic_len)?;

    let id_len = m.read_len()?;
    let id = m.read_bytes(id_len)?;
    let quantity = m.read_bytes(8)?;
    m.finish()?;

    let mut i = Cursor::new(id);
    let namespace = i.read_prefixed()?;
    let name = i.read_prefixed()?;
    i.finish()?;

    if namespace == NEM_NAMESPACE && name == XEM_MOSAIC {
        t.add_field(FieldId::MosaicAmount, DataType::Nem, quantity)?;
    } else {
        t.add_field(FieldId::MosaicUnknownType, DataType::Str, &[])?;
        t.add_field(FieldId::TransferMosaic, DataType::Str, id)?;
        t.add_field(FieldId::MosaicUnits, DataType::MosaicCurrency, quantity)?;
    }

    Ok(())
}
