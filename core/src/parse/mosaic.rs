// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Mosaic definition (`0x4001`) and supply change (`0x4002`) transactions
//!
//! Definitions nest several length-prefixed structures, each nested length
//! must be strictly less than the length of its container and every
//! structure must be exactly filled.
//!
//! ```text
//! definition_len:u32 | definition | sink:address | fee:u64
//!
//! definition:
//!   creator:public_key | id_len:u32 | id | description_len:u32 | description
//!   | property_count:u32 | (property_len:u32 | name_len:u32 | name | value_len:u32 | value) * count
//!   | levy_len:u32 | [fee_type:u32 | recipient:address | id_len:u32 | id | fee:u64]
//!
//! id: namespace_len:u32 | namespace | name_len:u32 | name
//! ```

use super::{add_fee, read_address, read_public_key, Cursor, Error, Header};
use crate::fields::{DataType, FieldId, FieldTable};

const LEVY_ABSOLUTE: u32 = 1;
const LEVY_PERCENTILE: u32 = 2;

const SUPPLY_CREATE: u32 = 1;
const SUPPLY_DELETE: u32 = 2;

/// Read a length-prefixed value whose length must be less than `limit`
fn read_nested<'a>(c: &mut Cursor<'a>, limit: usize) -> Result<&'a [u8], Error> {
    let n = c.read_len()?;
    if n >= limit {
        return Err(Error::InvalidData);
    }
    c.read_bytes(n)
}

/// Split a mosaic id structure into namespace and name
fn parse_mosaic_id(id: &[u8]) -> Result<(&[u8], &[u8]), Error> {
    let mut c = Cursor::new(id);

    let namespace = read_nested(&mut c, id.len())?;
    let name = read_nested(&mut c, id.len())?;
    c.finish()?;

    Ok((namespace, name))
}

pub(super) fn parse_definition<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let def_len = c.read_len()?;
    if !c.has_data(def_len) {
        return Err(Error::InvalidData);
    }
    let mut d = c.split(def_len)?;

    let _creator = read_public_key(&mut d)?;

    // Mosaic identifier
    let id = read_nested(&mut d, def_len)?;
    let (namespace, name) = parse_mosaic_id(id)?;
    t.add_field(FieldId::ParentNamespace, DataType::Str, namespace)?;
    t.add_field(FieldId::Mosaic, DataType::Str, name)?;

    let description = read_nested(&mut d, def_len)?;
    t.add_field(FieldId::Description, DataType::Str, description)?;

    // Properties, name / value pairs rendered as a single field each
    let count = d.read_u32()?;
    for _ in 0..count {
        let p = read_nested(&mut d, def_len)?;

        let mut pc = Cursor::new(p);
        read_nested(&mut pc, p.len())?;
        read_nested(&mut pc, p.len())?;
        pc.finish()?;

        t.add_field(FieldId::Property, DataType::Property, p)?;
    }

    // Optional levy
    let levy = read_nested(&mut d, def_len)?;
    if !levy.is_empty() {
        parse_levy(levy, t)?;
    }

    d.finish()?;

    let sink = read_address(c)?;
    let fee = c.read_bytes(8)?;

    t.add_field(FieldId::SinkAddress, DataType::Address, sink)?;
    t.add_field(FieldId::RentalFee, DataType::Nem, fee)?;

    add_fee(h, t)
}

fn parse_levy<'a>(levy: &'a [u8], t: &mut FieldTable<'a>) -> Result<(), Error> {
    let mut l = Cursor::new(levy);

    let fee_type = l.read_bytes(4)?;
    let recipient = read_address(&mut l)?;
    let id = read_nested(&mut l, levy.len())?;
    let fee = l.read_bytes(8)?;
    l.finish()?;

    match super::readers::read_u32(fee_type, 0) {
        LEVY_ABSOLUTE | LEVY_PERCENTILE => (),
        _ => return Err(Error::InvalidData),
    }

    parse_mosaic_id(id)?;

    t.add_field(FieldId::LevyMosaic, DataType::Str, id)?;
    t.add_field(FieldId::LevyAddress, DataType::Address, recipient)?;
    t.add_field(FieldId::LevyFeeType, DataType::Uint32, fee_type)?;
    t.add_field(FieldId::LevyFee, DataType::Nem, fee)?;

    Ok(())
}

pub(super) fn parse_supply_change<'a>(
    c: &mut Cursor<'a>,
    h: &Header<'a>,
    t: &mut FieldTable<'a>,
) -> Result<(), Error> {
    let id = c.read_prefixed()?;
    let (namespace, name) = parse_mosaic_id(id)?;

    let supply_type = c.read_u32()?;
    let delta = c.read_bytes(8)?;

    t.add_field(FieldId::Namespace, DataType::Str, namespace)?;
    t.add_field(FieldId::Mosaic, DataType::Str, name)?;

    match supply_type {
        SUPPLY_CREATE => t.add_field(FieldId::CreateSupplyDelta, DataType::MosaicCurrency, delta)?,
        SUPPLY_DELETE => t.add_field(FieldId::DeleteSupplyDelta, DataType::MosaicCurrency, delta)?,
        _ => return Err(Error::InvalidData),
    }

    add_fee(h, t)
}
