// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Field value formatting
//!
//! [`format_field`] renders a [`Field`] value for display, dispatching on the
//! field data type then on the field id. Fixed width values fail with
//! [`Error::NotEnoughData`] where the output buffer is too small, free text
//! (messages, strings, properties) is truncated to fit.

use crate::{
    address::public_key_to_address,
    apdu::network::NetworkType,
    consts::{NEM_PUBLIC_KEY_LENGTH, XEM_DIVISIBILITY},
    fields::{DataType, Field, FieldId},
    parse::{Cursor, Error, TransactionType},
};

pub mod printers;
use printers::*;

/// Rendered for types without a formatter
const NOT_IMPLEMENTED: &str = "[Not implemented]";

/// Rendered for unrecognised enumerated values
const UNKNOWN: &str = "Unknown";

/// Blocks per day / hour / minute (one block per 15s)
const BLOCKS_PER_DAY: u64 = 5760;
const BLOCKS_PER_HOUR: u64 = 240;
const BLOCKS_PER_MINUTE: u64 = 4;

/// Format a field value into the provided buffer
///
/// `network` selects the address encoding for fields rendered as derived
/// addresses. Empty results are rendered as a single space.
#[cfg_attr(feature = "noinline", inline(never))]
pub fn format_field<'b>(
    field: &Field,
    network: NetworkType,
    buff: &'b mut [u8],
) -> Result<&'b str, Error> {
    let mut c = Cursor::new(field.data);

    let n = match field.data_type {
        DataType::Uint8 => write_u64(buff, c.read_u8()? as u64)?,
        DataType::Uint16 => write_hex_u64(buff, c.read_u16()? as u64)?,
        DataType::Uint32 => format_u32(buff, field.id, c.read_u32()?)?,
        DataType::Uint64 => match field.id {
            FieldId::Duration => format_duration(buff, c.read_u64()?)?,
            _ => write_hex(buff, field.data, true, true)?,
        },
        DataType::Hash256 => write_hex(buff, field.data, true, false)?,
        DataType::Address => format_address(buff, field, network)?,
        DataType::MosaicCurrency => write_u64(buff, c.read_u64()?)?,
        DataType::Nem => {
            let unit = match field.id {
                FieldId::LevyFee => "micro",
                _ => "XEM",
            };
            write_token(buff, c.read_u64()?, XEM_DIVISIBILITY, Some(unit))?
        }
        DataType::Message => format_message(buff, field)?,
        DataType::Str => format_str(buff, field)?,
        DataType::Property => format_property(buff, field.data)?,
        DataType::Int8 | DataType::PublicKey | DataType::MosaicCount => {
            write_str(buff, NOT_IMPLEMENTED)?
        }
    };

    if n == 0 {
        return Ok(" ");
    }

    let buff: &'b [u8] = buff;
    core::str::from_utf8(&buff[..n]).map_err(|_| Error::InvalidData)
}

fn format_u32(buff: &mut [u8], id: FieldId, v: u32) -> Result<usize, Error> {
    let s = match id {
        FieldId::MosaicCount => {
            let n = write_str(buff, "Found ")?;
            return Ok(n + write_u64(&mut buff[n..], v as u64)?);
        }
        FieldId::TransactionType
        | FieldId::InnerTransactionType
        | FieldId::DetailTransactionType => match TransactionType::try_from(v) {
            Ok(t) => t.label(),
            Err(_) => UNKNOWN,
        },
        FieldId::ItMode => match v {
            1 => "Activate",
            2 => "Deactivate",
            _ => UNKNOWN,
        },
        FieldId::AmModificationType => match v {
            1 => "Add cosignatory",
            2 => "Delete cosign.",
            _ => UNKNOWN,
        },
        FieldId::AmRelativeChange => match v {
            0 => "Not change",
            _ => return write_i64(buff, v as i32 as i64),
        },
        FieldId::LevyFeeType => match v {
            1 => "Absolute",
            2 => "Percentile",
            _ => UNKNOWN,
        },
        _ => return write_u64(buff, v as u64),
    };

    write_str(buff, s)
}

/// Render a block count as `{d}d {h}h {m}m`
fn format_duration(buff: &mut [u8], blocks: u64) -> Result<usize, Error> {
    if blocks == 0 {
        return write_str(buff, "Unlimited");
    }

    let days = blocks / BLOCKS_PER_DAY;
    let hours = (blocks % BLOCKS_PER_DAY) / BLOCKS_PER_HOUR;
    let mins = (blocks % BLOCKS_PER_HOUR) / BLOCKS_PER_MINUTE;

    let mut n = 0;
    for (v, u) in [(days, "d "), (hours, "h "), (mins, "m")] {
        n += write_u64(&mut buff[n..], v)?;
        n += write_str(&mut buff[n..], u)?;
    }

    Ok(n)
}

fn format_address(buff: &mut [u8], field: &Field, network: NetworkType) -> Result<usize, Error> {
    match (field.id, field.data.len()) {
        (FieldId::ItRemote | FieldId::AmCosignatory, NEM_PUBLIC_KEY_LENGTH) => {
            let mut pk = [0u8; NEM_PUBLIC_KEY_LENGTH];
            pk.copy_from_slice(field.data);

            let addr = public_key_to_address(&pk, network);
            if buff.len() < addr.len() {
                return Err(Error::NotEnoughData);
            }

            buff[..addr.len()].copy_from_slice(&addr);
            Ok(addr.len())
        }
        _ => {
            if buff.len() < field.data.len() {
                return Err(Error::NotEnoughData);
            }
            Ok(write_ascii(buff, field.data))
        }
    }
}

fn format_message(buff: &mut [u8], field: &Field) -> Result<usize, Error> {
    match (field.id, field.data) {
        (FieldId::EncMessage, []) => write_str(buff, "<encrypted msg>"),
        (_, []) => write_str(buff, "<empty msg>"),
        // Hex payloads are prefixed with 0xfe
        (_, [0xfe, hex @ ..]) => Ok(write_hex_truncated(buff, hex)),
        (_, d) => Ok(write_ascii(buff, d)),
    }
}

fn format_str(buff: &mut [u8], field: &Field) -> Result<usize, Error> {
    match field.id {
        FieldId::MosaicUnknownType => write_str(buff, "Divisibility and levy cannot be shown"),
        FieldId::RootNamespace => write_str(buff, "namespace"),
        FieldId::LevyMosaic | FieldId::TransferMosaic => {
            // Mosaic id structure, rendered as `namespace: name`
            let mut c = Cursor::new(field.data);
            let namespace = c.read_prefixed()?;
            let name = c.read_prefixed()?;

            let mut n = write_ascii(buff, namespace);
            n += write_ascii(&mut buff[n..], b": ");
            n += write_ascii(&mut buff[n..], name);

            Ok(n)
        }
        _ => Ok(write_ascii(buff, field.data)),
    }
}

/// Render the value portion of a `name_len | name | value_len | value` property
fn format_property(buff: &mut [u8], data: &[u8]) -> Result<usize, Error> {
    let mut c = Cursor::new(data);
    let _name = c.read_prefixed()?;
    let value = c.read_prefixed()?;

    Ok(write_ascii(buff, value))
}
