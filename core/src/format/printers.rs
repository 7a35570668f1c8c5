// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Low level display printers
//!
//! Each printer writes into the front of the provided buffer and returns
//! the number of bytes written. Printers fail with [`Error::NotEnoughData`]
//! rather than truncate, with the exception of [`write_ascii`] and
//! [`write_hex_truncated`] which are explicitly truncating.

use emstr::EncodeStr;

use crate::parse::Error;

/// Write a string
pub fn write_str(buff: &mut [u8], s: &str) -> Result<usize, Error> {
    let b = s.as_bytes();
    if buff.len() < b.len() {
        return Err(Error::NotEnoughData);
    }

    buff[..b.len()].copy_from_slice(b);
    Ok(b.len())
}

/// Write an unsigned decimal value
pub fn write_u64(buff: &mut [u8], value: u64) -> Result<usize, Error> {
    emstr::write!(&mut buff[..], value).map_err(|_| Error::NotEnoughData)
}

/// Write a signed decimal value
pub fn write_i64(buff: &mut [u8], value: i64) -> Result<usize, Error> {
    let mut n = 0;
    if value < 0 {
        n += write_str(buff, "-")?;
    }

    n += write_u64(&mut buff[n..], value.unsigned_abs())?;
    Ok(n)
}

/// Write a fixed-point token amount with `divisibility` implied decimal
/// digits, stripping trailing zeros (and a trailing decimal point),
/// followed by an optional unit
///
/// `5_000_000` with divisibility 6 renders as `5`, `100_000` as `0.1`.
pub fn write_token(
    buff: &mut [u8],
    amount: u64,
    divisibility: u8,
    unit: Option<&str>,
) -> Result<usize, Error> {
    let scalar = match 10u64.checked_pow(divisibility as u32) {
        Some(v) => v,
        None => return Err(Error::InvalidData),
    };

    let whole = amount / scalar;
    let mut frac = amount % scalar;

    let mut n = write_u64(buff, whole)?;

    if frac != 0 {
        // Drop trailing zeros
        let mut digits = divisibility as usize;
        while frac % 10 == 0 {
            frac /= 10;
            digits -= 1;
        }

        n += write_str(&mut buff[n..], ".")?;

        // Left-pad the fraction with zeros
        let mut d = [0u8; 20];
        let m = write_u64(&mut d, frac)?;
        for _ in m..digits {
            n += write_str(&mut buff[n..], "0")?;
        }
        if buff.len() < n + m {
            return Err(Error::NotEnoughData);
        }
        buff[n..][..m].copy_from_slice(&d[..m]);
        n += m;
    }

    if let Some(u) = unit {
        n += write_str(&mut buff[n..], " ")?;
        n += write_str(&mut buff[n..], u)?;
    }

    Ok(n)
}

/// Write hex encoded data, optionally uppercase and / or byte-reversed
pub fn write_hex(
    buff: &mut [u8],
    data: &[u8],
    upper: bool,
    reverse: bool,
) -> Result<usize, Error> {
    let n = data.len() * 2;
    if data.is_empty() || buff.len() < n {
        return Err(Error::NotEnoughData);
    }

    for (i, b) in data.iter().enumerate() {
        let j = match reverse {
            true => data.len() - 1 - i,
            false => i,
        };
        hex::encode_to_slice([*b], &mut buff[j * 2..][..2]).map_err(|_| Error::NotEnoughData)?;
    }

    if upper {
        buff[..n].make_ascii_uppercase();
    }

    Ok(n)
}

/// Write an integer as lowercase hex without leading zeros
pub fn write_hex_u64(buff: &mut [u8], value: u64) -> Result<usize, Error> {
    let b = value.to_be_bytes();
    let skip = (value.leading_zeros() as usize / 8).min(b.len() - 1);

    let mut n = write_hex(buff, &b[skip..], false, false)?;
    if n > 1 && buff[0] == b'0' {
        buff.copy_within(1..n, 0);
        n -= 1;
    }

    Ok(n)
}

/// Write lowercase hex encoded data, truncated to the bytes that fit
/// in the provided buffer
pub fn write_hex_truncated(buff: &mut [u8], data: &[u8]) -> usize {
    let n = data.len().min(buff.len() / 2);

    match hex::encode_to_slice(&data[..n], &mut buff[..n * 2]) {
        Ok(_) => n * 2,
        Err(_) => 0,
    }
}

/// Write sanitised ASCII, truncated to the provided buffer
///
/// Printable characters (`0x20..=0x7e`) are copied, each run of non-printable
/// bytes is replaced by one `?` per pair of bytes (so a two byte UTF-8
/// sequence renders as a single `?`).
pub fn write_ascii(buff: &mut [u8], data: &[u8]) -> usize {
    let mut n = 0;
    let mut skip = false;

    for b in data {
        if n >= buff.len() {
            break;
        }

        match *b {
            0x20..=0x7e => {
                buff[n] = *b;
                n += 1;
                skip = false;
            }
            _ if skip => skip = false,
            _ => {
                buff[n] = b'?';
                n += 1;
                skip = true;
            }
        }
    }

    n
}
