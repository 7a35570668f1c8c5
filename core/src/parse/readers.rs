// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Primitive little-endian readers
//!
//! These perform no bounds checking of their own, callers must ensure
//! `offset + width <= buff.len()` (see [`Cursor`][super::Cursor], the only
//! bounds-enforcing layer).

use byteorder::{ByteOrder, LittleEndian};

#[inline]
pub fn read_u8(buff: &[u8], offset: usize) -> u8 {
    buff[offset]
}

#[inline]
pub fn read_u16(buff: &[u8], offset: usize) -> u16 {
    LittleEndian::read_u16(&buff[offset..])
}

#[inline]
pub fn read_u32(buff: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&buff[offset..])
}

#[inline]
pub fn read_u64(buff: &[u8], offset: usize) -> u64 {
    LittleEndian::read_u64(&buff[offset..])
}
