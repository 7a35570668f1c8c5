// Copyright (c) 2022-2023 The MobileCoin Foundation

//! APDU response status words

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

/// Status words returned by the NEM application
///
/// Any `0x6xxx` status aborts the current signing session.
#[derive(
    Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter, TryFromPrimitive,
)]
#[repr(u16)]
pub enum StatusWord {
    Ok = 0x9000,
    WrongDataLength = 0x6700,
    SecurityStatusNotSatisfied = 0x6982,
    Deny = 0x6985,
    IncorrectData = 0x6a80,
    InvalidPath = 0x6a81,
    InvalidP1P2 = 0x6b00,
    InsNotSupported = 0x6d00,
    ClaNotSupported = 0x6e00,
    Unknown = 0x6f00,
}

impl StatusWord {
    /// Encode status word for transmission (big-endian, appended to response data)
    pub fn to_bytes(&self) -> [u8; 2] {
        (*self as u16).to_be_bytes()
    }

    /// Check whether a status word indicates that session state must be discarded
    pub fn is_error(&self) -> bool {
        (*self as u16) & 0xf000 == 0x6000
    }
}

impl From<StatusWord> for u16 {
    fn from(s: StatusWord) -> u16 {
        s as u16
    }
}
