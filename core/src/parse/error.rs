// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Transaction decode / format errors
///
/// This is a closed set, callers crossing the host boundary must mask
/// these to a single "incorrect data" status.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// A read or nested length claim exceeds the available data
    #[cfg_attr(feature = "thiserror", error("not enough data"))]
    NotEnoughData = 0x01,

    /// Structurally present but inconsistent data
    #[cfg_attr(feature = "thiserror", error("invalid data"))]
    InvalidData = 0x02,

    /// Field table capacity exceeded
    #[cfg_attr(feature = "thiserror", error("too many fields"))]
    TooManyFields = 0x03,
}
