// Copyright (c) 2022-2023 The MobileCoin Foundation

use ledger_nem_apdu::{status::StatusWord, ApduError};

use crate::parse;

/// [Engine][super::Engine] errors
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Transaction decode failed (detail is not exposed)
    #[cfg_attr(feature = "thiserror", error("incorrect data"))]
    IncorrectData = 0x00,

    /// Transaction exceeds the reassembly buffer
    #[cfg_attr(feature = "thiserror", error("Invalid argument length"))]
    InvalidLength = 0x01,

    /// Invalid derivation path
    #[cfg_attr(feature = "thiserror", error("invalid derivation path"))]
    InvalidPath = 0x02,

    /// Unexpected event
    #[cfg_attr(feature = "thiserror", error("Unexpected event"))]
    UnexpectedEvent = 0x03,

    /// Invalid engine state
    #[cfg_attr(feature = "thiserror", error("invalid engine state"))]
    InvalidState = 0x04,

    /// Transaction rejected by the user
    #[cfg_attr(feature = "thiserror", error("transaction rejected"))]
    Rejected = 0x05,

    /// Signing error
    #[cfg_attr(feature = "thiserror", error("Signing error"))]
    SignFailed = 0x06,

    /// Instruction not handled by the engine
    #[cfg_attr(feature = "thiserror", error("instruction not supported"))]
    InsNotSupported = 0x07,
}

impl Error {
    /// Status word reported to the host for this error
    pub const fn status(&self) -> StatusWord {
        match self {
            Error::IncorrectData | Error::UnexpectedEvent | Error::InvalidState => {
                StatusWord::IncorrectData
            }
            Error::InvalidLength => StatusWord::WrongDataLength,
            Error::InvalidPath => StatusWord::InvalidPath,
            Error::Rejected => StatusWord::Deny,
            Error::SignFailed => StatusWord::Unknown,
            Error::InsNotSupported => StatusWord::InsNotSupported,
        }
    }
}

/// APDU decode errors, length errors are reported as such
impl From<ApduError> for Error {
    fn from(e: ApduError) -> Self {
        match e {
            ApduError::InvalidLength => Error::InvalidLength,
            _ => Error::IncorrectData,
        }
    }
}

/// Decode errors are masked to [`Error::IncorrectData`]
impl From<parse::Error> for Error {
    fn from(_: parse::Error) -> Self {
        Error::IncorrectData
    }
}
