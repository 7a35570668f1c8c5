// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Application configuration APDUs

use encdec::{DecodeOwned, Encode};

use super::{encdec_bitflags, ApduError, ApduStatic, Instruction, NEM_APDU_CLA};

/// Fetch application configuration APDU
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct AppConfigReq {}

impl ApduStatic for AppConfigReq {
    const CLA: u8 = NEM_APDU_CLA;

    /// Application configuration GET APDU is instruction `0x06`
    const INS: u8 = Instruction::GetAppConfiguration as u8;
}

impl Encode for AppConfigReq {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn encode(&self, _buff: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }
}

impl DecodeOwned for AppConfigReq {
    type Output = Self;

    type Error = ApduError;

    fn decode_owned(_buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        Ok((Self {}, 0))
    }
}

/// Application configuration response APDU
///
/// ## Encoding
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     FLAGS     |     MAJOR     |     MINOR     |     PATCH     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AppConfigResp {
    /// Application flags
    pub flags: AppFlags,

    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

bitflags::bitflags! {
    /// Application configuration flags
    pub struct AppFlags: u8 {
        /// Indicates blind signing of unparsed payloads is enabled (never set)
        const BLIND_SIGNING = 1 << 0;
    }
}

encdec_bitflags!(AppFlags);

impl AppConfigResp {
    /// Create a new application configuration APDU
    pub fn new(flags: AppFlags, major: u8, minor: u8, patch: u8) -> Self {
        Self {
            flags,
            major,
            minor,
            patch,
        }
    }
}

impl Encode for AppConfigResp {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(4)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        if buff.len() < 4 {
            return Err(ApduError::InvalidLength);
        }

        let n = self.flags.encode(buff)?;
        buff[n] = self.major;
        buff[n + 1] = self.minor;
        buff[n + 2] = self.patch;

        Ok(n + 3)
    }
}

impl DecodeOwned for AppConfigResp {
    type Output = Self;

    type Error = ApduError;

    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), ApduError> {
        if buff.len() < 4 {
            return Err(ApduError::InvalidLength);
        }

        let (flags, n) = AppFlags::decode_owned(buff)?;

        Ok((
            Self {
                flags,
                major: buff[n],
                minor: buff[n + 1],
                patch: buff[n + 2],
            },
            n + 3,
        ))
    }
}
