// Copyright (c) 2022-2023 The MobileCoin Foundation

use encdec::Encode;

use crate::apdu::prelude::{ApduError, AppConfigResp, AppFlags, SignResp, SIGNATURE_LEN};

/// [`Engine`][super::Engine] outputs (in response to events), typically encoded to response [APDUs][crate::apdu]
#[derive(Clone, PartialEq, Debug)]
pub enum Output {
    None,

    /// Chunk accepted, further chunks expected
    Ack,

    /// Transaction decoded, the response is deferred until user review completes
    Pending,

    /// Approved transaction signature
    Signature([u8; SIGNATURE_LEN]),

    /// Application configuration
    AppConfig {
        flags: AppFlags,
        major: u8,
        minor: u8,
        patch: u8,
    },
}

impl Output {
    /// Encode an [`Output`] object to a response [APDU]
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        match self {
            Output::None | Output::Ack | Output::Pending => Ok(0),
            Output::Signature(signature) => SignResp::new(*signature).encode(buff),
            Output::AppConfig {
                flags,
                major,
                minor,
                patch,
            } => AppConfigResp::new(*flags, *major, *minor, *patch).encode(buff),
        }
    }
}
