// Copyright (c) 2022-2023 The MobileCoin Foundation

use encdec::Decode;

use crate::apdu::prelude::*;

use super::Error;

/// [`Engine`][super::Engine] input events, typically decoded from request [APDUs][crate::apdu]
#[derive(Clone, PartialEq, Debug)]
pub enum Event<'a> {
    None,

    /// First transaction chunk, carrying the signing key derivation path
    SignInit {
        path: Bip32Path,
        more: bool,
        data: &'a [u8],
    },

    /// Subsequent transaction chunk
    SignContinue { more: bool, data: &'a [u8] },

    /// Fetch application configuration
    GetAppConfiguration,
}

/// Helper for decoding APDUs to events
fn decode_event<'a, T>(buff: &'a [u8]) -> Result<Event, Error>
where
    T: Decode<'a, Error = ApduError>,
    Event<'a>: From<T::Output>,
{
    T::decode(buff)
        .map(|(v, _n)| Event::from(v))
        .map_err(Error::from)
}

impl<'a> Event<'a> {
    /// Parse an incoming APDU to engine event
    ///
    /// A first signing chunk with a derivation path depth outside
    /// `1..=MAX_BIP32_PATH` fails with [`Error::InvalidPath`], instructions
    /// not handled by the engine fail with [`Error::InsNotSupported`].
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn parse(ins: u8, p1: u8, buff: &'a [u8]) -> Result<Self, Error> {
        match ins {
            SignTxReq::INS => match SignTxReq::decode(p1, buff) {
                Ok((apdu, _n)) => Ok(Event::from(apdu)),
                Err(ApduError::InvalidEncoding) if SignFlags::from_bits_truncate(p1).is_first() => {
                    Err(Error::InvalidPath)
                }
                Err(e) => Err(Error::from(e)),
            },
            AppConfigReq::INS => decode_event::<AppConfigReq>(buff),
            _ => Err(Error::InsNotSupported),
        }
    }
}

impl<'a> From<SignTxReq<'a>> for Event<'a> {
    fn from(a: SignTxReq<'a>) -> Self {
        let more = a.flags.has_more();

        match a.path {
            Some(path) => Event::SignInit {
                path,
                more,
                data: a.data,
            },
            None => Event::SignContinue { more, data: a.data },
        }
    }
}

impl<'a> From<AppConfigReq> for Event<'a> {
    fn from(_: AppConfigReq) -> Self {
        Event::GetAppConfiguration
    }
}
