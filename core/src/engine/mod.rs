// Copyright (c) 2022-2023 The MobileCoin Foundation

//! The [Engine] provides the transaction signing flow required by hardware wallets.
//!
//! This handles [Event] inputs and returns [Output] responses to the caller,
//! see [apdu][crate::apdu] for APDU protocol / encoding specifications.
//!
//! Transactions are reassembled from [`SignInit`][Event::SignInit] and
//! [`SignContinue`][Event::SignContinue] chunks, decoded once the final
//! chunk arrives, then held pending user review. The platform renders the
//! decoded fields via [`Engine::render_field`] and completes the request
//! with [`Engine::approve`] or [`Engine::reject`].

use heapless::Vec;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};
use zeroize::Zeroize;

use crate::{
    apdu::prelude::{Algorithm, AppFlags, Bip32Path, NetworkType, SIGNATURE_LEN},
    consts::{APP_VERSION_MAJOR, APP_VERSION_MINOR, APP_VERSION_PATCH, MAX_RAW_TX},
    fields::{resolve_field_name, FieldTable},
    format::format_field,
    parse::parse_transaction,
};

mod event;
pub use event::Event;

mod output;
pub use output::Output;

mod error;
pub use error::Error;

/// Engine internal state enumeration
#[derive(Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum State {
    /// Idle state, no transaction running
    Idle,
    /// Reassembling a chunked transaction
    WaitingForMore,
    /// Transaction decoded, pending user approval
    PendingReview,
}

/// [`Driver`] trait provides platform support for [`Engine`] instances
pub trait Driver {
    /// Sign a raw transaction with the key at the provided derivation path,
    /// returning `None` on failure
    fn sign(&self, path: &[u32], algorithm: Algorithm, tx: &[u8]) -> Option<[u8; SIGNATURE_LEN]>;
}

impl<T: Driver> Driver for &mut T {
    fn sign(&self, path: &[u32], algorithm: Algorithm, tx: &[u8]) -> Option<[u8; SIGNATURE_LEN]> {
        T::sign(self, path, algorithm, tx)
    }
}

/// [Engine] provides hardware-independent support for NEM transaction signing
pub struct Engine<DRV: Driver> {
    state: State,

    path: Option<Bip32Path>,
    network: Option<NetworkType>,

    tx: Vec<u8, MAX_RAW_TX>,

    drv: DRV,
}

impl<DRV: Driver> Engine<DRV> {
    /// Create a new engine instance with the provided driver
    pub const fn new(drv: DRV) -> Self {
        Self {
            state: State::Idle,
            path: None,
            network: None,
            tx: Vec::new(),
            drv,
        }
    }

    /// Fetch the current engine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Network selected by the active signing path
    pub fn network(&self) -> Option<NetworkType> {
        self.network
    }

    /// Reassembled transaction bytes
    pub fn tx(&self) -> &[u8] {
        &self.tx
    }

    /// Update the engine with an incoming event
    ///
    /// Any error aborts the active session, returning the engine to
    /// [`State::Idle`].
    pub fn update(&mut self, evt: &Event) -> Result<Output, Error> {
        #[cfg(feature = "log")]
        log::debug!("event: {:?} (state: {})", evt, self.state);

        let r = self.handle(evt);

        if let Err(_e) = &r {
            #[cfg(feature = "log")]
            log::warn!("aborting session: {:?}", _e);

            self.reset();
        }

        r
    }

    #[cfg_attr(feature = "noinline", inline(never))]
    fn handle(&mut self, evt: &Event) -> Result<Output, Error> {
        match (self.state, evt) {
            (_, Event::GetAppConfiguration) => {
                if self.state != State::Idle {
                    #[cfg(feature = "log")]
                    log::info!("configuration request aborts {} session", self.state);

                    self.reset();
                }

                Ok(Output::AppConfig {
                    flags: AppFlags::empty(),
                    major: APP_VERSION_MAJOR,
                    minor: APP_VERSION_MINOR,
                    patch: APP_VERSION_PATCH,
                })
            }
            (State::Idle, Event::SignInit { path, more, data }) => {
                self.reset();

                let network = NetworkType::from_path(path).ok_or(Error::IncorrectData)?;

                #[cfg(feature = "log")]
                log::debug!("sign init, network: {}", network);

                self.path = Some(path.clone());
                self.network = Some(network);

                self.append(data, *more)
            }
            (State::WaitingForMore, Event::SignContinue { more, data }) => {
                self.append(data, *more)
            }
            _ => Err(Error::UnexpectedEvent),
        }
    }

    /// Append a transaction chunk, decoding the transaction once complete
    fn append(&mut self, data: &[u8], more: bool) -> Result<Output, Error> {
        self.tx
            .extend_from_slice(data)
            .map_err(|_| Error::InvalidLength)?;

        if more {
            self.state = State::WaitingForMore;
            return Ok(Output::Ack);
        }

        match parse_transaction(&self.tx) {
            Ok(_t) => {
                #[cfg(feature = "log")]
                log::debug!("transaction decoded ({} fields)", _t.len());

                self.state = State::PendingReview;

                Ok(Output::Pending)
            }
            Err(_e) => {
                #[cfg(feature = "log")]
                log::warn!("transaction decode failed: {:?}", _e);

                Err(Error::IncorrectData)
            }
        }
    }

    /// Fetch the decoded field table for the pending transaction
    pub fn fields(&self) -> Result<FieldTable<'_>, Error> {
        if self.state != State::PendingReview {
            return Err(Error::InvalidState);
        }

        parse_transaction(&self.tx).map_err(Error::from)
    }

    /// Render the label and value of the field at `index` for display
    pub fn render_field<'n, 'v>(
        &self,
        index: usize,
        name_buff: &'n mut [u8],
        value_buff: &'v mut [u8],
    ) -> Result<(&'n str, &'v str), Error> {
        let network = self.network.ok_or(Error::InvalidState)?;
        let t = self.fields()?;
        let f = t.get(index)?;

        let name = resolve_field_name(f, name_buff);
        let value = format_field(f, network, value_buff)?;

        Ok((name, value))
    }

    /// Approve the pending transaction, returning the signature
    pub fn approve(&mut self) -> Result<Output, Error> {
        let r = self.sign_pending();
        self.reset();
        r
    }

    fn sign_pending(&self) -> Result<Output, Error> {
        let (path, network) = match (self.state, &self.path, self.network) {
            (State::PendingReview, Some(p), Some(n)) => (p, n),
            _ => return Err(Error::InvalidState),
        };

        #[cfg(feature = "log")]
        log::info!("transaction approved, signing {} bytes", self.tx.len());

        self.drv
            .sign(path.as_ref(), network.algorithm(), &self.tx)
            .map(Output::Signature)
            .ok_or(Error::SignFailed)
    }

    /// Reject the pending transaction
    pub fn reject(&mut self) -> Result<Output, Error> {
        let r = match self.state {
            State::PendingReview => {
                #[cfg(feature = "log")]
                log::info!("transaction rejected");

                Err(Error::Rejected)
            }
            _ => Err(Error::InvalidState),
        };

        self.reset();
        r
    }

    /// Reset engine state, zeroizing any buffered transaction data
    pub fn reset(&mut self) {
        self.tx.as_mut_slice().zeroize();
        self.tx.clear();

        if let Some(p) = &mut self.path {
            p.clear();
        }
        self.path = None;
        self.network = None;

        self.state = State::Idle;
    }
}
