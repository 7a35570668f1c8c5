// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM hardware wallet core
//!
//! This provides a common [Engine][engine] supporting NIS1 transaction
//! review and signing for execution on hardware wallets, along with the
//! [parser][parse] and [formatter][format] used to present transactions for
//! user approval.
//!
//! Interactions with the [Engine][engine] are performed via [Event][engine::Event]s and [Output][engine::Output]s,
//! see [ledger_nem_apdu] for APDU objects and wire encodings.
//!
//! ## Operations
//!
//! Prior to signing the client may issue an
//! [`AppConfigReq`][ledger_nem_apdu::app_config::AppConfigReq] to fetch an
//! [`AppConfigResp`][ledger_nem_apdu::app_config::AppConfigResp] containing
//! the application version and flags.
//!
//! ### Signing a transaction
//!
//! 1. Split the raw transaction into chunks with [`SignChunks`][ledger_nem_apdu::sign::SignChunks],
//!    the first chunk carries the BIP32 derivation path selecting the key and network
//! 2. Issue each [`SignTxReq`][ledger_nem_apdu::sign::SignTxReq] in order, the engine
//!    acknowledges each chunk while [`SignFlags::MORE`][ledger_nem_apdu::sign::SignFlags::MORE] is set
//! 3. Following the final chunk the transaction is decoded into a
//!    [`FieldTable`][fields::FieldTable] and held pending review
//! 4. The platform renders each field with [`Engine::render_field`][engine::Engine::render_field]
//!    then calls [`approve`][engine::Engine::approve] to return a
//!    [`SignResp`][ledger_nem_apdu::sign::SignResp] or [`reject`][engine::Engine::reject]
//!    to return a denial status
//!
//! Any failure aborts the session, discarding buffered transaction data.
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub use ledger_nem_apdu::{self as apdu};

pub mod address;

pub mod consts;

pub mod engine;

pub mod fields;

pub mod format;

pub mod parse;
