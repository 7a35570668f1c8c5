// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Prelude to simplify downstream use of APDU objects

pub use crate::{
    app_config::{AppConfigReq, AppConfigResp, AppFlags},
    network::{Algorithm, NetworkType},
    path::{Bip32Path, HARDENED, MAX_BIP32_PATH},
    sign::{SignChunks, SignFlags, SignResp, SignTxReq, SIGNATURE_LEN},
    status::StatusWord,
    ApduError, ApduStatic, Instruction, NEM_APDU_CLA,
};
