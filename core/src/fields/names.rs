// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::{DataType, Field, FieldId};
use crate::{format::printers::write_ascii, parse::Cursor};

/// Default label for unrecognised (id, type) combinations
const UNKNOWN_FIELD: &str = "Unknown Field";

/// Resolve the display label for a field
///
/// Labels are static with the exception of mosaic properties, where the
/// (sanitised) property name is rendered into `buff`.
pub fn resolve_field_name<'b>(field: &Field, buff: &'b mut [u8]) -> &'b str {
    use DataType as T;
    use FieldId as F;

    match (field.data_type, field.id) {
        (T::Uint32, F::TransactionType) => "Transaction Type",
        (T::Uint32, F::InnerTransactionType) => "Inner TX Type",
        (T::Uint32, F::DetailTransactionType) => "Detail TX Type",
        (T::Uint32, F::MosaicCount) => "Mosaics",
        (T::Uint32, F::ItMode) => "Importance Mode",
        (T::Uint32, F::AmCosignatoryNum) => "Cosignatory Num",
        (T::Uint32, F::AmModificationType) => "Mod. Type",
        (T::Uint32, F::AmRelativeChange) => "Relative Change",
        (T::Uint32, F::LevyFeeType) => "Levy Fee Type",

        (T::Uint64, F::Duration) => "Duration",

        (T::Hash256, F::Hash256) => "SHA3 Tx Hash",
        (T::Hash256, F::ItRemote) => "Rmt. Public Key",
        (T::Hash256, F::AmCosignatory) => "Cosignatory PbK",

        (T::Address, F::RecipientAddress) => "Recipient",
        (T::Address, F::MultisigAddress) => "Multisig Address",
        (T::Address, F::SinkAddress) => "Sink Address",
        (T::Address, F::LevyAddress) => "Levy Address",

        (T::Property, F::Property) => property_name(field.data, buff).unwrap_or(UNKNOWN_FIELD),

        (T::MosaicCurrency, F::MosaicAmount) => "Amount",
        (T::MosaicCurrency, F::MosaicUnits) => "Micro Units",
        (T::MosaicCurrency, F::CreateSupplyDelta) => "Create Supply",
        (T::MosaicCurrency, F::DeleteSupplyDelta) => "Delete Supply",

        (T::Nem, F::TxnFee) => "Fee",
        (T::Nem, F::RentalFee) => "Rental Fee",
        (T::Nem, F::MosaicAmount) => "Amount",
        (T::Nem, F::LevyFee) => "Levy Fee",
        (T::Nem, F::MultisigFee) => "Multisig Fee",

        (T::Message, F::TxnMessage | F::EncMessage) => "Message",

        (T::Str, F::MosaicUnknownType) => "Unknown Mosaic",
        (T::Str, F::TransferMosaic | F::Namespace) => "Namespace",
        (T::Str, F::ParentNamespace) => "Parent Name",
        (T::Str, F::RootNamespace) => "Create new root",
        (T::Str, F::Mosaic) => "Mosaic Name",
        (T::Str, F::Description) => "Description",
        (T::Str, F::LevyMosaic) => "Levy Mosaic",

        _ => UNKNOWN_FIELD,
    }
}

/// Render the name portion of a property (`nameLen, name, valueLen, value`)
fn property_name<'b>(data: &[u8], buff: &'b mut [u8]) -> Option<&'b str> {
    let mut c = Cursor::new(data);
    let name = c.read_prefixed().ok()?;

    let n = write_ascii(buff, name);
    match n {
        0 => None,
        _ => core::str::from_utf8(&buff[..n]).ok(),
    }
}
