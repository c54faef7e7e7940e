//! Assembly of the full "Copia e Cola" payload.
//!
//! Fields are written in the fixed EMV QRCPS-MPM order, and the CRC field is
//! appended last over everything that precedes its value.

use crate::config::MerchantConfig;
use crate::crc::checksum_hex;
use crate::error::Result;
use crate::field::{compose_group, encode_bounded_field, encode_field};
use crate::request::{PaymentRequest, SanitizedRequest};
use log::debug;

/// Globally unique identifier of the PIX arrangement (field `26`/`00`).
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code (field `58`).
pub const COUNTRY_CODE: &str = "BR";

/// Merchant category code meaning "not informed".
pub const MERCHANT_CATEGORY_CODE: &str = "0000";

/// Payload format indicator value (field `00`).
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Tag and length of the CRC field; its value is the last four characters.
pub const CRC_PREFIX: &str = "6304";

/// Longest key that still fits the merchant account group.
pub const MAX_KEY_LEN: usize = 77;
/// Longest rendered amount (field `54`).
pub const MAX_AMOUNT_LEN: usize = 13;
/// Longest merchant name (field `59`).
pub const MAX_MERCHANT_NAME_LEN: usize = 25;
/// Longest merchant city (field `60`).
pub const MAX_MERCHANT_CITY_LEN: usize = 15;
/// Longest reference label (field `62`/`05`).
pub const MAX_REFERENCE_LABEL_LEN: usize = 25;

/// Top-level field ids.
mod id {
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    pub const POINT_OF_INITIATION: &str = "01";
    pub const MERCHANT_ACCOUNT: &str = "26";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const TRANSACTION_CURRENCY: &str = "53";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";

    // children of MERCHANT_ACCOUNT
    pub const GUI: &str = "00";
    pub const KEY: &str = "01";

    // child of ADDITIONAL_DATA
    pub const REFERENCE_LABEL: &str = "05";
}

/// Sanitizes `request` and assembles its payload.
pub fn assemble(request: &PaymentRequest, config: &MerchantConfig) -> Result<String> {
    let sanitized = request.sanitize(config)?;
    assemble_sanitized(&sanitized, config)
}

/// Assembles the payload for an already sanitized request.
///
/// No output is produced unless every field encodes.
pub fn assemble_sanitized(request: &SanitizedRequest, config: &MerchantConfig) -> Result<String> {
    let has_amount = request.amount.is_some();
    let initiation = config.initiation.method(has_amount);
    debug!(
        "Point of initiation {} ({:?}, amount present: {})",
        initiation, config.initiation, has_amount
    );

    let merchant_account = compose_group(
        id::MERCHANT_ACCOUNT,
        &[
            encode_field(id::GUI, PIX_GUI)?,
            encode_bounded_field(id::KEY, &request.key, MAX_KEY_LEN)?,
        ],
    )?;

    let additional_data = compose_group(
        id::ADDITIONAL_DATA,
        &[encode_bounded_field(
            id::REFERENCE_LABEL,
            &request.reference_label,
            MAX_REFERENCE_LABEL_LEN,
        )?],
    )?;

    let mut payload = String::with_capacity(256);
    payload.push_str(&encode_field(
        id::PAYLOAD_FORMAT_INDICATOR,
        PAYLOAD_FORMAT_INDICATOR,
    )?);
    payload.push_str(&encode_field(id::POINT_OF_INITIATION, initiation)?);
    payload.push_str(&merchant_account);
    payload.push_str(&encode_field(
        id::MERCHANT_CATEGORY_CODE,
        MERCHANT_CATEGORY_CODE,
    )?);
    payload.push_str(&encode_field(id::TRANSACTION_CURRENCY, CURRENCY_BRL)?);
    if let Some(amount) = request.amount {
        payload.push_str(&encode_bounded_field(
            id::TRANSACTION_AMOUNT,
            &amount.to_string(),
            MAX_AMOUNT_LEN,
        )?);
    }
    payload.push_str(&encode_field(id::COUNTRY_CODE, COUNTRY_CODE)?);
    payload.push_str(&encode_bounded_field(
        id::MERCHANT_NAME,
        &request.merchant_name,
        MAX_MERCHANT_NAME_LEN,
    )?);
    payload.push_str(&encode_bounded_field(
        id::MERCHANT_CITY,
        &request.merchant_city,
        MAX_MERCHANT_CITY_LEN,
    )?);
    payload.push_str(&additional_data);
    payload.push_str(CRC_PREFIX);

    let crc = checksum_hex(&payload);
    payload.push_str(&crc);

    Ok(payload)
}
