//! # PIX Copy-and-Paste
//!
//! Encodes PIX "Copia e Cola" payment codes: an EMV QRCPS-MPM payload made of
//! nested tag-length-value fields and closed by a CRC-16/CCITT-FALSE checksum.
//!
//! ## Design Principles
//!
//! - **Pure encoding**: no I/O, no shared state; identical input gives identical output
//! - **Fixed-point amounts**: rounded to cents via `rust_decimal`
//! - **Fail loudly**: oversized or non-ASCII fields are errors, never truncated
//! - **Explicit defaults**: merchant defaults travel in a [`MerchantConfig`]
//!
//! ## Example
//!
//! ```
//! use pix_copy_paste::{generate_copy_paste, Amount, MerchantConfig};
//! use std::str::FromStr;
//!
//! let amount = Amount::from_str("35.50").unwrap();
//! let code = generate_copy_paste(
//!     "maria@example.com",
//!     Some(amount),
//!     "Churras",
//!     &MerchantConfig::default(),
//! )
//! .unwrap();
//! assert!(code.ends_with("6304DD02"));
//! ```

pub mod amount;
pub mod batch;
pub mod config;
pub mod crc;
pub mod error;
pub mod field;
pub mod payload;
pub mod request;

pub use amount::Amount;
pub use batch::{BatchGenerator, GeneratedCode};
pub use config::{InitiationPolicy, MerchantConfig};
pub use crc::{checksum_hex, crc16, verify_checksum};
pub use error::{PixError, Result};
pub use field::{compose_group, encode_field};
pub use payload::assemble;
pub use request::{PaymentRequest, RequestRecord, SanitizedRequest};

/// Builds a payment code for `key`, using `config` for merchant name and city.
pub fn generate_copy_paste(
    key: &str,
    amount: Option<Amount>,
    description: &str,
    config: &MerchantConfig,
) -> Result<String> {
    let request = PaymentRequest {
        key: key.to_string(),
        amount,
        description: description.to_string(),
        merchant_name: None,
        merchant_city: None,
    };
    assemble(&request, config)
}
