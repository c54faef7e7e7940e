//! Payment request models: raw caller input, CSV rows, and sanitized fields.

use crate::amount::Amount;
use crate::config::MerchantConfig;
use crate::error::{PixError, Result};
use log::debug;
use serde::Deserialize;
use std::str::FromStr;

/// Raw caller input for a single payment code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequest {
    /// PIX key (email, phone, tax id, or random key). Whitespace is stripped.
    pub key: String,

    /// Amount to pre-fill. `None`, zero, or negative means the payer chooses.
    pub amount: Option<Amount>,

    /// Free-text description, written as the reference label.
    pub description: String,

    /// Overrides the configured merchant name when non-blank.
    pub merchant_name: Option<String>,

    /// Overrides the configured merchant city when non-blank.
    pub merchant_city: Option<String>,
}

impl PaymentRequest {
    /// Creates a request for `key` with no amount and no description.
    pub fn new(key: impl Into<String>) -> Self {
        PaymentRequest {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets the amount to pre-fill.
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the description used as reference label.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Overrides the configured merchant name.
    pub fn with_merchant_name(mut self, name: impl Into<String>) -> Self {
        self.merchant_name = Some(name.into());
        self
    }

    /// Overrides the configured merchant city.
    pub fn with_merchant_city(mut self, city: impl Into<String>) -> Self {
        self.merchant_city = Some(city.into());
        self
    }

    /// Normalizes the request against `config`.
    ///
    /// - strips all whitespace from the key, rejecting an empty result
    /// - drops amounts that are not positive after rounding
    /// - trims name, city and description, substituting configured defaults
    ///   for blank values
    /// - rejects any character outside printable ASCII
    ///
    /// Length limits are enforced later, when the fields are encoded.
    pub fn sanitize(&self, config: &MerchantConfig) -> Result<SanitizedRequest> {
        let key: String = self.key.chars().filter(|c| !c.is_whitespace()).collect();
        if key.is_empty() {
            return Err(PixError::InvalidKey);
        }
        ensure_printable_ascii("key", &key)?;

        let amount = match self.amount {
            Some(amount) if amount.is_positive() => Some(amount),
            Some(amount) => {
                debug!("Amount {} is not positive, omitting amount field", amount);
                None
            }
            None => None,
        };

        let merchant_name = or_default(self.merchant_name.as_deref(), &config.merchant_name);
        ensure_printable_ascii("merchant name", &merchant_name)?;

        let merchant_city = or_default(self.merchant_city.as_deref(), &config.merchant_city);
        ensure_printable_ascii("merchant city", &merchant_city)?;

        let reference_label = or_default(Some(self.description.as_str()), &config.reference_label);
        ensure_printable_ascii("description", &reference_label)?;

        Ok(SanitizedRequest {
            key,
            amount,
            merchant_name,
            merchant_city,
            reference_label,
        })
    }
}

/// A request whose fields are ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedRequest {
    /// Key with all whitespace removed. Never empty.
    pub key: String,

    /// Present only when strictly positive.
    pub amount: Option<Amount>,

    /// Override or configured default, trimmed.
    pub merchant_name: String,

    /// Override or configured default, trimmed.
    pub merchant_city: String,

    /// Description or configured default, trimmed.
    pub reference_label: String,
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            debug!("Using default value {:?}", default);
            default.trim().to_string()
        }
    }
}

/// The checksum runs over single bytes, so only printable ASCII is accepted.
fn ensure_printable_ascii(field: &'static str, value: &str) -> Result<()> {
    match value
        .chars()
        .find(|c| !c.is_ascii() || c.is_ascii_control())
    {
        Some(character) => Err(PixError::UnsupportedCharacter { field, character }),
        None => Ok(()),
    }
}

/// Raw request record as read from CSV.
///
/// Every column but `key` may be missing or empty.
#[derive(Debug, Deserialize)]
pub struct RequestRecord {
    /// PIX key
    pub key: String,

    /// Amount text, e.g. `35.50`
    pub amount: Option<String>,

    /// Description used as reference label
    pub description: Option<String>,

    /// Merchant name override
    pub merchant_name: Option<String>,

    /// Merchant city override
    pub merchant_city: Option<String>,
}

impl RequestRecord {
    /// Converts the raw CSV record into a [`PaymentRequest`].
    ///
    /// Fails with [`PixError::InvalidAmount`] if the amount column is present
    /// but not a plain decimal number.
    pub fn parse(&self) -> Result<PaymentRequest> {
        Ok(PaymentRequest {
            key: self.key.clone(),
            amount: self.parse_amount()?,
            description: self.description.clone().unwrap_or_default(),
            merchant_name: self.merchant_name.clone(),
            merchant_city: self.merchant_city.clone(),
        })
    }

    fn parse_amount(&self) -> Result<Option<Amount>> {
        let amount_str = match self.amount.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(None),
        };
        Amount::from_str(amount_str).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_sanitize_strips_key_whitespace() {
        let request = PaymentRequest::new(" user @ pix . com\t\n");
        let sanitized = request.sanitize(&MerchantConfig::default()).unwrap();
        assert_eq!(sanitized.key, "user@pix.com");
    }

    #[test]
    fn test_sanitize_rejects_blank_key() {
        for key in ["", "   ", "\t\n"] {
            let result = PaymentRequest::new(key).sanitize(&MerchantConfig::default());
            assert!(matches!(result, Err(PixError::InvalidKey)));
        }
    }

    #[test]
    fn test_sanitize_applies_defaults() {
        let request = PaymentRequest::new("11999999999")
            .with_description("   ")
            .with_merchant_name("")
            .with_merchant_city("  ");
        let sanitized = request.sanitize(&MerchantConfig::default()).unwrap();

        assert_eq!(sanitized.merchant_name, "Brasa Bot");
        assert_eq!(sanitized.merchant_city, "BRASIL");
        assert_eq!(sanitized.reference_label, "CHURRAS");
    }

    #[test]
    fn test_sanitize_trims_overrides() {
        let request = PaymentRequest::new("k")
            .with_description("  Pizza night ")
            .with_merchant_name(" Ana ")
            .with_merchant_city(" RECIFE ");
        let sanitized = request.sanitize(&MerchantConfig::default()).unwrap();

        assert_eq!(sanitized.merchant_name, "Ana");
        assert_eq!(sanitized.merchant_city, "RECIFE");
        assert_eq!(sanitized.reference_label, "Pizza night");
    }

    #[test]
    fn test_sanitize_drops_non_positive_amounts() {
        let config = MerchantConfig::default();
        for value in ["0", "0.00", "-5", "0.004"] {
            let request = PaymentRequest::new("k").with_amount(amount(value));
            assert_eq!(request.sanitize(&config).unwrap().amount, None, "{}", value);
        }

        let request = PaymentRequest::new("k").with_amount(amount("0.005"));
        assert_eq!(
            request.sanitize(&config).unwrap().amount,
            Some(amount("0.01"))
        );
    }

    #[test]
    fn test_sanitize_rejects_non_ascii() {
        let request = PaymentRequest::new("k").with_merchant_city("SÃO PAULO");
        match request.sanitize(&MerchantConfig::default()) {
            Err(PixError::UnsupportedCharacter { field, character }) => {
                assert_eq!(field, "merchant city");
                assert_eq!(character, 'Ã');
            }
            other => panic!("Expected UnsupportedCharacter, got {:?}", other),
        }

        let request = PaymentRequest::new("k").with_description("Churrasco 🔥");
        assert!(matches!(
            request.sanitize(&MerchantConfig::default()),
            Err(PixError::UnsupportedCharacter {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn test_sanitize_rejects_control_characters() {
        let request = PaymentRequest::new("k").with_merchant_name("Ana\u{7}Maria");
        assert!(matches!(
            request.sanitize(&MerchantConfig::default()),
            Err(PixError::UnsupportedCharacter {
                character: '\u{7}',
                ..
            })
        ));
    }

    #[test]
    fn test_parse_record() {
        let record = RequestRecord {
            key: "maria@example.com".to_string(),
            amount: Some(" 35.5 ".to_string()),
            description: Some("Churras".to_string()),
            merchant_name: None,
            merchant_city: None,
        };

        let request = record.parse().unwrap();
        assert_eq!(request.key, "maria@example.com");
        assert_eq!(request.amount, Some(amount("35.50")));
        assert_eq!(request.description, "Churras");
    }

    #[test]
    fn test_parse_record_blank_amount() {
        let record = RequestRecord {
            key: "k".to_string(),
            amount: Some("  ".to_string()),
            description: None,
            merchant_name: None,
            merchant_city: None,
        };

        let request = record.parse().unwrap();
        assert_eq!(request.amount, None);
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_parse_record_rejects_bad_amount() {
        let record = RequestRecord {
            key: "k".to_string(),
            amount: Some("ten".to_string()),
            description: None,
            merchant_name: None,
            merchant_city: None,
        };

        assert!(matches!(record.parse(), Err(PixError::InvalidAmount(a)) if a == "ten"));
    }

    #[test]
    fn test_parse_record_rejects_exponent_and_separators() {
        for text in ["1_0.00", "1e3"] {
            let record = RequestRecord {
                key: "k".to_string(),
                amount: Some(text.to_string()),
                description: None,
                merchant_name: None,
                merchant_city: None,
            };

            assert!(matches!(record.parse(), Err(PixError::InvalidAmount(a)) if a == text));
        }
    }
}
