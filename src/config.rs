//! Caller-supplied merchant defaults and encoding policy.

/// Selects the point-of-initiation method (field `01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitiationPolicy {
    /// `11` (static, reusable) without an amount, `12` (dynamic) with one.
    #[default]
    ByAmount,

    /// Always `12`, matching codes produced by earlier versions of the bot.
    AlwaysDynamic,
}

impl InitiationPolicy {
    /// Returns the field `01` value for a payload with or without an amount.
    pub fn method(&self, has_amount: bool) -> &'static str {
        match self {
            InitiationPolicy::ByAmount if !has_amount => "11",
            _ => "12",
        }
    }
}

/// Defaults applied when the caller leaves merchant fields blank.
///
/// Passed explicitly to every encode call; nothing is read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfig {
    /// Merchant name (field `59`) used when none is supplied.
    pub merchant_name: String,

    /// Merchant city (field `60`) used when none is supplied.
    pub merchant_city: String,

    /// Reference label (field `62`/`05`) used when the description is blank.
    pub reference_label: String,

    /// How field `01` is chosen.
    pub initiation: InitiationPolicy,
}

impl MerchantConfig {
    /// Merchant name used by `MerchantConfig::default()`.
    pub const DEFAULT_MERCHANT_NAME: &'static str = "Brasa Bot";
    /// Merchant city used by `MerchantConfig::default()`.
    pub const DEFAULT_MERCHANT_CITY: &'static str = "BRASIL";
    /// Reference label used by `MerchantConfig::default()`.
    pub const DEFAULT_REFERENCE_LABEL: &'static str = "CHURRAS";

    /// Replaces the default merchant name.
    pub fn with_merchant_name(mut self, name: impl Into<String>) -> Self {
        self.merchant_name = name.into();
        self
    }

    /// Replaces the default merchant city.
    pub fn with_merchant_city(mut self, city: impl Into<String>) -> Self {
        self.merchant_city = city.into();
        self
    }

    /// Replaces the default reference label.
    pub fn with_reference_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = label.into();
        self
    }

    /// Sets how field `01` is chosen.
    pub fn with_initiation(mut self, initiation: InitiationPolicy) -> Self {
        self.initiation = initiation;
        self
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        MerchantConfig {
            merchant_name: Self::DEFAULT_MERCHANT_NAME.to_string(),
            merchant_city: Self::DEFAULT_MERCHANT_CITY.to_string(),
            reference_label: Self::DEFAULT_REFERENCE_LABEL.to_string(),
            initiation: InitiationPolicy::default(),
        }
    }
}
