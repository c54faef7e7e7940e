//! Monetary amount with exactly 2 decimal places.
//!
//! Uses `rust_decimal` internally so amounts never pass through floating point
//! before being written into the payload.

use crate::error::PixError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A transaction amount rounded to cents.
///
/// Rounding is half-away-from-zero, so `0.005` becomes `0.01` and `2.345`
/// becomes `2.35`. The rendered form always carries two fractional digits and
/// uses `.` as separator regardless of locale.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use pix_copy_paste::Amount;
///
/// let amount = Amount::from_str("35.5").unwrap();
/// assert_eq!(amount.to_string(), "35.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places rendered into the payload.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, rounding to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Amount(rounded)
    }

    /// Returns `true` if the rounded amount is strictly greater than zero.
    ///
    /// Only positive amounts are written into a payload.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl FromStr for Amount {
    type Err = PixError;

    /// Parses `[-]digits[.digits]`, ignoring surrounding whitespace.
    ///
    /// Exponents, digit separators, and a leading `+` are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || PixError::InvalidAmount(trimmed.to_string());

        if !is_plain_decimal(trimmed) {
            return Err(invalid());
        }
        let decimal = Decimal::from_str(trimmed).map_err(|_| invalid())?;
        Ok(Amount::new(decimal))
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let a = Amount::from_str("1").unwrap();
        assert_eq!(a.to_string(), "1.00");

        let a = Amount::from_str("35.5").unwrap();
        assert_eq!(a.to_string(), "35.50");

        let a = Amount::from_str("  2.5  ").unwrap();
        assert_eq!(a.to_string(), "2.50");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(Amount::from_str("0.005").unwrap().to_string(), "0.01");
        assert_eq!(Amount::from_str("2.345").unwrap().to_string(), "2.35");
        assert_eq!(Amount::from_str("2.344").unwrap().to_string(), "2.34");
        assert_eq!(Amount::from_str("-2.345").unwrap().to_string(), "-2.35");
    }

    #[test]
    fn test_is_positive() {
        assert!(Amount::from_str("0.01").unwrap().is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::from_str("-1.00").unwrap().is_positive());
        // rounds to 0.00 before the check
        assert!(!Amount::from_str("0.004").unwrap().is_positive());
    }

    #[test]
    fn test_from_decimal() {
        let a = Amount::from(Decimal::new(3550, 2));
        assert_eq!(a.to_string(), "35.50");
        assert_eq!(a.value(), Decimal::new(3550, 2));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("").is_err());
    }

    #[test]
    fn test_rejects_non_plain_notation() {
        for input in ["1_000", "1_0.00", "1e3", "1E3", "+1.00", ".50", "5.", "1.2.3", "--1", "1 000"] {
            match Amount::from_str(input) {
                Err(PixError::InvalidAmount(text)) => assert_eq!(text, input),
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_accepts_plain_notation() {
        assert_eq!(Amount::from_str("1000").unwrap().to_string(), "1000.00");
        assert_eq!(Amount::from_str("-0.5").unwrap().to_string(), "-0.50");
        assert_eq!(Amount::from_str(" 007.10 ").unwrap().to_string(), "7.10");
    }
}
