//! Tag-length-value field encoding.
//!
//! Every payload element is `ID` (two digits) + `LL` (two-digit length) +
//! value. Group fields carry already-encoded child fields as their value.

use crate::error::{PixError, Result};

/// Largest length expressible in the two-digit length slot.
pub const MAX_FIELD_LEN: usize = 99;

/// Encodes a single TLV field.
///
/// Fails with [`PixError::InvalidFieldId`] if `id` is not two ASCII digits and
/// with [`PixError::FieldTooLong`] if `value` exceeds 99 characters. Values are
/// never truncated.
///
/// # Examples
///
/// ```
/// use pix_copy_paste::field::encode_field;
///
/// assert_eq!(encode_field("58", "BR").unwrap(), "5802BR");
/// ```
pub fn encode_field(id: &str, value: &str) -> Result<String> {
    encode_bounded_field(id, value, MAX_FIELD_LEN)
}

/// Encodes a TLV field whose value is limited to `max` characters.
///
/// `max` is clamped to [`MAX_FIELD_LEN`].
pub fn encode_bounded_field(id: &str, value: &str, max: usize) -> Result<String> {
    validate_id(id)?;

    let max = max.min(MAX_FIELD_LEN);
    let len = value.chars().count();
    if len > max {
        return Err(PixError::FieldTooLong {
            id: id.to_string(),
            len,
            max,
        });
    }

    Ok(format!("{}{:02}{}", id, len, value))
}

/// Encodes a group field from already-encoded children, kept in the order given.
pub fn compose_group<S: AsRef<str>>(id: &str, children: &[S]) -> Result<String> {
    let value: String = children.iter().map(AsRef::as_ref).collect();
    encode_field(id, &value)
}

fn validate_id(id: &str) -> Result<()> {
    if id.len() == 2 && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PixError::InvalidFieldId(id.to_string()))
    }
}
