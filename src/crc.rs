//! CRC-16/CCITT-FALSE checksum used by the payload's trailing `63` field.

/// Generator polynomial (x^16 + x^12 + x^5 + 1).
const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
const INITIAL: u16 = 0xFFFF;

/// Computes CRC-16/CCITT-FALSE over `bytes`.
///
/// # Examples
///
/// ```
/// use pix_copy_paste::crc::crc16;
///
/// assert_eq!(crc16(b"123456789"), 0x29B1);
/// ```
pub fn crc16(bytes: &[u8]) -> u16 {
    bytes.iter().fold(INITIAL, |mut crc, &byte| {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// Renders the checksum of `payload` as four uppercase hex digits.
pub fn checksum_hex(payload: &str) -> String {
    format!("{:04X}", crc16(payload.as_bytes()))
}

/// Returns `true` if the last four characters of `payload` are the checksum of
/// everything before them.
///
/// Hex digits are compared case-insensitively. Payloads shorter than four
/// characters, or whose tail is not on a character boundary, never verify.
pub fn verify_checksum(payload: &str) -> bool {
    let Some(split) = payload.len().checked_sub(4) else {
        return false;
    };
    if !payload.is_char_boundary(split) {
        return false;
    }
    let (body, tail) = payload.split_at(split);
    tail.eq_ignore_ascii_case(&checksum_hex(body))
}
