//! Error types for the payload encoder.

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, PixError>;

/// Errors that can occur while building a payment code.
#[derive(Error, Debug)]
pub enum PixError {
    /// Payment key is empty once whitespace is removed
    #[error("Invalid PIX key: key is empty after removing whitespace")]
    InvalidKey,

    /// A field value does not fit its length limit
    #[error("Field {id} is too long: {len} characters (maximum {max})")]
    FieldTooLong { id: String, len: usize, max: usize },

    /// Field tag is not exactly two ASCII digits
    #[error("Invalid field id {0:?}: expected two ASCII digits")]
    InvalidFieldId(String),

    /// Input text contains a character the payload cannot carry
    #[error("Unsupported character {character:?} in {field}")]
    UnsupportedCharacter { field: &'static str, character: char },

    /// Amount text could not be parsed as a decimal
    #[error("Invalid amount {0:?}")]
    InvalidAmount(String),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: pix-copy-paste [--always-dynamic] <requests.csv>")]
    MissingArgument,
}
