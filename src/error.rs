use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure to decode a percent-encoded or hex-encoded input.
///
/// Offsets are byte positions into the input that was being decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("escape sequence at byte {offset} is truncated")]
    Truncated { offset: usize },

    #[error("invalid hex digit pair at byte {offset}")]
    InvalidHex { offset: usize },

    #[error("hex input has odd length {len}")]
    OddLength { len: usize },

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid date format string: {0:?}")]
    DateFormat(String),

    #[error("timestamp out of range: {0}")]
    DateRange(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
