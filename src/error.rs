//! Error types for Reed-Solomon encoding and decoding

use thiserror::Error;

/// Errors raised by codec construction and encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Code parameters outside the field bounds
    #[error(
        "invalid code parameters: {data_len} data + {parity_len} parity symbols \
         (parity must be non-zero and the codeword at most 255 symbols)"
    )]
    InvalidParameters { data_len: usize, parity_len: usize },

    /// Message length does not match the codec's data length
    #[error("message length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised by the decode pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Codeword length does not match the codec's codeword length
    #[error("codeword length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The locator root search found more positions than the code can correct
    #[error("found more than {capacity} errors, codeword unrecoverable")]
    TooManyErrors { capacity: usize },

    /// The located positions are inconsistent with the error locator
    /// polynomial, or a Forney denominator vanished
    #[error("error locators are inconsistent, codeword unrecoverable")]
    SingularCorrection,
}

/// Type alias for Result with DecodeError
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
