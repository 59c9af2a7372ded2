//! Public error type for the Solid API.
//!
//! Flattens the errors of the stream and collection layers into one enum so
//! callers can use a single `?` across a whole pipeline. Every failure has its
//! own stable diagnostic code.

use miette::Diagnostic;
use solid_collections::DecodeError;
use solid_stream::StreamError;
use thiserror::Error;

/// Result type for Solid operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    // =========================================================================
    // Traversal
    // =========================================================================
    #[diagnostic(code(solid::stream::exhausted))]
    #[error("next() called on an exhausted iterator after {position} element(s)")]
    Exhausted { position: usize },

    #[diagnostic(code(solid::stream::unsupported_mutation))]
    #[error("{operation}() is not supported by a read-only iterator")]
    UnsupportedMutation { operation: &'static str },

    #[diagnostic(code(solid::stream::index_out_of_bounds))]
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    // =========================================================================
    // Decoding
    // =========================================================================
    #[diagnostic(
        code(solid::decode::unexpected_eof),
        help("the input was cut short; pass the complete output of `SolidList::marshal`")
    )]
    #[error(
        "unexpected end of input reading {what}: needed {needed} byte(s), {remaining} remaining"
    )]
    UnexpectedEof {
        what: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[diagnostic(code(solid::decode::length_overflow))]
    #[error("declared length {declared} does not fit in usize")]
    LengthOverflow { declared: u64 },

    #[diagnostic(
        code(solid::decode::length_exceeds_input),
        help("the input was cut short or its length prefix is corrupt")
    )]
    #[error("declared length {declared} cannot fit in the {remaining} remaining byte(s)")]
    LengthExceedsInput { declared: usize, remaining: usize },

    #[diagnostic(code(solid::decode::invalid_bool))]
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[diagnostic(code(solid::decode::invalid_char))]
    #[error("invalid char scalar value {0:#x}")]
    InvalidChar(u32),

    #[diagnostic(code(solid::decode::invalid_option_tag))]
    #[error("invalid option tag {0:#04x}")]
    InvalidOptionTag(u8),

    #[diagnostic(code(solid::decode::invalid_utf8))]
    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[diagnostic(
        code(solid::decode::trailing_bytes),
        help("the input must be the exact output of `SolidList::marshal` for the same element type")
    )]
    #[error("{0} trailing byte(s) after the encoded value")]
    TrailingBytes(usize),
}

impl From<StreamError> for Error {
    fn from(error: StreamError) -> Self {
        match error {
            StreamError::Exhausted { position } => Error::Exhausted { position },
            StreamError::UnsupportedMutation { operation } => {
                Error::UnsupportedMutation { operation }
            }
            StreamError::IndexOutOfBounds { index, len } => Error::IndexOutOfBounds { index, len },
        }
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::UnexpectedEof {
                what,
                needed,
                remaining,
            } => Error::UnexpectedEof {
                what,
                needed,
                remaining,
            },
            DecodeError::LengthOverflow { declared } => Error::LengthOverflow { declared },
            DecodeError::LengthExceedsInput {
                declared,
                remaining,
            } => Error::LengthExceedsInput {
                declared,
                remaining,
            },
            DecodeError::InvalidBool(byte) => Error::InvalidBool(byte),
            DecodeError::InvalidChar(scalar) => Error::InvalidChar(scalar),
            DecodeError::InvalidOptionTag(tag) => Error::InvalidOptionTag(tag),
            DecodeError::InvalidUtf8 => Error::InvalidUtf8,
            DecodeError::TrailingBytes(extra) => Error::TrailingBytes(extra),
        }
    }
}
