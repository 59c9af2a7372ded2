use thiserror::Error;

/// Failure to decode a marshalled value.
///
/// A decode never yields a partial value: any of these aborts the whole
/// `unmarshal` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(
        "unexpected end of input reading {what}: needed {needed} byte(s), {remaining} remaining"
    )]
    UnexpectedEof {
        what: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("declared length {declared} does not fit in usize")]
    LengthOverflow { declared: u64 },

    #[error("declared length {declared} cannot fit in the {remaining} remaining byte(s)")]
    LengthExceedsInput { declared: usize, remaining: usize },

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid char scalar value {0:#x}")]
    InvalidChar(u32),

    #[error("invalid option tag {0:#04x}")]
    InvalidOptionTag(u8),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0} trailing byte(s) after the encoded value")]
    TrailingBytes(usize),
}
