/// Reasons a string is not a canonical `8-4-4-4-12` UUID. Every variant
/// carries the character index it refers to (or the actual length).
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidLength(usize),
    InvalidDash(usize),
    InvalidDigit(usize),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidLength(len) => write!(f, "expected 36 characters, found {len}"),
            ParseError::InvalidDash(idx) => write!(f, "expected '-' at index {idx}"),
            ParseError::InvalidDigit(idx) => write!(f, "invalid hex digit at index {idx}"),
        }
    }
}

impl core::error::Error for ParseError {}
