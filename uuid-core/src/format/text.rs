use core::{fmt, ops::Deref, str::FromStr};

use super::error::ParseError;
use crate::Uuid;

pub const TEXT_LEN: usize = 36;
pub const DASH_POSITIONS: [usize; 4] = [8, 13, 18, 23];

const HEX: [u8; 16] = *b"0123456789abcdef";

/// Canonical lowercase `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` rendering of a
/// UUID, held in a fixed 36-byte buffer.
///
/// Values are only built by [`UuidText::render`] and [`UuidText::parse`], so
/// the buffer always holds ASCII in the canonical layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UuidText([u8; TEXT_LEN]);

impl UuidText {
    pub fn render(bytes: &[u8; 16]) -> Self {
        let mut buf = [0u8; TEXT_LEN];
        let mut pos = 0;
        for (i, b) in bytes.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                buf[pos] = b'-';
                pos += 1;
            }
            buf[pos] = HEX[(b >> 4) as usize];
            buf[pos + 1] = HEX[(b & 0x0f) as usize];
            pos += 2;
        }
        Self(buf)
    }

    /// Validates the canonical layout. Upper-case digits are accepted and
    /// stored lower-cased.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let input = s.as_bytes();
        if input.len() != TEXT_LEN {
            return Err(ParseError::InvalidLength(input.len()));
        }
        let mut buf = [0u8; TEXT_LEN];
        for (i, &c) in input.iter().enumerate() {
            buf[i] = if DASH_POSITIONS.contains(&i) {
                if c != b'-' {
                    return Err(ParseError::InvalidDash(i));
                }
                c
            } else {
                match c {
                    b'0'..=b'9' | b'a'..=b'f' => c,
                    b'A'..=b'F' => c.to_ascii_lowercase(),
                    _ => return Err(ParseError::InvalidDigit(i)),
                }
            };
        }
        Ok(Self(buf))
    }

    pub fn as_str(&self) -> &str {
        // only ever holds ASCII
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8; TEXT_LEN] {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        let mut nibbles = self.0.iter().filter(|c| **c != b'-').map(|c| nibble(*c));
        for byte in bytes.iter_mut() {
            if let (Some(hi), Some(lo)) = (nibbles.next(), nibbles.next()) {
                *byte = (hi << 4) | lo;
            }
        }
        Uuid::from_bytes(bytes)
    }
}

fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => 0,
    }
}

impl Deref for UuidText {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for UuidText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UuidText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UuidText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UuidText({})", self.as_str())
    }
}

impl FromStr for UuidText {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for UuidText {
    fn from(uuid: Uuid) -> Self {
        uuid.to_text()
    }
}

impl serde::Serialize for UuidText {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for UuidText {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor)
    }
}

pub(crate) struct TextVisitor;

impl serde::de::Visitor<'_> for TextVisitor {
    type Value = UuidText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hyphenated UUID string")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<UuidText, E> {
        UuidText::parse(v).map_err(E::custom)
    }
}
