use core::{fmt, str::FromStr};

use crate::format::{error::ParseError, text::UuidText};

/// A 128-bit UUID in network byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uuid([u8; 16]);

/// Layout variant encoded in the top bits of byte 8.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Ncs,
    Rfc4122,
    Microsoft,
    Future,
}

impl Uuid {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn nil() -> Self {
        Self([0u8; 16])
    }

    /// Stamps the version 4 nibble into byte 6 and the RFC 4122 `10` prefix
    /// into byte 8. The other 122 bits are kept as given.
    pub fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// `None` for the nil UUID, which has no version.
    pub fn version(&self) -> Option<u8> {
        if self.is_nil() {
            None
        } else {
            Some(self.0[6] >> 4)
        }
    }

    pub fn variant(&self) -> Variant {
        match self.0[8] {
            0x00..=0x7f => Variant::Ncs,
            0x80..=0xbf => Variant::Rfc4122,
            0xc0..=0xdf => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    pub fn to_text(&self) -> UuidText {
        UuidText::render(&self.0)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text().as_str())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.to_text())
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidText::parse(s).map(|text| text.to_uuid())
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<UuidText> for Uuid {
    fn from(text: UuidText) -> Self {
        text.to_uuid()
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_text().as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_str(crate::format::text::TextVisitor)
            .map(|text| text.to_uuid())
    }
}
