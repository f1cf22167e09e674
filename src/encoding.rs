//! Text encodings accepted for INI input and output.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// UTF-8 byte order mark.
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// UTF-16 little-endian byte order mark.
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];

/// UTF-16 big-endian byte order mark.
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Encoding used to decode input bytes and encode serialized output.
///
/// UTF-8 input is BOM aware: a UTF-8 BOM is stripped, and a UTF-16 BOM
/// switches decoding to the matching UTF-16 byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TextEncoding {
    /// UTF-8 (default)
    #[default]
    Utf8,
    /// UTF-16, little-endian
    Utf16Le,
    /// UTF-16, big-endian
    Utf16Be,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Canonical label, as accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Latin1 => "latin-1",
        }
    }

    /// Decodes `bytes` read from `source_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the bytes are not valid in this encoding.
    pub fn decode(self, bytes: &[u8], source_name: &str) -> Result<String, Error> {
        let fail = |reason: String| Error::Encoding {
            source_name: source_name.to_owned(),
            encoding: self.label(),
            reason,
        };

        match self {
            Self::Utf8 => {
                if let Some(rest) = bytes.strip_prefix(BOM_UTF16_LE) {
                    return decode_utf16(rest, u16::from_le_bytes).map_err(fail);
                }
                if let Some(rest) = bytes.strip_prefix(BOM_UTF16_BE) {
                    return decode_utf16(rest, u16::from_be_bytes).map_err(fail);
                }
                let bytes = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
                String::from_utf8(bytes.to_vec()).map_err(|e| fail(e.to_string()))
            }
            Self::Utf16Le => {
                let bytes = bytes.strip_prefix(BOM_UTF16_LE).unwrap_or(bytes);
                decode_utf16(bytes, u16::from_le_bytes).map_err(fail)
            }
            Self::Utf16Be => {
                let bytes = bytes.strip_prefix(BOM_UTF16_BE).unwrap_or(bytes);
                decode_utf16(bytes, u16::from_be_bytes).map_err(fail)
            }
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        }
    }

    /// Encodes `text` for writing to `sink_name`. No BOM is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if a character cannot be represented.
    pub fn encode(self, text: &str, sink_name: &str) -> Result<Vec<u8>, Error> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Self::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
                .collect::<Result<Vec<u8>, char>>()
                .map_err(|c| Error::Encoding {
                    source_name: sink_name.to_owned(),
                    encoding: self.label(),
                    reason: format!("character {c:?} is not representable"),
                }),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("odd number of bytes ({})", bytes.len()));
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| e.to_string())
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match folded.as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16le" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            "latin1" | "iso88591" => Ok(Self::Latin1),
            _ => Err(Error::UnknownEncoding {
                label: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
