//! Named character encodings used to transcode text before percent-encoding

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::config::ConfigurationError;

/// A character encoding resolved from a WHATWG label
///
/// Labels resolve the way browsers resolve them, so `latin1` and
/// `iso-8859-1` both name `windows-1252`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub const UTF_8: Self = Self(encoding_rs::UTF_8);
    pub const WINDOWS_1252: Self = Self(encoding_rs::WINDOWS_1252);

    /// Resolve a label such as `utf8` or `Shift_JIS`, `None` when unknown.
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// Canonical name, as used in `charset=` parameters.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    #[must_use]
    pub fn as_encoding(self) -> &'static Encoding {
        self.0
    }

    /// Transcode `text` into this encoding.
    ///
    /// Characters the encoding cannot represent become HTML decimal numeric
    /// character references. Encodings that cannot be produced from text
    /// (UTF-16, `replacement`) yield UTF-8.
    #[must_use]
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        let (bytes, _, unmappable) = self.0.encode(text);
        if unmappable {
            tracing::trace!(encoding = self.name(), "unmappable characters replaced");
        }
        bytes
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl From<&'static Encoding> for TextEncoding {
    fn from(encoding: &'static Encoding) -> Self {
        Self(encoding)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = ConfigurationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::for_label(label)
            .ok_or_else(|| ConfigurationError::UnsupportedEncoding(label.trim().to_string()))
    }
}
