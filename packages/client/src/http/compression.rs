//! Content encodings the transport decompresses automatically

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use http::HeaderValue;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecompressionMethods(u8);

impl DecompressionMethods {
    pub const NONE: Self = Self(0);
    pub const GZIP: Self = Self(1);
    pub const DEFLATE: Self = Self(1 << 1);
    pub const BROTLI: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::GZIP.0 | Self::DEFLATE.0 | Self::BROTLI.0);

    const NAMES: [(Self, &'static str); 3] = [
        (Self::GZIP, "gzip"),
        (Self::DEFLATE, "deflate"),
        (Self::BROTLI, "br"),
    ];

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Content-coding tokens in preference order
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(method, _)| self.contains(*method))
            .map(|(_, name)| name)
    }

    /// `Accept-Encoding` value, `None` when nothing is enabled
    #[must_use]
    pub fn accept_encoding(self) -> Option<HeaderValue> {
        if self.is_empty() {
            return None;
        }
        let joined = self.tokens().collect::<Vec<_>>().join(", ");
        Some(HeaderValue::from_str(&joined).unwrap_or(HeaderValue::from_static("gzip")))
    }
}

impl BitOr for DecompressionMethods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DecompressionMethods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for DecompressionMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("DecompressionMethods(NONE)");
        }
        write!(
            f,
            "DecompressionMethods({})",
            self.tokens().collect::<Vec<_>>().join(" | ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_encoding_lists_enabled_methods() {
        assert_eq!(
            DecompressionMethods::ALL.accept_encoding(),
            Some(HeaderValue::from_static("gzip, deflate, br"))
        );
        assert_eq!(
            (DecompressionMethods::BROTLI | DecompressionMethods::GZIP).accept_encoding(),
            Some(HeaderValue::from_static("gzip, br"))
        );
        assert_eq!(DecompressionMethods::NONE.accept_encoding(), None);
    }
}
