//! Percent-encoding strategies

use std::borrow::Cow;

use super::charset::TextEncoding;

/// Encodes a value placed in a URL path segment or other generic position.
pub trait ValueEncoder: Send + Sync {
    fn encode_value(&self, value: &str) -> String;
}

/// Encodes a value placed in the query string, after transcoding it into the
/// configured character encoding.
///
/// The output is stored through [`url::Url::set_query`], which still
/// percent-encodes spaces, quotes, `#`, `<` and `>` left in place. Every
/// other character passes through as the encoder wrote it.
pub trait QueryEncoder: Send + Sync {
    fn encode_query_value(&self, value: &str, encoding: TextEncoding) -> String;
}

impl<F> ValueEncoder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn encode_value(&self, value: &str) -> String {
        self(value)
    }
}

impl<F> QueryEncoder for F
where
    F: Fn(&str, TextEncoding) -> String + Send + Sync,
{
    fn encode_query_value(&self, value: &str, encoding: TextEncoding) -> String {
        self(value, encoding)
    }
}

/// RFC 3986 percent-encoding: every byte except `A-Z a-z 0-9 - _ . ~` is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueEncoder;

impl ValueEncoder for DefaultValueEncoder {
    fn encode_value(&self, value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

/// Percent-encodes the bytes of the value in the requested encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryEncoder;

impl QueryEncoder for DefaultQueryEncoder {
    fn encode_query_value(&self, value: &str, encoding: TextEncoding) -> String {
        urlencoding::encode_binary(&encoding.encode(value)).into_owned()
    }
}

/// Decode a percent-encoded UTF-8 string, `None` if the bytes are not UTF-8.
#[must_use]
pub fn percent_decode(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED: &[&str] = &[
        "a b",
        "a+b=c&d",
        "path/with/slashes",
        "question?hash#",
        "100%",
        "[brackets]:@!$'()*,;",
        "caf\u{e9} \u{2603}",
    ];

    #[test]
    fn value_encoding_round_trips() {
        for input in RESERVED {
            let encoded = DefaultValueEncoder.encode_value(input);
            assert!(
                encoded
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b)),
                "unexpected character in {encoded}"
            );
            assert_eq!(percent_decode(&encoded).as_deref(), Some(*input));
        }
    }

    #[test]
    fn query_encoding_round_trips_in_utf8() {
        for input in RESERVED {
            let encoded = DefaultQueryEncoder.encode_query_value(input, TextEncoding::UTF_8);
            assert_eq!(percent_decode(&encoded).as_deref(), Some(*input));
        }
    }

    #[test]
    fn query_encoding_honors_latin1() {
        let encoded =
            DefaultQueryEncoder.encode_query_value("caf\u{e9}", TextEncoding::WINDOWS_1252);
        assert_eq!(encoded, "caf%E9");
    }

    #[test]
    fn space_is_percent_encoded_not_plus() {
        assert_eq!(DefaultValueEncoder.encode_value("a b"), "a%20b");
        assert_eq!(
            DefaultQueryEncoder.encode_query_value("a b", TextEncoding::UTF_8),
            "a%20b"
        );
    }

    #[test]
    fn closures_replace_the_defaults() {
        let upper = |value: &str| value.to_uppercase();
        assert_eq!(upper.encode_value("abc"), "ABC");

        let tagged = |value: &str, encoding: TextEncoding| format!("{encoding}:{value}");
        assert_eq!(
            tagged.encode_query_value("x", TextEncoding::WINDOWS_1252),
            "windows-1252:x"
        );
    }
}
