use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::CoreError;

/// Characters left unescaped in URL query values: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `value` for use inside a URL query string.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// A product search keyword that is guaranteed not to be blank.
///
/// The keyword is kept as the caller typed it; blankness is judged after
/// trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validates a raw keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlankQuery`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.trim().is_empty() {
            return Err(CoreError::BlankQuery);
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The keyword, percent-encoded for a URL query value.
    #[must_use]
    pub fn encoded(&self) -> String {
        encode_query_value(&self.0)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
