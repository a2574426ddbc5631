use std::fmt;

use encoding_rs::Encoding;

use crate::core::PortalError;

/// Length of a student identifier.
pub const IDENTIFIER_LEN: usize = 10;

/// A validated student identifier: exactly ten ASCII digits.
///
/// Surrounding whitespace is trimmed; anything else (inner spaces, Arabic-Indic
/// digits, signs) is rejected rather than reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `raw` as a student identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidIdentifier`] if the trimmed input is not exactly
    /// ten ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, PortalError> {
        let trimmed = raw.trim();
        if trimmed.len() == IDENTIFIER_LEN && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(PortalError::InvalidIdentifier(raw.to_string()))
        }
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The raw body of the authenticated landing page and the encoding it was
/// confirmed with.
#[derive(Debug, Clone)]
pub struct LandingPage {
    /// Undecoded response bytes.
    pub body: Vec<u8>,
    /// Encoding used for the identifier echo check; extraction must use the same.
    pub encoding: &'static Encoding,
}

impl LandingPage {
    /// Decodes the body with the page's encoding.
    ///
    /// No BOM sniffing: a stray BOM must not switch the portal's declared encoding.
    /// Unmappable bytes become U+FFFD.
    #[must_use]
    pub fn decode(&self) -> String {
        decode_with(&self.body, self.encoding)
    }
}

pub(crate) fn decode_with(body: &[u8], encoding: &'static Encoding) -> String {
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "landing page contained unmappable bytes");
    }
    text.into_owned()
}
