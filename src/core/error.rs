use serde::Serialize;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Lookups never surface this type to their caller: [`crate::lookup`] converts it
/// into a [`FailureKind`] carried by a failure record and logs the cause.
#[derive(Debug, Error)]
pub enum PortalError {
    /// An error occurred during an HTTP request (timeout, DNS, reset, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The portal returned an unsuccessful HTTP status while establishing the session.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The portal answered but did not confirm the login.
    #[error("login failed: {0}")]
    Login(String),

    /// The landing page could not be processed.
    #[error("failed to parse landing page: {0}")]
    Parse(String),

    /// The landing page parsed cleanly but held neither courses nor a GPA.
    #[error("no results found on landing page")]
    NoResults,

    /// The identifier is not exactly ten ASCII digits.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The client was configured incorrectly.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// Maps this error to the failure category reported to callers.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) | Self::Url(_) | Self::Status { .. } | Self::Config(_) => {
                FailureKind::ConnectionFailure
            }
            Self::Login(_) => FailureKind::LoginFailure,
            Self::Parse(_) => FailureKind::ParseFailure,
            Self::NoResults => FailureKind::NoResultsAvailable,
            Self::InvalidIdentifier(_) => FailureKind::InvalidIdentifier,
        }
    }
}

/// Why a lookup did not produce results.
///
/// Connection and login failures are deliberately hard to tell apart: the portal
/// gives no distinct signal for an unknown identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport fault, timeout or non-success status reaching the portal.
    ConnectionFailure,
    /// The portal was reachable but did not echo the identifier back.
    LoginFailure,
    /// The page was retrieved and parsed but holds no courses and no GPA.
    NoResultsAvailable,
    /// Unexpected failure while parsing the page.
    ParseFailure,
    /// The identifier was rejected before any request was made.
    InvalidIdentifier,
}

impl FailureKind {
    /// User-facing (Arabic) text for this failure.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConnectionFailure => "فشل الاتصال بالموقع.",
            Self::LoginFailure => "فشل تسجيل الدخول. تأكد من الرقم الجامعي.",
            Self::NoResultsAvailable => {
                "لم يتم العثور على نتائج. قد لا تكون النتيجة قد نُشرت بعد."
            }
            Self::ParseFailure => "حدث خطأ أثناء استخراج النتائج.",
            Self::InvalidIdentifier => "الرقم الجامعي يجب أن يكون مكوناً من 10 أرقام.",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
