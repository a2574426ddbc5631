//! Centralized constants for the default endpoint, UA and transport settings.

use std::time::Duration;

/// Default desktop UA; the portal serves a stripped page to unknown agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Portal base URL. The login form posts back to the same address.
pub(crate) const DEFAULT_PORTAL_URL: &str = "http://212.0.143.242/portal/students";

/// WHATWG label of the portal's legacy Arabic single-byte encoding.
pub(crate) const DEFAULT_ENCODING_LABEL: &str = "windows-1256";

/// Bound on each request (session GET and login POST).
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the portal base URL.
pub(crate) const ENV_PORTAL_URL: &str = "PORTAL_URL";

/// Environment variable holding the shared login password.
pub(crate) const ENV_PASSWORD: &str = "DEFAULT_PASSWORD";

/// Form field names of the portal's login form.
pub(crate) const FORM_USERNAME: &str = "username";
pub(crate) const FORM_PASSWORD: &str = "password";
