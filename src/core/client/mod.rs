//! Public client surface + builder.
//! Internals are split into `auth` (session cookies + login) and `constants` (UA + defaults).

mod auth;
mod constants;

pub use auth::Session;

use crate::core::{Identifier, LandingPage, PortalError};
use constants::{
    DEFAULT_ENCODING_LABEL, DEFAULT_PORTAL_URL, DEFAULT_TIMEOUT, ENV_PASSWORD, ENV_PORTAL_URL,
    USER_AGENT,
};
use encoding_rs::Encoding;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Configuration for talking to the portal.
///
/// A `PortalClient` holds no transport state. Every lookup gets its own
/// [`Session`] (and cookie jar) from [`PortalClient::session`], so clones can be
/// shared freely between concurrent lookups.
#[derive(Clone)]
pub struct PortalClient {
    base_url: Url,
    login_url: Url,
    password: String,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    encoding: &'static Encoding,
}

impl fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.base_url.as_str())
            .field("login_url", &self.login_url.as_str())
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("encoding", &self.encoding.name())
            .finish_non_exhaustive()
    }
}

impl PortalClient {
    /// Create a new builder.
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Builds a client from `PORTAL_URL` (optional) and `DEFAULT_PASSWORD` (required).
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Config`] if the password is unset, or
    /// [`PortalError::Url`] if `PORTAL_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, PortalError> {
        let password = std::env::var(ENV_PASSWORD)
            .map_err(|_| PortalError::Config(format!("{ENV_PASSWORD} is not set")))?;

        let mut builder = Self::builder().password(password);
        if let Ok(raw) = std::env::var(ENV_PORTAL_URL) {
            builder = builder.base_url(Url::parse(&raw)?);
        }
        builder.build()
    }

    /// Opens a fresh session with an empty cookie jar.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Http`] if the underlying HTTP client cannot be built.
    pub fn session(&self) -> Result<Session<'_>, PortalError> {
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .cookie_store(true)
            .timeout(self.timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(Session::new(httpb.build()?, self))
    }

    /// Establishes a session and logs in, returning the raw landing page.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Http`] or [`PortalError::Status`] when the portal cannot
    /// be reached, and [`PortalError::Login`] when the login is not confirmed.
    pub async fn fetch_landing_page(&self, id: &Identifier) -> Result<LandingPage, PortalError> {
        let session = self.session()?;
        session.establish().await?;
        session.login(id).await
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn login_url(&self) -> &Url {
        &self.login_url
    }
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// The encoding landing pages are decoded with.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PortalClientBuilder {
    base_url: Option<Url>,
    login_url: Option<Url>,
    password: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    encoding: Option<&'static Encoding>,
    encoding_label: Option<String>,
}

impl PortalClientBuilder {
    /// Override the portal base URL (e.g., `http://212.0.143.242/portal/students`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the login POST target. Defaults to the base URL.
    pub fn login_url(mut self, url: Url) -> Self {
        self.login_url = Some(url);
        self
    }

    /// Shared password used for every identifier. Required.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Per-request timeout. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Encoding of the portal's pages. Default: windows-1256.
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self.encoding_label = None;
        self
    }

    /// Same as [`encoding`](Self::encoding), resolved from a WHATWG label at build time.
    pub fn encoding_label(mut self, label: impl Into<String>) -> Self {
        self.encoding_label = Some(label.into());
        self.encoding = None;
        self
    }

    pub fn build(self) -> Result<PortalClient, PortalError> {
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PortalError::Config("shared password is required".into()))?;

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_PORTAL_URL)?,
        };
        let login_url = self.login_url.unwrap_or_else(|| base_url.clone());

        let encoding = match (self.encoding, self.encoding_label) {
            (Some(enc), _) => enc,
            (None, Some(label)) => resolve_encoding(&label)?,
            (None, None) => resolve_encoding(DEFAULT_ENCODING_LABEL)?,
        };

        Ok(PortalClient {
            base_url,
            login_url,
            password,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout,
            encoding,
        })
    }
}

fn resolve_encoding(label: &str) -> Result<&'static Encoding, PortalError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| PortalError::Config(format!("unknown encoding label: {label}")))
}
