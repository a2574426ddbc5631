//! Session cookie acquisition and login for the portal.

use super::PortalClient;
use super::constants::{FORM_PASSWORD, FORM_USERNAME};
use crate::core::models::decode_with;
use crate::core::{Identifier, LandingPage, PortalError};

/// One login + one fetch against the portal, with its own cookie jar.
///
/// Created per lookup by [`PortalClient::session`] and dropped afterwards. A
/// session must never be reused for a second identifier.
pub struct Session<'a> {
    http: reqwest::Client,
    client: &'a PortalClient,
}

impl<'a> Session<'a> {
    pub(crate) fn new(http: reqwest::Client, client: &'a PortalClient) -> Self {
        Self { http, client }
    }

    /// Hits the portal base URL so the jar picks up the initial session cookies.
    ///
    /// # Errors
    ///
    /// [`PortalError::Http`] on transport faults, [`PortalError::Status`] on a
    /// non-success status.
    pub async fn establish(&self) -> Result<(), PortalError> {
        let url = self.client.base_url().clone();
        let resp = self.http.get(url.clone()).send().await?;

        if !resp.status().is_success() {
            return Err(PortalError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        tracing::debug!(status = resp.status().as_u16(), "session established");
        Ok(())
    }

    /// Posts the login form and returns the landing page if the portal echoes the
    /// identifier back.
    ///
    /// The echo check decodes with the client's configured encoding, not whatever
    /// the response headers claim.
    ///
    /// # Errors
    ///
    /// [`PortalError::Http`] on transport faults, [`PortalError::Login`] on a
    /// non-success status or a missing echo.
    pub async fn login(&self, id: &Identifier) -> Result<LandingPage, PortalError> {
        let url = self.client.login_url().clone();
        let form = [
            (FORM_USERNAME, id.as_str()),
            (FORM_PASSWORD, self.client.password()),
        ];

        let resp = self.http.post(url).form(&form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PortalError::Login(format!(
                "portal answered login with status {}",
                status.as_u16()
            )));
        }

        let body = crate::core::net::get_bytes(resp, "landing", id.as_str()).await?;
        let encoding = self.client.encoding();

        if !decode_with(&body, encoding).contains(id.as_str()) {
            return Err(PortalError::Login(format!(
                "identifier not echoed in landing page ({} bytes, decoded as {})",
                body.len(),
                encoding.name()
            )));
        }

        Ok(LandingPage { body, encoding })
    }
}
