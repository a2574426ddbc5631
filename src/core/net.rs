#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as raw bytes; decoding is the caller's job.
/// In `test-mode`, if `PORTAL_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _identifier: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let body = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("PORTAL_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _identifier, &body)
        {
            tracing::warn!("PORTAL_RECORD: failed to write fixture for {_identifier}: {e}");
        }
    }

    Ok(body)
}
