//! Debug dump helpers for troubleshooting portal markup changes.

use std::io::Write;

use crate::core::{Identifier, LandingPage};

/// With `PORTAL_DEBUG=1`, writes the decoded landing page to the temp directory.
pub(crate) fn debug_dump_landing_page(id: &Identifier, page: &LandingPage) {
    if std::env::var("PORTAL_DEBUG").ok().as_deref() != Some("1") {
        return;
    }

    let path = std::env::temp_dir().join(format!("portal_results-landing-{id}.html"));
    let written = std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(page.decode().as_bytes()));

    match written {
        Ok(()) => tracing::debug!(
            "PORTAL_DEBUG: wrote decoded landing page ({}) to {}",
            page.encoding.name(),
            path.display()
        ),
        Err(e) => tracing::warn!("PORTAL_DEBUG: failed to dump landing page: {e}"),
    }
}
