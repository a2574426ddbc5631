//! Test/recording helpers for persisting raw landing pages as fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("PORTAL_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `<endpoint>_<identifier>.raw.html`, byte for byte as the portal sent it.
pub(crate) fn record_fixture(
    endpoint: &str,
    identifier: &str,
    body: &[u8],
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{endpoint}_{identifier}.raw.html"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body)?;

    tracing::debug!("PORTAL_RECORD: wrote fixture to {}", path.display());
    Ok(())
}
