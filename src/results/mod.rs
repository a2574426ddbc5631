//! Result lookups: session -> login -> extraction -> [`ResultRecord`].
//!
//! Internals are split into:
//! - `model`:   the record types handed to the presentation layer
//! - `extract`: HTML extraction (public so the heuristics can be exercised offline)
//! - `debug`:   optional landing page dumps (`debug-dumps` feature)

pub mod extract;
mod model;

#[cfg(feature = "debug-dumps")]
mod debug;

pub use model::{Course, LookupFailure, ResultRecord, Standing, StudentResults};

use crate::core::{FailureKind, Identifier, PortalClient, PortalError};

async fn try_lookup(client: &PortalClient, identifier: &str) -> Result<StudentResults, PortalError> {
    let id = Identifier::parse(identifier)?;
    let page = client.fetch_landing_page(&id).await?;

    #[cfg(feature = "debug-dumps")]
    debug::debug_dump_landing_page(&id, &page);

    extract::extract_page(&page, id.as_str())
}

/// Looks up the results of one student.
///
/// Never fails: every error is logged with its cause and turned into a
/// [`ResultRecord::Failure`]. Each call opens its own session, so concurrent
/// lookups never share cookies. No retries are attempted.
#[tracing::instrument(skip_all, fields(identifier = %identifier.trim()))]
pub async fn lookup(client: &PortalClient, identifier: &str) -> ResultRecord {
    match try_lookup(client, identifier).await {
        Ok(results) => {
            tracing::info!(
                courses = results.courses.len(),
                gpa = results.gpa.as_deref().unwrap_or("-"),
                "results fetched"
            );
            ResultRecord::Success(results)
        }
        Err(e) => {
            let kind = e.kind();
            match kind {
                FailureKind::ConnectionFailure | FailureKind::ParseFailure => {
                    tracing::error!(?kind, error = %e, "lookup failed");
                }
                FailureKind::LoginFailure
                | FailureKind::NoResultsAvailable
                | FailureKind::InvalidIdentifier => {
                    tracing::warn!(?kind, error = %e, "lookup failed");
                }
            }
            ResultRecord::failure(identifier.trim(), kind)
        }
    }
}

/// Runs independent lookups concurrently and returns the records in input order.
pub async fn lookup_many<I, S>(client: &PortalClient, identifiers: I) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<S> = identifiers.into_iter().collect();
    futures::future::join_all(ids.iter().map(|id| lookup(client, id.as_ref()))).await
}

impl PortalClient {
    /// Shorthand for [`lookup`].
    pub async fn lookup(&self, identifier: &str) -> ResultRecord {
        lookup(self, identifier).await
    }
}
