//! portal-results: fetch a student's results from the university portal.
//!
//! A lookup opens a fresh cookie session, logs in with the student identifier and
//! the shared password, confirms the login by the identifier being echoed back,
//! then extracts courses, GPA, standing and the regulatory notice from the
//! windows-1256 landing page.
//!
//! ```no_run
//! # use portal_results::PortalClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), portal_results::PortalError> {
//! let client = PortalClient::builder().password("secret").build()?;
//! let record = client.lookup("1124693617").await;
//! match record.error() {
//!     None => println!("{} courses, GPA {:?}", record.courses().len(), record.gpa()),
//!     Some(reason) => println!("{reason}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod results;

pub use crate::core::{
    FailureKind, Identifier, LandingPage, PortalClient, PortalClientBuilder, PortalError, Session,
};
pub use results::{
    Course, LookupFailure, ResultRecord, Standing, StudentResults, lookup, lookup_many,
};
