//! Landing page -> [`StudentResults`].
//!
//! Internals are split into:
//! - `table`: results-table qualification and course rows
//! - `text`:  plain-text scans for the notice, GPA and standing

mod table;
mod text;

pub use table::{COURSE_MARKER, GRADE_MARKER, is_results_header};
pub use text::NOTICE_MARKER;

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use encoding_rs::Encoding;
use scraper::Html;

use crate::core::models::decode_with;
use crate::core::{LandingPage, PortalError};
use crate::results::StudentResults;

/// Extracts results from a landing page fetched by [`crate::PortalClient`].
///
/// # Errors
///
/// See [`extract_results`].
pub fn extract_page(page: &LandingPage, identifier: &str) -> Result<StudentResults, PortalError> {
    extract_results(&page.body, page.encoding, identifier)
}

/// Decodes `body` with `encoding` and extracts results from it.
///
/// The encoding is load-bearing: the wrong one silently corrupts every Arabic
/// marker, so the GPA and standing are simply not found.
///
/// # Errors
///
/// - [`PortalError::NoResults`] if the page has neither a course row nor a GPA.
/// - [`PortalError::Parse`] if the parser fails, including a panic inside it.
pub fn extract_results(
    body: &[u8],
    encoding: &'static Encoding,
    identifier: &str,
) -> Result<StudentResults, PortalError> {
    let html = decode_with(body, encoding);

    guarded(|| extract_from_html(&html, identifier))
}

/// Runs `parse`, turning a panic inside it into [`PortalError::Parse`].
fn guarded<T>(parse: impl FnOnce() -> Result<T, PortalError>) -> Result<T, PortalError> {
    catch_unwind(AssertUnwindSafe(parse)).unwrap_or_else(|payload| Err(panic_to_error(&*payload)))
}

fn panic_to_error(payload: &(dyn Any + Send)) -> PortalError {
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "parser panicked".to_string());
    PortalError::Parse(reason)
}

/// Extracts results from already-decoded HTML.
///
/// # Errors
///
/// Same as [`extract_results`], except that parser panics are not caught.
pub fn extract_from_html(html: &str, identifier: &str) -> Result<StudentResults, PortalError> {
    let doc = Html::parse_document(html);
    let plain = text::plain_text(&doc);

    let courses = table::course_rows(&doc);
    let gpa = text::gpa(&plain);

    if courses.is_empty() && gpa.is_none() {
        return Err(PortalError::NoResults);
    }

    Ok(StudentResults {
        identifier: identifier.to_string(),
        courses,
        gpa,
        status: text::standing(&plain),
        notice: text::notice(&doc),
    })
}
