use serde::Serialize;

use crate::core::FailureKind;

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Course name as printed by the portal.
    pub name: String,
    /// Grade as printed by the portal (letter or mark, never normalised).
    pub grade: String,
}

/// Overall standing, derived from literal marker text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Pass,
    Fail,
}

impl Standing {
    /// The Arabic literal this standing is read from.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Pass => "نجاح",
            Self::Fail => "رسوب",
        }
    }
}

/// Everything extracted from a landing page that had results on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentResults {
    pub identifier: String,
    /// Document order. May be empty on summary-only pages.
    pub courses: Vec<Course>,
    /// GPA token exactly as printed (not parsed or rounded).
    pub gpa: Option<String>,
    pub status: Option<Standing>,
    /// Regulatory disclaimer, verbatim.
    pub notice: Option<String>,
}

/// A lookup that produced no results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    pub identifier: String,
    pub kind: FailureKind,
}

impl LookupFailure {
    /// User-facing reason.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// The outcome of a single lookup. Lookups are all-or-nothing: a failure carries
/// no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResultRecord {
    Success(StudentResults),
    Failure(LookupFailure),
}

impl ResultRecord {
    pub(crate) fn failure(identifier: impl Into<String>, kind: FailureKind) -> Self {
        Self::Failure(LookupFailure {
            identifier: identifier.into(),
            kind,
        })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Success(r) => &r.identifier,
            Self::Failure(f) => &f.identifier,
        }
    }

    /// Courses in document order; empty for failures.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        match self {
            Self::Success(r) => &r.courses,
            Self::Failure(_) => &[],
        }
    }

    #[must_use]
    pub fn gpa(&self) -> Option<&str> {
        match self {
            Self::Success(r) => r.gpa.as_deref(),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<Standing> {
        match self {
            Self::Success(r) => r.status,
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Success(r) => r.notice.as_deref(),
            Self::Failure(_) => None,
        }
    }

    /// User-facing failure reason; `None` on success.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.failure_kind().map(FailureKind::message)
    }

    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f.kind),
        }
    }
}
