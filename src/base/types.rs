//! Common types and result aliases.

use chrono::{DateTime, Utc};

/// Error type used across service code.
pub type Err = anyhow::Error;
/// Result with the crate's [`Err`].
pub type Res<T> = Result<T, Err>;
/// Result carrying nothing on success.
pub type Void = Res<()>;

/// A read-only snapshot of a tracker issue, as much of it as a notification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue key (e.g., `PROJ-123`).
    pub key: String,
    /// One-line summary.
    pub summary: String,
    /// When the issue was created.
    pub created: DateTime<Utc>,
    /// Display name of the assignee, if any.
    pub assignee: Option<String>,
}
