//! Summary and thread body for a batch of issues.

use chrono::{DateTime, Utc};

use crate::base::types::{Issue, Res};

use super::{age::format_age, link};

/// Shown in place of an assignee name when nobody is assigned.
pub const UNASSIGNED: &str = "Unassigned";

/// The two messages that announce one query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Top-level message: optional bold title and a link to the query.
    pub summary: String,
    /// Threaded reply: one line per issue, newline-terminated.
    pub body: String,
}

impl Notification {
    /// Compose both messages for `issues`, preserving their order.
    pub fn compose(issues: &[Issue], base_url: &str, jql: &str, title: &str, now: DateTime<Utc>) -> Res<Self> {
        Ok(Self {
            summary: summary(issues.len(), base_url, jql, title)?,
            body: body(issues, base_url, now),
        })
    }
}

/// `*<title>*\n<link to the query>`, the title part only when one is set.
pub fn summary(count: usize, base_url: &str, jql: &str, title: &str) -> Res<String> {
    let mut msg = String::new();

    if !title.is_empty() {
        msg.push_str(&format!("*{title}*\n"));
    }

    let url = link::browse_query_url(base_url, jql)?;
    msg.push_str(&link::slack_link(&format!("{count} Total Issues"), url.as_str()));

    Ok(msg)
}

/// One `<age> - <assignee> - <link>` line per issue.
pub fn body(issues: &[Issue], base_url: &str, now: DateTime<Utc>) -> String {
    issues.iter().map(|issue| format!("{}\n", line(issue, base_url, now))).collect()
}

/// A single body line, without the trailing newline.
pub fn line(issue: &Issue, base_url: &str, now: DateTime<Utc>) -> String {
    let assignee = issue.assignee.as_deref().unwrap_or(UNASSIGNED);
    let url = link::browse_issue_url(base_url, &issue.key);

    format!("{} - {} - {}", format_age(issue.created, now), assignee, link::slack_link(&issue.summary, &url))
}

// Tests.
