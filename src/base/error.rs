//! Errors that decide how the process exits.

use thiserror::Error;

/// Failures the top level distinguishes between.
///
/// Service code works with `anyhow` and gets wrapped into one of these at the
/// runtime boundary, so the binary can pick the right exit behavior.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// One or more required parameters resolved to empty.
    #[error("Please provide valid values for {}", .0.join(", "))]
    Configuration(Vec<&'static str>),
    /// Authentication or query failure against the issue tracker.
    #[error("Failed to fetch Jira issues: {0:#}")]
    Tracker(anyhow::Error),
    /// Authentication or send failure against the chat service.
    ///
    /// The chat client already says which call failed, so no prefix is added.
    #[error("{0:#}")]
    Publish(anyhow::Error),
}

impl NotifierError {
    /// Returns `true` for errors caused by missing configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_error_keeps_single_prefix() {
        let err = NotifierError::Publish(anyhow::anyhow!("Failed to send thread reply: msg_too_long"));

        assert_eq!(err.to_string(), "Failed to send thread reply: msg_too_long");
    }

    #[test]
    fn test_tracker_error_includes_cause_chain() {
        let err = NotifierError::Tracker(anyhow::anyhow!("HTTP 410 Gone").context("Jira search failed"));

        assert_eq!(err.to_string(), "Failed to fetch Jira issues: Jira search failed: HTTP 410 Gone");
    }

    #[test]
    fn test_only_configuration_is_configuration() {
        assert!(NotifierError::Configuration(vec!["jql"]).is_configuration());
        assert!(!NotifierError::Publish(anyhow::anyhow!("x")).is_configuration());
    }
}
