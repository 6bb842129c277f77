//! Runtime services and the single pass that ties them together.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{
    notification::Notification,
    prelude::*,
    service::{chat::ChatClient, tracker::TrackerClient},
};

/// Pause between the summary and the threaded reply, so Slack has the parent
/// message in place before the reply arrives.
pub const REPLY_DELAY: Duration = Duration::from_millis(500);

/// What a completed run did.
#[derive(Debug)]
pub enum RunOutcome {
    /// The query matched nothing; the chat service was never contacted.
    NoIssues,
    /// The summary was posted.
    Posted {
        /// Number of issues announced.
        issue_count: usize,
        /// Timestamp of the summary message.
        summary_ts: String,
        /// Set when the threaded reply was rejected. The summary stays posted.
        reply_error: Option<NotifierError>,
    },
}

/// Runtime service context.
///
/// Holds the configuration and both service clients. It is trivially
/// cloneable, and every client is passed in explicitly so tests can swap in
/// mocks.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The issue tracker client instance.
    pub tracker: TrackerClient,
    /// The chat client instance.
    pub chat: ChatClient,
    /// Pause between the summary and the reply.
    pub reply_delay: Duration,
}

impl Runtime {
    /// Create a new runtime instance backed by Jira and Slack.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        let tracker = TrackerClient::jira(&config)?;
        let chat = ChatClient::slack(&config);

        Ok(Self {
            config,
            tracker,
            chat,
            reply_delay: REPLY_DELAY,
        })
    }

    /// Query the tracker and, if anything matched, announce it in chat.
    ///
    /// Failures on the query, on chat authentication, or on the summary post
    /// are returned as errors. A failed reply is reported in the outcome
    /// instead, since the summary has already gone out by then.
    #[instrument(skip_all)]
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunOutcome, NotifierError> {
        let issues = self.tracker.search(&self.config.jql).await.map_err(NotifierError::Tracker)?;

        if issues.is_empty() {
            info!("No issues matched the query; nothing to post.");
            return Ok(RunOutcome::NoIssues);
        }

        info!("Found {} issues.", issues.len());

        let notification = Notification::compose(&issues, self.config.jira_base_url(), &self.config.jql, &self.config.slack_msg_title, now).map_err(NotifierError::Publish)?;

        self.chat.authenticate().await.map_err(NotifierError::Publish)?;

        let channel = &self.config.slack_channel;
        let summary_ts = self.chat.post_message(channel, &notification.summary).await.map_err(NotifierError::Publish)?;

        info!("Posted summary message ({}).", summary_ts);

        tokio::time::sleep(self.reply_delay).await;

        let reply_error = match self.chat.post_reply(channel, &summary_ts, &notification.body).await {
            Ok(()) => {
                info!("Posted thread reply.");
                None
            }
            Err(e) => Some(NotifierError::Publish(e)),
        };

        Ok(RunOutcome::Posted {
            issue_count: issues.len(),
            summary_ts,
            reply_error,
        })
    }
}
