//! Chat service integration.
//!
//! Defines the `GenericChatClient` trait and the cloneable `ChatClient`
//! handle, with a Slack implementation.

pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the calls the notifier makes against a chat platform
/// like Slack.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Verify the token against the chat service.
    ///
    /// Called once, right before the first message is sent.
    async fn authenticate(&self) -> Void;

    /// Post a top-level message to a channel.
    ///
    /// Returns the message timestamp, which identifies it for threaded replies.
    async fn post_message(&self, channel_id: &str, text: &str) -> Res<String>;

    /// Post a reply in the thread anchored at `thread_ts`.
    async fn post_reply(&self, channel_id: &str, thread_ts: &str, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
