//! Slack implementation of `GenericChatClient`, on top of `slack-morphism`.

use crate::base::{
    config::Config,
    types::{Res, Void},
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::prelude::*;
use tracing::{info, instrument};

use std::sync::{Arc, OnceLock};

use super::{ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    ///
    /// Nothing is set up, and no request is made, until the first call.
    pub fn slack(config: &Config) -> Self {
        Self {
            inner: Arc::new(SlackChatClient::new(config)),
        }
    }
}

// Structs.

/// Slack client implementation.
#[derive(Clone)]
pub struct SlackChatClient {
    bot_token: SlackApiToken,
    client: Arc<OnceLock<FullClient>>,
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_token.clone()));

        Self {
            bot_token,
            client: Arc::default(),
        }
    }

    /// The underlying HTTPS client, built on first use.
    fn client(&self) -> Res<&FullClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);

        Ok(self.client.get_or_init(|| slack_morphism::SlackClient::new(connector)))
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    #[instrument(skip(self))]
    async fn authenticate(&self) -> Void {
        let session = self.client()?.open_session(&self.bot_token);

        let bot_user = session.auth_test().await.map_err(|e| anyhow::anyhow!("Failed to authenticate with Slack: {}", e))?;

        info!("Slack bot user ID: {}", bot_user.user_id.0);

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn post_message(&self, channel_id: &str, text: &str) -> Res<String> {
        let message = SlackMessageContent::new().with_text(text.to_string());

        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), message);

        let session = self.client()?.open_session(&self.bot_token);

        let response = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(response.ts.0)
    }

    #[instrument(skip(self, text))]
    async fn post_reply(&self, channel_id: &str, thread_ts: &str, text: &str) -> Void {
        let message = SlackMessageContent::new().with_text(text.to_string());

        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), message).with_thread_ts(SlackTs(thread_ts.to_string()));

        let session = self.client()?.open_session(&self.bot_token);

        let _ = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to send thread reply: {}", e))?;

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    #[test]
    fn test_new_defers_connector_setup() {
        let config = Config {
            inner: Arc::new(ConfigInner {
                slack_token: "xoxb-test".to_string(),
                ..Default::default()
            }),
        };

        let client = SlackChatClient::new(&config);

        assert!(client.client.get().is_none());
        assert_eq!(client.bot_token.token_value.0, "xoxb-test");
    }
}
