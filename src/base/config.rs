//! Load configuration via `config` crate with env-override support.
//!
//! Layers, lowest to highest: an optional TOML file, environment variables,
//! then explicit command-line flags.

use std::{
    ops::Deref,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;

use super::{error::NotifierError, types::Res};

/// Default location of the optional config file.
const DEFAULT_CONFIG_PATH: &str = ".hidden/config.toml";

/// Configuration for the notifier.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared, immutable settings.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The settings themselves, one field per flag.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Jira API token (`API_TOKEN`).
    #[serde(default)]
    pub api_token: String,
    /// Jira user email (`USER_EMAIL`).
    #[serde(default)]
    pub user_email: String,
    /// Jira Query Language (JQL) query (`JQL`).
    #[serde(default)]
    pub jql: String,
    /// Jira instance URL (`JIRA_URL`).
    #[serde(default)]
    pub jira_url: String,
    /// Slack bot token (`SLACK_TOKEN`).
    #[serde(default)]
    pub slack_token: String,
    /// Slack channel ID or name (`SLACK_CHANNEL`).
    #[serde(default)]
    pub slack_channel: String,
    /// Optional title shown in bold above the summary link (`SLACK_MSG_TITLE`).
    #[serde(default)]
    pub slack_msg_title: String,
}

impl ConfigInner {
    /// Jira base URL without a trailing slash.
    pub fn jira_base_url(&self) -> &str {
        self.jira_url.trim_end_matches('/')
    }

    /// Names of the required fields that are empty, in flag order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api-token", &self.api_token),
            ("user", &self.user_email),
            ("jira-url", &self.jira_url),
            ("jql", &self.jql),
            ("slack-channel", &self.slack_channel),
            ("slack-token", &self.slack_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Values given explicitly on the command line.
///
/// Anything set here wins over the environment and the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--api-token`
    pub api_token: Option<String>,
    /// `--user`
    pub user_email: Option<String>,
    /// `--jql`
    pub jql: Option<String>,
    /// `--jira-url`
    pub jira_url: Option<String>,
    /// `--slack-token`
    pub slack_token: Option<String>,
    /// `--slack-channel`
    pub slack_channel: Option<String>,
    /// `--slack-msg-title`
    pub slack_msg_title: Option<String>,
}

impl Config {
    /// Load from the process environment, the optional config file, and `overrides`.
    pub fn load(explicit_path: Option<&Path>, overrides: Overrides) -> Res<Self> {
        Self::load_from(explicit_path, config::Environment::default(), overrides)
    }

    /// Same as [`Config::load`], but with a caller-supplied environment source.
    pub fn load_from(explicit_path: Option<&Path>, environment: config::Environment, overrides: Overrides) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            cfg = cfg.add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_PATH)));
        }

        let cfg = cfg
            .add_source(environment)
            .set_override_option("api_token", overrides.api_token)?
            .set_override_option("user_email", overrides.user_email)?
            .set_override_option("jql", overrides.jql)?
            .set_override_option("jira_url", overrides.jira_url)?
            .set_override_option("slack_token", overrides.slack_token)?
            .set_override_option("slack_channel", overrides.slack_channel)?
            .set_override_option("slack_msg_title", overrides.slack_msg_title)?;

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        let missing = result.missing_fields();
        if !missing.is_empty() {
            return Err(NotifierError::Configuration(missing).into());
        }

        Ok(result)
    }
}

// Tests.
