//! Jira Cloud implementation of `GenericTrackerClient`, over the REST v3 JQL search endpoint.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{Issue, Res},
};

use super::{GenericTrackerClient, TrackerClient};

/// Enhanced JQL search; the older `/rest/api/2/search` is gone from Jira Cloud.
const SEARCH_PATH: &str = "/rest/api/3/search/jql";

/// Only the fields a notification needs.
const SEARCH_FIELDS: &str = "summary,created,assignee";

/// Format Jira uses for timestamps (e.g., `2024-01-15T10:30:00.000+0000`).
const JIRA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

// Extra methods on `TrackerClient` applied by the jira implementation.

impl TrackerClient {
    /// Creates a new Jira tracker client.
    pub fn jira(config: &Config) -> Res<Self> {
        let client = JiraTrackerClient::new(&config.jira_url, &config.user_email, &config.api_token)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Structs.

/// Jira client using basic auth (account email + API token).
#[derive(Clone)]
pub struct JiraTrackerClient {
    base_url: String,
    user_email: String,
    api_token: String,
    http: Client,
}

impl JiraTrackerClient {
    pub fn new(base_url: &str, user_email: &str, api_token: &str) -> Res<Self> {
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url).with_context(|| format!("Invalid Jira URL: {}", base_url))?;

        Ok(Self {
            base_url: base_url.to_string(),
            user_email: user_email.to_string(),
            api_token: api_token.to_string(),
            http: Client::new(),
        })
    }
}

#[async_trait]
impl GenericTrackerClient for JiraTrackerClient {
    #[instrument(skip(self))]
    async fn search(&self, jql: &str) -> Res<Vec<Issue>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.user_email, Some(&self.api_token))
            .query(&[("jql", jql), ("fields", SEARCH_FIELDS)])
            .send()
            .await
            .context("Failed to reach Jira")?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Jira returned HTTP {}: {}", status, describe_error(&body)));
        }

        let result = response.json::<SearchResponse>().await.context("Failed to decode Jira search response")?;

        // Only the first page is used.
        debug!("Jira returned {} issues (last page: {}).", result.issues.len(), result.next_page_token.is_none());

        result.issues.into_iter().map(Issue::try_from).collect()
    }
}

// Wire types.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<JiraIssue>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JiraIssue {
    key: String,
    fields: JiraFields,
}

#[derive(Debug, Deserialize)]
struct JiraFields {
    #[serde(default)]
    summary: String,
    created: String,
    assignee: Option<JiraUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraUser {
    display_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

impl TryFrom<JiraIssue> for Issue {
    type Error = anyhow::Error;

    fn try_from(issue: JiraIssue) -> Res<Self> {
        let created = parse_created(&issue.fields.created).with_context(|| format!("Issue {} has an unreadable creation time", issue.key))?;

        Ok(Issue {
            key: issue.key,
            summary: issue.fields.summary,
            created,
            assignee: issue.fields.assignee.map(|a| a.display_name),
        })
    }
}

/// Parse a Jira timestamp, falling back to RFC 3339.
fn parse_created(value: &str) -> Res<DateTime<Utc>> {
    let parsed = DateTime::parse_from_str(value, JIRA_TIME_FORMAT).or_else(|_| DateTime::parse_from_rfc3339(value))?;

    Ok(parsed.with_timezone(&Utc))
}

/// Pull the human-readable messages out of a Jira error body.
fn describe_error(body: &str) -> String {
    let parsed: JiraErrorBody = serde_json::from_str(body).unwrap_or_default();

    let messages: Vec<String> = parsed.error_messages.into_iter().chain(parsed.errors.into_iter().map(|(field, message)| format!("{field}: {message}"))).collect();

    if messages.is_empty() {
        body.trim().to_string()
    } else {
        messages.join("; ")
    }
}

// Tests.
