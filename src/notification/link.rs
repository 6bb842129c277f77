//! Slack mrkdwn links and the Jira URLs they point at.

use reqwest::Url;

use crate::base::types::Res;

/// A Slack mrkdwn link: `<url|text>`.
///
/// The visible text has Slack's control characters escaped so it cannot close
/// the link early.
pub fn slack_link(text: &str, url: &str) -> String {
    format!("<{}|{}>", url, escape_text(text))
}

/// Escape `&`, `<` and `>` the way Slack expects in message text.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Browse URL for a single issue: `<base>/browse/<key>`.
pub fn browse_issue_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}

/// Issue navigator URL for a query: `<base>/issues/?jql=<form-encoded jql>`.
pub fn browse_query_url(base_url: &str, jql: &str) -> Res<Url> {
    let url = Url::parse_with_params(&format!("{}/issues/", base_url.trim_end_matches('/')), &[("jql", jql)])?;

    Ok(url)
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.atlassian.net";

    fn decoded_jql(url: &Url) -> String {
        url.query_pairs().find(|(k, _)| k == "jql").map(|(_, v)| v.into_owned()).unwrap()
    }

    #[test]
    fn test_slack_link() {
        assert_eq!(slack_link("Fix login", "https://x/browse/A-1"), "<https://x/browse/A-1|Fix login>");
    }

    #[test]
    fn test_slack_link_escapes_text() {
        assert_eq!(slack_link("a < b & c > d", "https://x"), "<https://x|a &lt; b &amp; c &gt; d>");
    }

    #[test]
    fn test_browse_issue_url() {
        assert_eq!(browse_issue_url(BASE, "PROJ-42"), "https://example.atlassian.net/browse/PROJ-42");
        assert_eq!(browse_issue_url("https://example.atlassian.net/", "PROJ-42"), "https://example.atlassian.net/browse/PROJ-42");
    }

    #[test]
    fn test_browse_query_url_shape() {
        let url = browse_query_url(BASE, "project = X").unwrap();

        assert_eq!(url.as_str(), "https://example.atlassian.net/issues/?jql=project+%3D+X");
    }

    #[test]
    fn test_browse_query_url_round_trips() {
        let queries = [
            "project = X",
            "project = X AND status = \"In Progress\"",
            "summary ~ \"a&b=c\" ORDER BY created DESC",
            "assignee = \"Zoë Ångström\" AND labels = 日本語",
            "text ~ \"100% + done?\" #tag",
            "",
        ];

        for jql in queries {
            let url = browse_query_url(BASE, jql).unwrap();

            assert_eq!(decoded_jql(&url), jql);
            assert_eq!(url.path(), "/issues/");
        }
    }
}
