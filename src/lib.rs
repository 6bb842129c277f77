//! Library root for `jira-notifier`.
//!
//! Jira-notifier runs a saved JQL query against Jira and, when anything
//! matches, posts to a Slack channel:
//! - A summary message with the issue count, linking to the query in Jira
//! - A threaded reply listing each issue's age, assignee, and summary
//!
//! Each run is a single pass with no state kept between runs. The tracker and
//! chat services sit behind traits so the runtime can be driven by mocks.

#[deny(missing_docs)]
pub mod base;
pub mod notification;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use chrono::{DateTime, Utc};
use runtime::{RunOutcome, Runtime};
use rustls::crypto;
use tracing::{error, info};

/// Public async entry for the binary crate.
///
/// Sets up necessary services and performs one notification pass:
/// - Initializes the crypto provider
/// - Creates the runtime context with tracker and chat clients
/// - Runs the query and posts the results
pub async fn start(config: Config) -> Void {
    info!("Starting jira-notifier ...");

    // Start the crypto provider. An already installed provider is fine.
    let _ = crypto::ring::default_provider().install_default();

    // Initialize the runtime.
    let runtime = Runtime::new(config)?;

    // Run once.
    notify(&runtime, Utc::now()).await
}

/// Run one pass of `runtime` and settle its outcome.
///
/// A rejected thread reply is logged and does not fail the run; every other
/// failure is returned.
pub async fn notify(runtime: &Runtime, now: DateTime<Utc>) -> Void {
    match runtime.run(now).await? {
        RunOutcome::NoIssues => {}
        RunOutcome::Posted { reply_error: Some(e), .. } => {
            error!("{}", e);
        }
        RunOutcome::Posted { issue_count, .. } => {
            info!("Posted {} issues.", issue_count);
        }
    }

    Ok(())
}
