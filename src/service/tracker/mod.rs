//! Issue tracker integration.
//!
//! Defines the `GenericTrackerClient` trait and the cloneable `TrackerClient`
//! handle, with a Jira REST implementation.

pub mod jira;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Issue, Res};

// Traits.

/// Generic "tracker" trait that clients must implement.
#[async_trait]
pub trait GenericTrackerClient: Send + Sync + 'static {
    /// Run a query and return the matching issues.
    ///
    /// Issues come back in the order the tracker returned them, with no
    /// pagination, filtering, or sorting applied on this side.
    async fn search(&self, jql: &str) -> Res<Vec<Issue>>;
}

// Structs.

/// Tracker client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TrackerClient {
    inner: Arc<dyn GenericTrackerClient>,
}

impl Deref for TrackerClient {
    type Target = dyn GenericTrackerClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl TrackerClient {
    pub fn new(inner: Arc<dyn GenericTrackerClient>) -> Self {
        Self { inner }
    }
}
