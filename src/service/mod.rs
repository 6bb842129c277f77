//! Service integrations for external APIs and clients.
//!
//! This module contains the two services the notifier talks to:
//! - The issue tracker (e.g., Jira)
//! - The chat service (e.g., Slack)
//!
//! Each service module defines both a generic trait and a concrete implementation,
//! so the runtime can be exercised against mocks.

pub mod chat;
pub mod tracker;
