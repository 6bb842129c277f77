//! Turns a list of issues into the two chat messages that announce them.
//!
//! Everything in here is pure: "now" and the tracker base URL come in as
//! arguments, so the output is fully determined by the inputs.

pub mod age;
pub mod compose;
pub mod link;

pub use age::format_age;
pub use compose::Notification;
