//! Core components and types for the notifier.
//!
//! This module contains the building blocks used throughout the application:
//! - Configuration handling (file, environment variables, flag overrides).
//! - The error taxonomy surfaced to the binary.
//! - Common types and result handling.

pub mod config;
pub mod error;
pub mod types;
