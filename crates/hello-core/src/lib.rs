//! hello-metrics core: transport-agnostic payload types and the shared error type.
//!
//! This crate carries no HTTP or runtime dependencies so the greeting payload
//! and error codes can be reused by the server, its tests, and any client.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{HelloError, Result};
