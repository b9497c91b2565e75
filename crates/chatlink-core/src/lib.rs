//! chatlink core: transport-agnostic contracts for the channel chat service.
//!
//! This crate defines the wire-level shapes shared by every consumer of the
//! service: the uniform REST result envelope, the scope-tagged permission
//! model, the entity/DTO data model, and the `{method, data}` streaming
//! envelope protocol. It intentionally carries no transport or runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ChatlinkError`/`Result` so a client
//! process never crashes on malformed server traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod entity;
pub mod error;
pub mod permission;
pub mod protocol;
pub mod rest;

/// Shared result type.
pub use error::{ChatlinkError, Result};
