//! chatlink client library entry.
//!
//! This crate carries the stateful client-side pieces built on top of the
//! contracts in `chatlink-core`: the configuration store with derived
//! endpoint URLs, the method dispatcher fed by the transport's delivery
//! task, the built-in method handlers, and the typed outbound send path.
//! The socket itself and the REST plumbing live outside this crate.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod outbound;
pub mod services;
