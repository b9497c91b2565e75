//! Streaming message envelope protocol.
//!
//! Every frame exchanged over the persistent connection is a JSON envelope
//! `{"method": <string>, "data": <payload-or-null>}`. The method registry is
//! open: frames carrying methods this build does not know must decode
//! cleanly and be skippable, so newer servers never break older clients.
//!
//! All parsing is panic-free: malformed input is reported as
//! `ChatlinkError` instead of crashing the receive loop.

pub mod envelope;

pub use envelope::{
    decode_response, encode_empty_request, encode_request, methods, WebsocketRequest,
    WebsocketResponse,
};
