//! Inbound/outbound `{method, data}` envelopes.
//!
//! Inbound payloads are stored as `RawValue` to enable lazy, per-method
//! parsing by the dispatcher; the envelope itself never fails on an
//! unknown method or a null payload.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{ChatlinkError, Result};

/// Known method discriminators. The registry is open; these are the methods
/// this build speaks, not an exhaustive list of what a server may emit.
pub mod methods {
    /// Inbound: a new message arrived. Payload: `ChatMessage`.
    pub const NEW_MESSAGE: &str = "nmsg";
    /// Outbound: send a message. Payload: `ChatMessageDto`.
    pub const SEND_MESSAGE: &str = "smsg";
}

/// Outbound envelope.
#[derive(Debug, Clone, Serialize)]
pub struct WebsocketRequest<T> {
    pub method: String,
    pub data: Option<T>,
}

impl<T: Serialize> WebsocketRequest<T> {
    pub fn new(method: impl Into<String>, data: T) -> Self {
        Self {
            method: method.into(),
            data: Some(data),
        }
    }

    /// Canonical JSON bytes of this envelope.
    pub fn encode(&self) -> Result<Bytes> {
        let v = serde_json::to_vec(self)
            .map_err(|e| ChatlinkError::Encoding(format!("request for {}: {e}", self.method)))?;
        Ok(Bytes::from(v))
    }
}

/// Inbound envelope. `data` stays raw until a handler decodes it into the
/// method's declared payload shape.
#[derive(Debug, Deserialize)]
pub struct WebsocketResponse {
    /// Method discriminator. May be a value this build does not recognize.
    pub method: String,
    /// Optional payload, stored as raw JSON (lazy parsing).
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl WebsocketResponse {
    /// Decode the payload into the method's declared shape.
    ///
    /// A missing/null payload or a shape failure is a `PayloadMismatch`;
    /// call this only after deciding the method requires a payload.
    pub fn payload<'a, T: Deserialize<'a>>(&'a self) -> Result<T> {
        let raw = self.data.as_deref().ok_or_else(|| ChatlinkError::PayloadMismatch {
            method: self.method.clone(),
            detail: "payload required but absent".into(),
        })?;
        serde_json::from_str(raw.get()).map_err(|e| ChatlinkError::PayloadMismatch {
            method: self.method.clone(),
            detail: e.to_string(),
        })
    }
}

// Borrowed form so encode_request never clones the payload.
#[derive(Serialize)]
struct RequestRef<'a, T> {
    method: &'a str,
    data: Option<&'a T>,
}

/// Encode `{method, data: payload}` as canonical JSON bytes.
///
/// Fails with `Encoding` when the payload contains non-serializable
/// structure; the caller learns this synchronously, before any send.
pub fn encode_request<T: Serialize>(method: &str, payload: &T) -> Result<Bytes> {
    let v = serde_json::to_vec(&RequestRef {
        method,
        data: Some(payload),
    })
    .map_err(|e| ChatlinkError::Encoding(format!("request for {method}: {e}")))?;
    Ok(Bytes::from(v))
}

/// Encode `{method, data: null}`.
pub fn encode_empty_request(method: &str) -> Result<Bytes> {
    let v = serde_json::to_vec(&RequestRef::<'_, ()> { method, data: None })
        .map_err(|e| ChatlinkError::Encoding(format!("request for {method}: {e}")))?;
    Ok(Bytes::from(v))
}

/// Parse an inbound frame into an envelope.
///
/// Fails with `MalformedEnvelope` when the frame is not a JSON object or
/// `method` is missing or not a string. An unrecognized `method` value or
/// an absent/null `data` is NOT an error: the dispatcher owns those
/// branches, since future servers may emit methods this build predates.
pub fn decode_response(bytes: &[u8]) -> Result<WebsocketResponse> {
    serde_json::from_slice(bytes)
        .map_err(|e| ChatlinkError::MalformedEnvelope(format!("invalid envelope json: {e}")))
}
