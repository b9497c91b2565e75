//! Shared error type across chatlink crates.

use thiserror::Error;

/// Stable error codes exposed to callers and logs (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inbound frame is structurally invalid.
    MalformedEnvelope,
    /// Recognized method, payload fails shape validation.
    PayloadMismatch,
    /// Outbound payload could not be serialized.
    Encoding,
    /// Configuration persistence failed.
    Storage,
    /// REST call returned a non-success envelope.
    Rest,
    /// Transport collaborator failed to deliver a frame.
    Transport,
}

impl ErrorKind {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorKind::PayloadMismatch => "PAYLOAD_MISMATCH",
            ErrorKind::Encoding => "ENCODING",
            ErrorKind::Storage => "STORAGE",
            ErrorKind::Rest => "REST",
            ErrorKind::Transport => "TRANSPORT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChatlinkError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum ChatlinkError {
    /// The inbound frame is not a JSON object or lacks a string `method`.
    /// The receive loop drops the frame and keeps running.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The method was recognized but its payload does not match the
    /// declared shape. Surfaced to the caller; the message is discarded.
    #[error("payload mismatch for method {method}: {detail}")]
    PayloadMismatch { method: String, detail: String },

    /// The outbound payload could not be serialized; rejected before send.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// Persisting configuration failed. The in-memory configuration stays
    /// authoritative; never fatal.
    #[error("storage failed: {0}")]
    Storage(String),

    /// A REST result envelope carried a non-success code or no data.
    #[error("rest call failed ({code}): {message}")]
    Rest { code: i32, message: String },

    /// The transport collaborator rejected an outbound frame.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ChatlinkError {
    /// Map to the stable code for logging and assertions.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatlinkError::MalformedEnvelope(_) => ErrorKind::MalformedEnvelope,
            ChatlinkError::PayloadMismatch { .. } => ErrorKind::PayloadMismatch,
            ChatlinkError::Encoding(_) => ErrorKind::Encoding,
            ChatlinkError::Storage(_) => ErrorKind::Storage,
            ChatlinkError::Rest { .. } => ErrorKind::Rest,
            ChatlinkError::Transport(_) => ErrorKind::Transport,
        }
    }
}
