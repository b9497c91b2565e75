//! Typed outbound send path.
//!
//! The socket itself is an external collaborator behind [`Transport`]; this
//! module only turns typed payloads into encoded envelopes and hands them
//! over. Encoding failures are reported synchronously, before any I/O.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use chatlink_core::entity::ChatMessageDto;
use chatlink_core::error::Result;
use chatlink_core::protocol::{encode_request, methods};

/// Outbound frame sink owned by the connection layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, frame: Bytes) -> Result<()>;
}

/// Encodes typed requests and pushes them onto the transport.
#[derive(Clone)]
pub struct MessageSender {
    transport: Arc<dyn Transport>,
}

impl MessageSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a chat message (`smsg`).
    pub async fn send_chat_message(&self, message: &ChatMessageDto) -> Result<()> {
        let frame = encode_request(methods::SEND_MESSAGE, message)?;
        self.transport.send(frame).await
    }

    /// Send an arbitrary typed request. Useful for methods added to the
    /// registry after this build.
    pub async fn send_request<T: serde::Serialize + Sync>(
        &self,
        method: &str,
        payload: &T,
    ) -> Result<()> {
        let frame = encode_request(method, payload)?;
        self.transport.send(frame).await
    }
}
