use async_trait::async_trait;
use serde_json::value::RawValue;
use tokio::sync::mpsc;

use chatlink_core::entity::ChatMessage;
use chatlink_core::error::{ChatlinkError, Result};
use chatlink_core::protocol::methods;

use crate::dispatch::MethodHandler;

/// Handles `nmsg`: decodes the payload into a [`ChatMessage`] and forwards
/// it into an unbounded channel for whoever renders or stores history.
pub struct NewMessageService {
    sink: mpsc::UnboundedSender<ChatMessage>,
}

impl NewMessageService {
    /// Returns the service plus the receiving end of the message stream.
    /// Per-method FIFO order from the wire is preserved through the channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ChatMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sink: tx }, rx)
    }

    /// Attach to an existing sink instead of creating one.
    pub fn with_sink(sink: mpsc::UnboundedSender<ChatMessage>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl MethodHandler for NewMessageService {
    fn method(&self) -> &'static str {
        methods::NEW_MESSAGE
    }

    async fn handle(&self, data: Option<&RawValue>) -> Result<()> {
        let raw = data.ok_or_else(|| ChatlinkError::PayloadMismatch {
            method: methods::NEW_MESSAGE.into(),
            detail: "nmsg requires a ChatMessage payload".into(),
        })?;

        let msg: ChatMessage =
            serde_json::from_str(raw.get()).map_err(|e| ChatlinkError::PayloadMismatch {
                method: methods::NEW_MESSAGE.into(),
                detail: e.to_string(),
            })?;

        // A dropped receiver is a consumer lifecycle event, not a protocol
        // error; the message is discarded.
        if self.sink.send(msg).is_err() {
            tracing::warn!("new-message receiver dropped, discarding message");
        }
        Ok(())
    }
}
