use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::value::RawValue;

use chatlink_core::error::Result;
use chatlink_core::protocol::{decode_response, WebsocketResponse};

/// Handler for one inbound method. Registered handlers decode the raw
/// payload into their method's declared shape themselves.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    fn method(&self) -> &'static str;
    async fn handle(&self, data: Option<&RawValue>) -> Result<()>;
}

/// Registry and dispatcher for inbound methods.
///
/// Stateless per frame and safe to call from the transport's delivery
/// task; frames for a single method keep their arrival order because each
/// dispatch completes before the loop pulls the next frame.
#[derive(Default)]
pub struct Dispatcher {
    handlers: DashMap<&'static str, Arc<dyn MethodHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    pub fn register(&self, handler: Arc<dyn MethodHandler>) {
        self.handlers.insert(handler.method(), handler);
    }

    pub fn registered_methods(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| *e.key()).collect()
    }

    /// Route an envelope by exact match on `method`.
    ///
    /// Returns `Ok(false)` for methods with no registered handler; the
    /// registry is open and a newer server emitting a method this build
    /// predates is not an error. A handler failure (typically
    /// `PayloadMismatch`) surfaces as `Err` and the frame is discarded.
    pub async fn dispatch(&self, env: &WebsocketResponse) -> Result<bool> {
        let Some(handler) = self.handlers.get(env.method.as_str()).map(|e| e.value().clone())
        else {
            tracing::debug!(method = %env.method, "no handler for method, skipping frame");
            return Ok(false);
        };
        handler.handle(env.data.as_deref()).await?;
        Ok(true)
    }

    /// Decode an inbound frame and dispatch it.
    ///
    /// A structurally invalid frame is logged and reported as
    /// `MalformedEnvelope`; the caller's receive loop drops it and keeps
    /// reading.
    pub async fn dispatch_frame(&self, bytes: &[u8]) -> Result<bool> {
        let env = match decode_response(bytes) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed inbound frame");
                return Err(e);
            }
        };
        self.dispatch(&env).await
    }
}
