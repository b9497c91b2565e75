//! Dispatcher and send-path integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};

use chatlink_core::entity::{ChatMessageDto, MessageContent};
use chatlink_core::error::{ErrorKind, Result};
use chatlink_client::dispatch::Dispatcher;
use chatlink_client::outbound::{MessageSender, Transport};
use chatlink_client::services::NewMessageService;

fn nmsg_frame() -> Vec<u8> {
    json!({
        "method": "nmsg",
        "data": {
            "id": 1,
            "channel": {
                "id": 42,
                "name": "general",
                "title": null,
                "description": "everyone",
                "publicChannel": true,
                "decentralized": false,
                "createdAt": 500,
                "memberCount": 10
            },
            "sender": {"id": 5, "nickname": "Ann", "username": "ann"},
            "shortContent": "hi",
            "content": [{"type": "t", "data": "hi"}],
            "timestamp": 1000
        }
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn nmsg_reaches_registered_handler() {
    let dispatcher = Dispatcher::new();
    let (svc, mut rx) = NewMessageService::new();
    dispatcher.register(Arc::new(svc));

    let handled = dispatcher.dispatch_frame(&nmsg_frame()).await.unwrap();
    assert!(handled);

    let msg = rx.recv().await.unwrap();
    assert_eq!(msg.short_content, "hi");
    assert_eq!(msg.sender.id, 5);
    assert_eq!(msg.timestamp, 1000);
}

#[tokio::test]
async fn per_method_order_is_preserved() {
    let dispatcher = Dispatcher::new();
    let (svc, mut rx) = NewMessageService::new();
    dispatcher.register(Arc::new(svc));

    for i in 0..3i64 {
        let mut v: Value = serde_json::from_slice(&nmsg_frame()).unwrap();
        v["data"]["id"] = json!(i);
        dispatcher
            .dispatch_frame(v.to_string().as_bytes())
            .await
            .unwrap();
    }

    for i in 0..3i64 {
        assert_eq!(rx.recv().await.unwrap().id, i);
    }
}

#[tokio::test]
async fn unknown_method_is_skipped_not_an_error() {
    let dispatcher = Dispatcher::new();
    let (svc, _rx) = NewMessageService::new();
    dispatcher.register(Arc::new(svc));

    let handled = dispatcher
        .dispatch_frame(br#"{"method":"presence","data":{"online":true}}"#)
        .await
        .unwrap();
    assert!(!handled);
}

#[tokio::test]
async fn malformed_frame_is_reported_not_fatal() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let dispatcher = Dispatcher::new();

    let err = dispatcher
        .dispatch_frame(b"{\"data\":1}")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::MalformedEnvelope);

    // The dispatcher stays usable afterwards.
    let handled = dispatcher
        .dispatch_frame(br#"{"method":"whatever"}"#)
        .await
        .unwrap();
    assert!(!handled);
}

#[tokio::test]
async fn bad_payload_surfaces_mismatch() {
    let dispatcher = Dispatcher::new();
    let (svc, _rx) = NewMessageService::new();
    dispatcher.register(Arc::new(svc));

    let err = dispatcher
        .dispatch_frame(br#"{"method":"nmsg","data":{"id":"nope"}}"#)
        .await
        .expect_err("shape must not match");
    assert_eq!(err.kind(), ErrorKind::PayloadMismatch);

    let err = dispatcher
        .dispatch_frame(br#"{"method":"nmsg","data":null}"#)
        .await
        .expect_err("nmsg requires a payload");
    assert_eq!(err.kind(), ErrorKind::PayloadMismatch);
}

#[derive(Default)]
struct RecordingTransport {
    frames: Mutex<Vec<Bytes>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, frame: Bytes) -> Result<()> {
        self.frames.lock().unwrap().push(frame);
        Ok(())
    }
}

#[tokio::test]
async fn send_chat_message_emits_smsg_envelope() {
    let transport = Arc::new(RecordingTransport::default());
    let sender = MessageSender::new(transport.clone());

    let dto = ChatMessageDto {
        channel: 42,
        short_content: "hi".into(),
        content: vec![MessageContent::text("hi")],
    };
    sender.send_chat_message(&dto).await.unwrap();

    let frames = transport.frames.lock().unwrap();
    let v: Value = serde_json::from_slice(&frames[0]).unwrap();
    assert_eq!(v["method"], "smsg");
    assert_eq!(v["data"]["channel"], 42);
    assert_eq!(v["data"]["content"][0]["type"], "t");
}
