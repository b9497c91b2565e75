//! Configuration store tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use chatlink_core::error::{ChatlinkError, ErrorKind, Result};
use chatlink_client::config::{self, AppConfig, ConfigHandle, ConfigStorage, UserCache};

/// In-memory storage double; `fail_writes` simulates a broken medium.
#[derive(Default)]
struct MemStorage {
    blob: Mutex<Option<String>>,
    fail_writes: bool,
}

impl ConfigStorage for MemStorage {
    fn read(&self) -> Option<String> {
        self.blob.lock().unwrap().clone()
    }

    fn write(&self, json: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ChatlinkError::Storage("disk full".into()));
        }
        *self.blob.lock().unwrap() = Some(json.to_string());
        Ok(())
    }
}

#[test]
fn first_run_yields_defaults() {
    let cfg = config::load(&MemStorage::default());
    assert_eq!(cfg, AppConfig::default());
    assert!(cfg.encrypted_connection);
    assert!(cfg.user.is_none());
}

#[test]
fn corrupt_blob_yields_defaults() {
    let storage = MemStorage::default();
    *storage.blob.lock().unwrap() = Some("{not valid json".into());
    assert_eq!(config::load(&storage), AppConfig::default());
}

#[test]
fn unknown_keys_ignored_and_absent_keys_defaulted() {
    let storage = MemStorage::default();
    *storage.blob.lock().unwrap() =
        Some(r#"{"serverHost":"chat.internal","theme":"dark"}"#.into());

    let cfg = config::load(&storage);
    assert_eq!(cfg.server_host, "chat.internal");
    assert!(cfg.encrypted_connection); // defaulted
}

#[test]
fn derived_urls_follow_scheme_flag() {
    let cfg = AppConfig {
        server_host: "chat.example.com".into(),
        encrypted_connection: false,
        user: None,
    };
    assert_eq!(cfg.rest_url(), "http://chat.example.com");
    assert_eq!(cfg.websocket_url(), "ws://chat.example.com/chat/websocket");

    let secure = AppConfig {
        encrypted_connection: true,
        ..cfg
    };
    assert_eq!(secure.rest_url(), "https://chat.example.com");
    assert_eq!(secure.websocket_url(), "wss://chat.example.com/chat/websocket");
}

#[test]
fn save_then_load_round_trips() {
    let storage = MemStorage::default();
    let cfg = AppConfig {
        server_host: "chat.internal".into(),
        encrypted_connection: false,
        user: Some(UserCache {
            username: "ann".into(),
            password: "secret".into(),
            token: "tok".into(),
        }),
    };

    config::save(&storage, &cfg).unwrap();
    assert_eq!(config::load(&storage), cfg);
}

#[test]
fn handle_rederives_urls_after_update() {
    let handle = ConfigHandle::load(Arc::new(MemStorage::default()));
    let before = handle.websocket_url();
    assert!(before.starts_with("wss://"));

    handle
        .update(|c| {
            c.server_host = "chat.internal".into();
            c.encrypted_connection = false;
        })
        .unwrap();

    assert_eq!(handle.rest_url(), "http://chat.internal");
    assert_eq!(handle.websocket_url(), "ws://chat.internal/chat/websocket");
}

#[test]
fn persist_failure_keeps_in_memory_change() {
    let storage = Arc::new(MemStorage {
        blob: Mutex::new(None),
        fail_writes: true,
    });
    let handle = ConfigHandle::load(storage);

    let err = handle
        .update(|c| c.server_host = "chat.internal".into())
        .expect_err("write must fail");
    assert_eq!(err.kind(), ErrorKind::Storage);

    // The mutation still landed; configuration is a best-effort cache.
    assert_eq!(handle.snapshot().server_host, "chat.internal");
}
