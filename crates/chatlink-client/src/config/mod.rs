//! Configuration store.
//!
//! The storage medium is an external collaborator behind [`ConfigStorage`];
//! this module owns the JSON shape, the first-run defaults, and the shared
//! handle that serializes writes against the reads happening on every
//! outbound request.

pub mod schema;

use std::sync::{Arc, RwLock};

use chatlink_core::error::{ChatlinkError, Result};

pub use schema::{AppConfig, UserCache, DEFAULT_SERVER_HOST};

/// Opaque key-value blob store for the persisted configuration. The real
/// medium (file, preferences API, browser storage) lives with the platform.
pub trait ConfigStorage: Send + Sync {
    /// Read the stored blob. `None` means nothing was ever stored.
    fn read(&self) -> Option<String>;
    /// Replace the stored blob.
    fn write(&self, json: &str) -> Result<()>;
}

/// Load configuration, falling back to defaults.
///
/// Missing storage is the normal first run; a corrupt blob is logged and
/// also yields the default. This never fails: startup must succeed.
pub fn load(storage: &dyn ConfigStorage) -> AppConfig {
    let Some(blob) = storage.read() else {
        return AppConfig::default();
    };
    match serde_json::from_str(&blob) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "stored configuration unreadable, using defaults");
            AppConfig::default()
        }
    }
}

/// Persist configuration as canonical JSON.
///
/// Best effort: a storage failure is returned to the caller so it can be
/// surfaced, but the in-memory configuration stays authoritative and the
/// process keeps running.
pub fn save(storage: &dyn ConfigStorage, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string(config)
        .map_err(|e| ChatlinkError::Storage(format!("serialize config: {e}")))?;
    storage.write(&json)
}

/// Shared configuration handle (single writer, many readers).
///
/// Reads happen on every outbound request to derive URLs; writes come from
/// user-facing settings changes and are written back to storage as they
/// land. Construct once at startup, then share via `Arc`/clone.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppConfig>>,
    storage: Arc<dyn ConfigStorage>,
}

impl ConfigHandle {
    /// Load from storage (or defaults) and wrap.
    pub fn load(storage: Arc<dyn ConfigStorage>) -> Self {
        let cfg = load(storage.as_ref());
        Self {
            inner: Arc::new(RwLock::new(cfg)),
            storage,
        }
    }

    /// Current configuration snapshot.
    pub fn snapshot(&self) -> AppConfig {
        self.read_guard().clone()
    }

    /// Mutate the configuration and write it back to storage.
    ///
    /// The mutation always lands in memory; only the persistence step can
    /// fail, and that failure is reported without undoing the change.
    pub fn update(&self, f: impl FnOnce(&mut AppConfig)) -> Result<()> {
        let snapshot = {
            // Poisoned lock means a writer panicked mid-update; the data is
            // still the last coherent value, so keep serving it.
            let mut guard = match self.inner.write() {
                Ok(g) => g,
                Err(e) => e.into_inner(),
            };
            f(&mut guard);
            guard.clone()
        };
        let result = save(self.storage.as_ref(), &snapshot);
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "configuration persist failed, in-memory value kept");
        }
        result
    }

    /// REST base URL, re-derived from the current host and scheme flag.
    pub fn rest_url(&self) -> String {
        self.read_guard().rest_url()
    }

    /// Streaming endpoint URL, re-derived from the current host and scheme
    /// flag.
    pub fn websocket_url(&self) -> String {
        self.read_guard().websocket_url()
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, AppConfig> {
        match self.inner.read() {
            Ok(g) => g,
            Err(e) => e.into_inner(),
        }
    }
}
