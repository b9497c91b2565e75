//! Persisted configuration shape and derived endpoint URLs.

use serde::{Deserialize, Serialize};

/// Host used until the user points the client somewhere else.
pub const DEFAULT_SERVER_HOST: &str = "chat.example.com";

/// Path of the streaming endpoint on the server.
pub const WEBSOCKET_PATH: &str = "/chat/websocket";

/// Client configuration, persisted as JSON.
///
/// Unknown keys are ignored on load and known keys default when absent, so
/// blobs written by other client versions stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_server_host")]
    pub server_host: String,

    #[serde(default = "default_encrypted_connection")]
    pub encrypted_connection: bool,

    /// Cached credentials, if the user chose to stay signed in.
    #[serde(default)]
    pub user: Option<UserCache>,
}

/// Cached sign-in material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCache {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: default_server_host(),
            encrypted_connection: default_encrypted_connection(),
            user: None,
        }
    }
}

impl AppConfig {
    /// REST base URL. Derived on every call, never cached, so a host or
    /// scheme change takes effect on the next request.
    pub fn rest_url(&self) -> String {
        let scheme = if self.encrypted_connection { "https" } else { "http" };
        format!("{scheme}://{}", self.server_host)
    }

    /// Streaming endpoint URL. Derived on every call, never cached.
    pub fn websocket_url(&self) -> String {
        let scheme = if self.encrypted_connection { "wss" } else { "ws" };
        format!("{scheme}://{}{WEBSOCKET_PATH}", self.server_host)
    }
}

fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.into()
}

fn default_encrypted_connection() -> bool {
    true
}
