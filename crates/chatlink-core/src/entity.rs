//! Domain entities and their DTO input shapes.
//!
//! Wire form is camelCase JSON. Entities are immutable snapshots refreshed
//! wholesale on re-fetch; the DTOs are strict field subsets used at
//! creation/send time, with the remaining fields (ids, timestamps, sender,
//! member counts) assigned server-side. The client never synthesizes them.
//!
//! Unknown JSON keys are tolerated everywhere so newer servers stay
//! readable by older client builds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account snapshot. `roles` holds role names; resolve them against
/// [`crate::permission::Role`] sets fetched separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub avatar_hash: Option<String>,
    pub email: String,
    pub bio: Option<String>,
    pub register_time: i64,
    pub updated_time: i64,
    pub roles: Vec<String>,
}

/// Channel snapshot. Only `title`, `description` and `public_channel` may be
/// changed after creation, via the dedicated update DTOs below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub title: Option<String>,
    pub description: String,
    #[serde(default)]
    pub icon_hash: Option<String>,
    pub public_channel: bool,
    pub decentralized: bool,
    pub created_at: i64,
    pub member_count: i64,
}

/// Channel creation input. The server assigns id, creation time and the
/// member count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon_hash: Option<String>,
    #[serde(default)]
    pub public_channel: bool,
    #[serde(default)]
    pub decentralized: bool,
}

/// Denormalized sender snapshot embedded in each message. Not a live
/// `Account` reference: history stays stable across renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub id: i64,
    pub nickname: String,
    pub username: String,
}

/// Registry of known content-block types.
pub mod content {
    /// Plain text block; `data` is the string itself.
    pub const TEXT: &str = "t";
}

/// One tagged unit within a message's structured content sequence.
///
/// The type registry is open: `data` stays opaque JSON so blocks this build
/// does not recognize survive decode and re-encode unchanged instead of
/// failing or losing structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Value,
}

impl MessageContent {
    /// Plain text block.
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            kind: content::TEXT.into(),
            data: Value::String(s.into()),
        }
    }
}

/// A delivered chat message. The channel is embedded, not referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub channel: Channel,
    pub sender: Sender,
    pub short_content: String,
    pub content: Vec<MessageContent>,
    pub timestamp: i64,
}

/// Send-time input: the channel by id plus the content. Id, sender and
/// timestamp arrive back from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub channel: i64,
    pub short_content: String,
    pub content: Vec<MessageContent>,
}

/// Update the channel title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelTitle {
    pub title: String,
}

/// Update the channel description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelDescription {
    pub description: String,
}

/// Toggle public visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelVisible {
    pub visible: bool,
}

/// Update the caller's per-channel nickname.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelNickname {
    pub nickname: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorize {
    pub username: String,
    pub token: String,
    pub email: String,
    pub roles: Vec<crate::permission::Role>,
    pub expire: i64,
}

/// Server liveness/identity probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatus {
    pub server_name: String,
    pub timestamp: i64,
    #[serde(rename = "impl")]
    pub implementation: String,
    #[serde(default)]
    pub motd: Option<Motd>,
}

/// Message of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motd {
    pub title: String,
    pub text: String,
}

/// Registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInfo {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: String,
    pub bio: String,
    pub invite_code: Option<String>,
}

/// Deterministic display color for a nickname, stable across runs and
/// platforms. Mixes the name length the way the original client seeded its
/// RNG, then splitmix64 to spread the bits over RGB.
pub fn nickname_color(name: &str) -> u32 {
    let seed = (name.chars().count() as u64).wrapping_mul(1_234_567);
    let mut x = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^= x >> 31;

    let red = (x & 0xff) as u32;
    let green = ((x >> 8) & 0xff) as u32;
    let blue = ((x >> 16) & 0xff) as u32;
    (red << 16) | (green << 8) | blue
}
