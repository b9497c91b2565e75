//! Scope-tagged permission model.
//!
//! Each permission token carries a fixed scope classification: valid
//! server-wide ("servlet"), inside one channel, or both. The tag is a
//! configuration table baked into `Permission::scope`, not runtime state.
//!
//! The check in [`has_capability`] exists to prevent the naive
//! "permission in role => allowed" bug: a channel-only token held by a
//! role must never authorize a servlet-scope action, and vice versa.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability tokens understood by the backend.
///
/// Wire form is SCREAMING_SNAKE_CASE (e.g. `"SEND_MESSAGE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // servlet admin rights
    Dashboard,
    ManageUser,
    ManageRoles,
    ManageFiles,
    RegisterInvite,

    // servlet admin & channel admin rights
    ManageChannel,
    DisbandChannel,
    KickUsers,

    // channel admin rights
    ProcessJoinRequest,

    // user permissions
    SendMessage,
    CreateChannel,
    JoinChannel,
    ViewChannel,
    SendChannelInvite,
    UploadFiles,
    DownloadFiles,
}

/// Where a permission token is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    /// Valid inside one channel only.
    Channel,
    /// Valid server-wide only.
    Servlet,
    /// Valid in both scopes.
    ChannelAndServlet,
}

impl Permission {
    /// Fixed scope classification per token. Never changes at runtime.
    pub const fn scope(self) -> PermissionScope {
        use PermissionScope::*;
        match self {
            Permission::Dashboard => Servlet,
            Permission::ManageUser => Servlet,
            Permission::ManageRoles => ChannelAndServlet,
            Permission::ManageFiles => ChannelAndServlet,
            Permission::RegisterInvite => Servlet,

            Permission::ManageChannel => ChannelAndServlet,
            Permission::DisbandChannel => ChannelAndServlet,
            // kick from channel, or deactivate the account server-wide
            Permission::KickUsers => ChannelAndServlet,

            Permission::ProcessJoinRequest => Channel,

            Permission::SendMessage => ChannelAndServlet,
            Permission::CreateChannel => Servlet,
            Permission::JoinChannel => Servlet,
            Permission::ViewChannel => Channel,
            Permission::SendChannelInvite => Channel,
            Permission::UploadFiles => ChannelAndServlet,
            Permission::DownloadFiles => ChannelAndServlet,
        }
    }
}

/// Named permission set assigned server-side; read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub permissions: BTreeSet<Permission>,
}

/// Per-channel membership view returned by the server: the nickname used in
/// that channel and the permissions effective there. Channel-to-role
/// assignment itself stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfInfo {
    pub nickname: String,
    pub permissions: BTreeSet<Permission>,
}

/// The scope of one concrete authorization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Action inside the given channel.
    Channel(i64),
    /// Server-wide action.
    Servlet,
}

impl AccessScope {
    /// Whether a token with the given classification applies in this scope.
    fn admits(self, scope: PermissionScope) -> bool {
        match (self, scope) {
            (_, PermissionScope::ChannelAndServlet) => true,
            (AccessScope::Channel(_), PermissionScope::Channel) => true,
            (AccessScope::Servlet, PermissionScope::Servlet) => true,
            _ => false,
        }
    }
}

/// Decide whether a set of held roles grants `permission` in `scope`.
///
/// Grants iff the token's own classification admits the requested scope AND
/// at least one role contains the token. Which roles apply (global roles or
/// the roles assigned within `scope`'s channel) is the caller's concern;
/// this function only enforces the scope mapping. Never errors: an
/// unauthorized action is simply `false`.
pub fn has_capability(roles: &[Role], permission: Permission, scope: AccessScope) -> bool {
    if !scope.admits(permission.scope()) {
        return false;
    }
    roles.iter().any(|r| r.permissions.contains(&permission))
}
