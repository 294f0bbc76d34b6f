//! Participant types and the safe roster projection

use crate::role::TeamRole;
use serde::{Deserialize, Serialize};

/// A training participant.
///
/// `password_hash` is never serialized and never leaves the Team Roster
/// Service's safe-projection path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: String,

    /// Display/login name
    pub username: String,

    /// Resolved team affiliation
    pub role: TeamRole,

    /// Team the user belongs to, if assigned
    #[serde(default)]
    pub team_id: Option<String>,

    /// Online/active flag
    #[serde(default)]
    pub enabled: bool,

    /// Credential material. Write-only: accepted on deserialization, never
    /// emitted.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: TeamRole) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
            team_id: None,
            enabled: true,
            password_hash: None,
        }
    }

    /// Builder: set team membership
    pub fn in_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Builder: mark offline/inactive
    pub fn offline(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Builder: set credential material
    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    /// The credential-free projection safe to expose across team boundaries.
    pub fn to_basic(&self) -> UserBasic {
        UserBasic {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
            team_id: self.team_id.clone(),
            enabled: self.enabled,
        }
    }
}

/// Safe projection of a user record: identity and status, no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBasic {
    pub id: String,
    pub username: String,
    pub role: TeamRole,
    #[serde(default)]
    pub team_id: Option<String>,
    pub enabled: bool,
}

/// Aggregate statistics over a role-scoped user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_member_count: usize,
    pub online_members: usize,
}

impl TeamStats {
    /// Count an already role-scoped user list.
    pub fn of(members: &[User]) -> Self {
        Self {
            team_member_count: members.len(),
            online_members: members.iter().filter(|u| u.enabled).count(),
        }
    }
}
