//! RoleResolver - maps externally supplied identity data to a team role

use serde::{Deserialize, Serialize};
use shared::TeamRole;

/// Identity data delivered by the (out-of-scope) authentication layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Authenticated principal identifier
    pub id: String,

    /// Claimed team role, as recorded by the identity provider
    #[serde(default)]
    pub role: Option<String>,
}

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: None,
        }
    }

    /// Builder: set the claimed role string
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Resolves principals to team roles.
///
/// Resolution never fails: a missing, malformed or unrecognized role claim
/// yields `TeamRole::None`, which the engine treats as total denial.
#[derive(Debug, Clone, Default)]
pub struct RoleResolver;

impl RoleResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, principal: &Principal) -> TeamRole {
        principal
            .role
            .as_deref()
            .map(TeamRole::resolve)
            .unwrap_or(TeamRole::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_team_members() {
        let resolver = RoleResolver::new();
        assert_eq!(
            resolver.resolve(&Principal::new("u1").with_role("red")),
            TeamRole::Red
        );
        assert_eq!(
            resolver.resolve(&Principal::new("u2").with_role("Blue")),
            TeamRole::Blue
        );
    }

    #[test]
    fn test_missing_claim_resolves_to_none() {
        let resolver = RoleResolver::new();
        assert_eq!(resolver.resolve(&Principal::new("anon")), TeamRole::None);
    }

    #[test]
    fn test_unknown_claim_resolves_to_none() {
        let resolver = RoleResolver::new();
        for raw in ["judge", "admin", "root", "red,blue"] {
            let principal = Principal::new("u3").with_role(raw);
            assert_eq!(resolver.resolve(&principal), TeamRole::None);
        }
    }
}
