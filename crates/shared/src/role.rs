//! Team role and asset ownership types

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Resolved team affiliation of a principal.
///
/// `None` covers unauthenticated callers, unaffiliated users and any role
/// string the platform does not recognize. A `None` caller is denied all
/// topology information rather than rejected with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Red,
    Blue,
    None,
}

impl TeamRole {
    /// Leniently resolve an externally supplied role string.
    ///
    /// Unknown or malformed strings collapse to `None` so that an unresolved
    /// principal can never observe topology data.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "red" => TeamRole::Red,
            "blue" => TeamRole::Blue,
            _ => TeamRole::None,
        }
    }

    /// Strictly parse a role string, rejecting anything unrecognized.
    ///
    /// Used for explicit role filters where a typo should surface as a
    /// validation failure instead of silently matching nothing.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(TeamRole::Red),
            "blue" => Ok(TeamRole::Blue),
            "none" => Ok(TeamRole::None),
            other => Err(ValidationError::new(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Red => "red",
            TeamRole::Blue => "blue",
            TeamRole::None => "none",
        }
    }

    /// Whether the principal resolved to an actual team.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, TeamRole::None)
    }

    /// The ownership marker this role's own assets carry, if any.
    pub fn as_owner(&self) -> Option<OwnerTeam> {
        match self {
            TeamRole::Red => Some(OwnerTeam::Red),
            TeamRole::Blue => Some(OwnerTeam::Blue),
            TeamRole::None => None,
        }
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which team owns an asset or node.
///
/// `Shared` marks explicitly shared "target" infrastructure visible to both
/// teams regardless of role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerTeam {
    Red,
    Blue,
    Shared,
}

impl OwnerTeam {
    /// The information-separation rule: a role sees its own team's resources
    /// plus anything explicitly shared. Nothing is visible to `None`.
    pub fn visible_to(&self, role: TeamRole) -> bool {
        match role {
            TeamRole::None => false,
            _ => *self == OwnerTeam::Shared || Some(*self) == role.as_owner(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerTeam::Red => "red",
            OwnerTeam::Blue => "blue",
            OwnerTeam::Shared => "shared",
        }
    }
}

impl std::fmt::Display for OwnerTeam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_roles() {
        assert_eq!(TeamRole::resolve("red"), TeamRole::Red);
        assert_eq!(TeamRole::resolve("Blue"), TeamRole::Blue);
        assert_eq!(TeamRole::resolve(" RED "), TeamRole::Red);
    }

    #[test]
    fn test_resolve_unknown_collapses_to_none() {
        assert_eq!(TeamRole::resolve("judge"), TeamRole::None);
        assert_eq!(TeamRole::resolve("admin"), TeamRole::None);
        assert_eq!(TeamRole::resolve(""), TeamRole::None);
        assert_eq!(TeamRole::resolve("red; drop"), TeamRole::None);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(TeamRole::parse("purple").is_err());
        assert_eq!(TeamRole::parse("none").unwrap(), TeamRole::None);
        assert_eq!(TeamRole::parse("blue").unwrap(), TeamRole::Blue);
    }

    #[test]
    fn test_visibility_rule() {
        assert!(OwnerTeam::Red.visible_to(TeamRole::Red));
        assert!(!OwnerTeam::Red.visible_to(TeamRole::Blue));
        assert!(OwnerTeam::Shared.visible_to(TeamRole::Red));
        assert!(OwnerTeam::Shared.visible_to(TeamRole::Blue));
        assert!(!OwnerTeam::Shared.visible_to(TeamRole::None));
        assert!(!OwnerTeam::Blue.visible_to(TeamRole::None));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TeamRole::Red).unwrap(), "\"red\"");
        assert_eq!(
            serde_json::to_string(&OwnerTeam::Shared).unwrap(),
            "\"shared\""
        );
        let role: TeamRole = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(role, TeamRole::Blue);
    }
}
