//! Asset types

use crate::role::OwnerTeam;
use serde::{Deserialize, Serialize};

/// A simulated network resource inside an exercise.
///
/// An asset may reference a topology node but does not have to; free-standing
/// assets (credentials, flags, data stores) carry no `node_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique asset identifier
    pub id: String,

    /// Project this asset belongs to
    pub project_id: String,

    /// Topology node this asset lives on, if any
    #[serde(default)]
    pub node_id: Option<String>,

    /// Owning team. Immutable after creation; ownership transfer is a
    /// separate audited operation outside this core.
    pub owner: OwnerTeam,

    /// High-value/attack-worthy resource flag. Orthogonal to ownership.
    #[serde(default)]
    pub is_target: bool,

    /// Disabled assets are invisible to every role
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Human-readable asset name
    pub name: String,

    /// Network address, if the asset is addressable
    #[serde(default)]
    pub ip: Option<String>,

    /// Free-form operator notes
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Asset {
    /// Create an enabled asset with minimal configuration
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        name: impl Into<String>,
        owner: OwnerTeam,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            node_id: None,
            owner,
            is_target: false,
            enabled: true,
            name: name.into(),
            ip: None,
            notes: None,
        }
    }

    /// Builder: attach to a topology node
    pub fn on_node(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Builder: mark as a high-value target
    pub fn as_target(mut self) -> Self {
        self.is_target = true;
        self
    }

    /// Builder: set network address
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Builder: disable the asset
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Aggregate statistics over a role-filtered asset set.
///
/// Always computed after filtering; the counts must never include assets the
/// querying role cannot see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub count: usize,
    pub high_value_target_count: usize,
}

impl AssetStats {
    /// Count an already-filtered set of assets.
    pub fn of(visible: &[Asset]) -> Self {
        Self {
            count: visible.len(),
            high_value_target_count: visible.iter().filter(|a| a.is_target).count(),
        }
    }
}
