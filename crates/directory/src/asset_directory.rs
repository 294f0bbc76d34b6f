//! AssetDirectory - per-project asset index with role-filtered queries

use shared::{Asset, AssetStats, RangeError, Result, TeamRole, ValidationError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Indexes assets by project and answers visibility-filtered queries.
///
/// Statistics are always computed over the already-filtered set; a count
/// must never reveal the existence of assets the querying role cannot see.
#[derive(Debug, Clone, Default)]
pub struct AssetDirectory {
    assets: Arc<RwLock<HashMap<String, Vec<Asset>>>>,
}

impl AssetDirectory {
    pub fn new() -> Self {
        Self {
            assets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an asset under its project.
    ///
    /// An asset with a known id replaces the previous record; ownership is
    /// immutable, so the replacement keeps the original owner.
    pub fn insert(&self, asset: Asset) -> Result<()> {
        let mut assets = self
            .assets
            .write()
            .map_err(|_| RangeError::StoreUnavailable("asset index lock poisoned".to_string()))?;
        let project = assets.entry(asset.project_id.clone()).or_default();
        match project.iter_mut().find(|a| a.id == asset.id) {
            Some(existing) => {
                let owner = existing.owner;
                *existing = asset;
                existing.owner = owner;
            }
            None => project.push(asset),
        }
        Ok(())
    }

    /// Register multiple assets.
    pub fn insert_all(&self, assets: impl IntoIterator<Item = Asset>) -> Result<()> {
        for asset in assets {
            self.insert(asset)?;
        }
        Ok(())
    }

    /// All assets of a project, unfiltered. For internal pipelines only;
    /// everything caller-facing goes through `visible_assets`.
    pub fn project_assets(&self, project_id: &str) -> Result<Vec<Asset>> {
        require_project_id(project_id)?;
        let assets = self
            .assets
            .read()
            .map_err(|_| RangeError::StoreUnavailable("asset index lock poisoned".to_string()))?;
        Ok(assets.get(project_id).cloned().unwrap_or_default())
    }

    /// Assets of a project visible to one role, sorted ascending by id.
    pub fn visible_assets(&self, project_id: &str, role: TeamRole) -> Result<Vec<Asset>> {
        let all = self.project_assets(project_id)?;
        let visible = visibility::visible_assets(&all, role);
        debug!(
            project_id,
            role = %role,
            visible = visible.len(),
            "asset visibility query"
        );
        Ok(visible)
    }

    /// Aggregate statistics over the role-filtered asset set.
    pub fn stats(&self, project_id: &str, role: TeamRole) -> Result<AssetStats> {
        let visible = self.visible_assets(project_id, role)?;
        Ok(AssetStats::of(&visible))
    }
}

fn require_project_id(project_id: &str) -> std::result::Result<(), ValidationError> {
    if project_id.trim().is_empty() {
        return Err(ValidationError::new("projectId", "must not be empty"));
    }
    Ok(())
}
