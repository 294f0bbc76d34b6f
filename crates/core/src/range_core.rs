//! RangeCore - central orchestrator for team-scoped range operations

use audit::AuditLog;
use directory::{AssetDirectory, TeamRoster};
use shared::{
    AccessDeniedError, Asset, AssetStats, Result, TeamRole, TeamStats, TopologyDocument, User,
    UserBasic, ValidationError,
};
use std::sync::Mutex;
use std::time::Duration;
use store::{TimedStore, TopologyStore};
use tracing::{info, warn};
use visibility::{filter_for_role, FilteredView, Principal, RoleResolver};

/// RangeCore configuration
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Upper bound on any single persistence call
    pub store_timeout: Duration,
    /// Retained audit entries
    pub audit_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(5),
            audit_capacity: 1024,
        }
    }
}

/// The central orchestrator.
///
/// Every operation takes the caller's resolved role and runs the full
/// pipeline: guard, store, visibility filter, response shaping. A failure
/// anywhere discards the partial result and surfaces the error; no operation
/// ever returns partially-filtered data.
pub struct RangeCore<S> {
    store: TimedStore<S>,
    assets: AssetDirectory,
    roster: TeamRoster,
    resolver: RoleResolver,
    audit: Mutex<AuditLog>,
}

impl<S: TopologyStore> RangeCore<S> {
    pub fn new(store: S, config: CoreConfig) -> Self {
        Self {
            store: TimedStore::new(store, config.store_timeout),
            assets: AssetDirectory::new(),
            roster: TeamRoster::new(),
            resolver: RoleResolver::new(),
            audit: Mutex::new(AuditLog::new(config.audit_capacity)),
        }
    }

    /// The asset index, for exercise setup.
    pub fn assets(&self) -> &AssetDirectory {
        &self.assets
    }

    /// The user roster, for exercise setup.
    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    /// Resolve a principal delivered by the authentication boundary.
    pub fn resolve(&self, principal: &Principal) -> TeamRole {
        self.resolver.resolve(principal)
    }

    fn audit_log(&self) -> std::sync::MutexGuard<'_, AuditLog> {
        self.audit.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Explicit authorization guard: the caller must have resolved to
    /// exactly the role an operation is scoped to.
    ///
    /// The boundary layer is expected to have rejected mismatches already;
    /// this check is defense-in-depth and keeps the rule testable without
    /// any web-layer scaffolding.
    pub fn authorize(&self, caller: TeamRole, required: TeamRole) -> Result<()> {
        if caller.is_resolved() && caller == required {
            return Ok(());
        }
        let denied = AccessDeniedError {
            caller_role: caller.to_string(),
            required_role: required.to_string(),
        };
        warn!(caller = %caller, required = %required, "authorization denied");
        self.audit_log().record_denial(caller, denied.to_string());
        Err(denied.into())
    }

    fn require_resolved(&self, caller: TeamRole, operation: &str) -> Result<()> {
        if caller.is_resolved() {
            return Ok(());
        }
        self.audit_log()
            .record_denial(caller, format!("{} requires a team role", operation));
        Err(AccessDeniedError {
            caller_role: caller.to_string(),
            required_role: "red|blue".to_string(),
        }
        .into())
    }

    /// Validate and persist a topology document, replacing any prior
    /// version wholesale.
    pub async fn save_topology(&self, caller: TeamRole, document: &TopologyDocument) -> Result<()> {
        self.require_resolved(caller, "topology save")?;

        let result = self.store.save(document).await;
        self.audit_log()
            .record_save(caller, &document.project_id, result.is_ok());
        if result.is_ok() {
            info!(
                project_id = %document.project_id,
                nodes = document.nodes.len(),
                edges = document.edges.len(),
                "topology saved"
            );
        }
        result
    }

    /// The caller-scoped rendition of a project's topology.
    ///
    /// Returns `Ok(None)` both for a project that was never saved and for an
    /// unresolved caller: an unresolved role must not even learn whether a
    /// project exists.
    pub async fn load_topology(
        &self,
        caller: TeamRole,
        project_id: &str,
    ) -> Result<Option<TopologyDocument>> {
        let view = match self.topology_view(caller, project_id).await? {
            Some(view) => view,
            None => return Ok(None),
        };
        Ok(Some(TopologyDocument {
            project_id: project_id.to_string(),
            nodes: view.nodes,
            edges: view.edges,
        }))
    }

    /// The full filtered view (nodes, edges and assets) for one caller.
    pub async fn topology_view(
        &self,
        caller: TeamRole,
        project_id: &str,
    ) -> Result<Option<FilteredView>> {
        if project_id.trim().is_empty() {
            return Err(ValidationError::new("projectId", "must not be empty").into());
        }
        if !caller.is_resolved() {
            return Ok(None);
        }

        let document = match self.store.load(project_id).await? {
            Some(document) => document,
            None => {
                self.audit_log().record_load(caller, project_id, false);
                return Ok(None);
            }
        };
        let assets = self.assets.project_assets(project_id)?;
        let view = filter_for_role(&document, &assets, caller);
        self.audit_log().record_load(caller, project_id, true);
        Ok(Some(view))
    }

    /// Assets of a project visible to the caller, sorted by id.
    pub fn visible_assets(&self, caller: TeamRole, project_id: &str) -> Result<Vec<Asset>> {
        let visible = self.assets.visible_assets(project_id, caller)?;
        self.audit_log().record_visibility_query(caller, project_id);
        Ok(visible)
    }

    /// Statistics over the caller's visible asset set.
    pub fn asset_stats(&self, caller: TeamRole, project_id: &str) -> Result<AssetStats> {
        self.assets.stats(project_id, caller)
    }

    /// Full user records of one team. Guarded: only that team may ask.
    pub fn users_by_role(&self, caller: TeamRole, requested: TeamRole) -> Result<Vec<User>> {
        self.authorize(caller, requested)?;
        let members = self.roster.users_by_role(requested)?;
        self.audit_log().record_roster_query(caller);
        Ok(members)
    }

    /// Credential-free roster projection, available to any authenticated
    /// caller, optionally filtered by role string.
    pub fn users_basic(&self, caller: TeamRole, role_filter: Option<&str>) -> Result<Vec<UserBasic>> {
        let basics = self.roster.users_basic(role_filter)?;
        self.audit_log().record_roster_query(caller);
        Ok(basics)
    }

    /// Member/online counts for one team. Guarded like `users_by_role`.
    pub fn team_stats(&self, caller: TeamRole, requested: TeamRole) -> Result<TeamStats> {
        self.authorize(caller, requested)?;
        self.roster.team_stats(requested)
    }

    /// Recent audit entries, newest first.
    pub fn recent_audit(&self, limit: usize) -> Vec<audit::AuditEntry> {
        self.audit_log().recent(limit).into_iter().cloned().collect()
    }
}
