//! TeamRoster - role-scoped user listings and the safe projection

use shared::{RangeError, Result, TeamRole, TeamStats, User, UserBasic};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Filters the user directory by role.
///
/// Full records (including the online flag and anything else on `User`) are
/// only handed out team-internally; everything that crosses a team boundary
/// goes through the `UserBasic` projection, which carries no credentials.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register or replace a user record.
    pub fn insert(&self, user: User) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RangeError::StoreUnavailable("roster lock poisoned".to_string()))?;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Register multiple users.
    pub fn insert_all(&self, users: impl IntoIterator<Item = User>) -> Result<()> {
        for user in users {
            self.insert(user)?;
        }
        Ok(())
    }

    /// Full user records for one team, sorted by user id.
    ///
    /// Privileged: the core's guard only routes a caller here for its own
    /// team.
    pub fn users_by_role(&self, role: TeamRole) -> Result<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| RangeError::StoreUnavailable("roster lock poisoned".to_string()))?;
        let mut members: Vec<User> = users.values().filter(|u| u.role == role).cloned().collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(members)
    }

    /// Credential-free projections for any authenticated caller, optionally
    /// filtered by role. An unrecognized filter string is a validation
    /// error, not an empty result.
    pub fn users_basic(&self, role_filter: Option<&str>) -> Result<Vec<UserBasic>> {
        let filter = role_filter.map(TeamRole::parse).transpose()?;

        let users = self
            .users
            .read()
            .map_err(|_| RangeError::StoreUnavailable("roster lock poisoned".to_string()))?;
        let mut basics: Vec<UserBasic> = users
            .values()
            .filter(|u| filter.map_or(true, |role| u.role == role))
            .map(User::to_basic)
            .collect();
        basics.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(basics)
    }

    /// Member and online counts over the role-scoped list.
    pub fn team_stats(&self, role: TeamRole) -> Result<TeamStats> {
        let members = self.users_by_role(role)?;
        Ok(TeamStats::of(&members))
    }
}
