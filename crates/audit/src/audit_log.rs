//! AuditLog - bounded audit trail for RANGELAB operations

use serde::{Deserialize, Serialize};
use shared::TeamRole;
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    pub role: String,
    pub project_id: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audited events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    TopologySaved,
    TopologyLoaded,
    VisibilityQuery,
    RosterQuery,
    AccessDenied,
}

/// Bounded in-memory audit log. Oldest entries are evicted first.
#[derive(Debug)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Record an entry
    pub fn record(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Record a topology save
    pub fn record_save(&mut self, role: TeamRole, project_id: &str, success: bool) {
        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::TopologySaved,
            role: role.to_string(),
            project_id: Some(project_id.to_string()),
            success,
            reason: None,
        });
    }

    /// Record a topology load
    pub fn record_load(&mut self, role: TeamRole, project_id: &str, found: bool) {
        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::TopologyLoaded,
            role: role.to_string(),
            project_id: Some(project_id.to_string()),
            success: true,
            reason: (!found).then(|| "not found".to_string()),
        });
    }

    /// Record an asset visibility query
    pub fn record_visibility_query(&mut self, role: TeamRole, project_id: &str) {
        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::VisibilityQuery,
            role: role.to_string(),
            project_id: Some(project_id.to_string()),
            success: true,
            reason: None,
        });
    }

    /// Record a roster query
    pub fn record_roster_query(&mut self, role: TeamRole) {
        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::RosterQuery,
            role: role.to_string(),
            project_id: None,
            success: true,
            reason: None,
        });
    }

    /// Record an authorization denial
    pub fn record_denial(&mut self, role: TeamRole, reason: impl Into<String>) {
        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::AccessDenied,
            role: role.to_string(),
            project_id: None,
            success: false,
            reason: Some(reason.into()),
        });
    }

    /// Most recent entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Most recent denials, newest first
    pub fn recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    /// Aggregate counts over the retained window
    pub fn stats(&self) -> AuditStats {
        AuditStats {
            total: self.entries.len(),
            denials: self.entries.iter().filter(|e| !e.success).count(),
        }
    }
}

/// Aggregate audit statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStats {
    pub total: usize,
    pub denials: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_recall() {
        let mut log = AuditLog::new(16);
        log.record_save(TeamRole::Red, "ex-1", true);
        log.record_visibility_query(TeamRole::Blue, "ex-1");

        let recent = log.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].event_type, AuditEventType::VisibilityQuery);
    }

    #[test]
    fn test_bounded_eviction() {
        let mut log = AuditLog::new(3);
        for i in 0..5 {
            log.record_load(TeamRole::Red, &format!("ex-{}", i), true);
        }
        assert_eq!(log.stats().total, 3);
        let recent = log.recent(3);
        assert_eq!(recent[0].project_id.as_deref(), Some("ex-4"));
    }

    #[test]
    fn test_denials_tracked_separately() {
        let mut log = AuditLog::new(16);
        log.record_save(TeamRole::Red, "ex-1", true);
        log.record_denial(TeamRole::None, "unresolved role");
        log.record_denial(TeamRole::Red, "roster scoped to blue");

        assert_eq!(log.recent_denials(10).len(), 2);
        assert_eq!(log.stats().denials, 2);
    }
}
