//! In-memory topology store
//!
//! Thread-safe adapter with one lock per project: saves to the same project
//! serialize, unrelated projects proceed without contention.

use crate::topology_store::{require_project_id, TopologyStore};
use async_trait::async_trait;
use shared::{RangeError, Result, TopologyDocument};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

type Slot = Arc<tokio::sync::RwLock<Option<TopologyDocument>>>;

/// In-memory `TopologyStore` adapter.
///
/// The outer map lock is held only long enough to look up or create a
/// project's slot; document reads and writes happen under that slot's own
/// lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryTopologyStore {
    slots: Arc<RwLock<HashMap<String, Slot>>>,
}

impl MemoryTopologyStore {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn slot(&self, project_id: &str) -> Result<Slot> {
        {
            let slots = self
                .slots
                .read()
                .map_err(|_| RangeError::StoreUnavailable("slot map lock poisoned".to_string()))?;
            if let Some(slot) = slots.get(project_id) {
                return Ok(slot.clone());
            }
        }

        let mut slots = self
            .slots
            .write()
            .map_err(|_| RangeError::StoreUnavailable("slot map lock poisoned".to_string()))?;
        Ok(slots.entry(project_id.to_string()).or_default().clone())
    }

    /// Slot for reading: `None` when the project was never saved.
    fn existing_slot(&self, project_id: &str) -> Result<Option<Slot>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RangeError::StoreUnavailable("slot map lock poisoned".to_string()))?;
        Ok(slots.get(project_id).cloned())
    }
}

#[async_trait]
impl TopologyStore for MemoryTopologyStore {
    async fn save(&self, document: &TopologyDocument) -> Result<()> {
        document.validate()?;

        let slot = self.slot(&document.project_id)?;
        let mut guard = slot.write().await;
        *guard = Some(document.clone());
        debug!(
            project_id = %document.project_id,
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "topology saved"
        );
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Result<Option<TopologyDocument>> {
        require_project_id(project_id)?;

        let slot = match self.existing_slot(project_id)? {
            Some(slot) => slot,
            None => return Ok(None),
        };
        let guard = slot.read().await;
        Ok(guard.clone())
    }
}
