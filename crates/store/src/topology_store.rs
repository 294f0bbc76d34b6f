//! TopologyStore - abstract persistence for topology documents
//!
//! The trait defines what the core needs from durable storage; how documents
//! are kept (memory, files, a database) is an adapter concern.

use async_trait::async_trait;
use shared::{Result, TopologyDocument, ValidationError};

/// Storage port for topology documents.
///
/// Contract:
/// - `save` replaces any prior document for the same project wholesale after
///   validating it; a rejected document never mutates stored state.
/// - `load` returns `Ok(None)` for a project that was never saved. NotFound
///   is a normal result, not an error.
/// - Saves to one project are serialized; loads observe either the fully-old
///   or fully-new document, never a mix.
#[async_trait]
pub trait TopologyStore: Send + Sync {
    /// Validate and persist a document, replacing any prior version.
    async fn save(&self, document: &TopologyDocument) -> Result<()>;

    /// Fetch the current document for a project, if one was ever saved.
    async fn load(&self, project_id: &str) -> Result<Option<TopologyDocument>>;
}

/// Shared id check for `load` implementations.
pub(crate) fn require_project_id(project_id: &str) -> std::result::Result<(), ValidationError> {
    if project_id.trim().is_empty() {
        return Err(ValidationError::new("projectId", "must not be empty"));
    }
    Ok(())
}
