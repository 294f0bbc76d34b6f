//! File-backed topology store
//!
//! One JSON document per project under a base directory. A save writes the
//! new document to a temporary file and renames it into place, so a reader
//! sees either the fully-old or fully-new document and an abandoned save
//! never commits a partial write.

use crate::topology_store::{require_project_id, TopologyStore};
use async_trait::async_trait;
use shared::{RangeError, Result, TopologyDocument};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

type SaveLock = Arc<tokio::sync::Mutex<()>>;

/// File-backed `TopologyStore` adapter.
#[derive(Debug, Clone)]
pub struct FileTopologyStore {
    base_dir: PathBuf,
    /// Per-project save serialization
    locks: Arc<RwLock<HashMap<String, SaveLock>>>,
}

impl FileTopologyStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            locks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The file holding a project's current document.
    pub fn document_path(&self, project_id: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.topology.json", encode_stem(project_id)))
    }

    fn save_lock(&self, project_id: &str) -> Result<SaveLock> {
        let mut locks = self
            .locks
            .write()
            .map_err(|_| RangeError::StoreUnavailable("lock map poisoned".to_string()))?;
        Ok(locks.entry(project_id.to_string()).or_default().clone())
    }

    async fn write_atomically(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        // The rename is the commit point
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

/// Encode a project id into a filename stem.
///
/// Path-hostile bytes are percent-encoded so distinct ids never collide and
/// an id like `../../etc` cannot escape the base directory.
fn encode_stem(project_id: &str) -> String {
    let mut stem = String::with_capacity(project_id.len());
    for byte in project_id.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => stem.push(byte as char),
            other => stem.push_str(&format!("%{:02x}", other)),
        }
    }
    stem
}

#[async_trait]
impl TopologyStore for FileTopologyStore {
    async fn save(&self, document: &TopologyDocument) -> Result<()> {
        document.validate()?;

        let lock = self.save_lock(&document.project_id)?;
        let _guard = lock.lock().await;

        let bytes = serde_json::to_vec_pretty(document)?;
        let path = self.document_path(&document.project_id);
        self.write_atomically(&path, &bytes).await?;
        debug!(project_id = %document.project_id, path = %path.display(), "topology persisted");
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Result<Option<TopologyDocument>> {
        require_project_id(project_id)?;

        let path = self.document_path(project_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
