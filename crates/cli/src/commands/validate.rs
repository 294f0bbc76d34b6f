//! rangelab validate command

use anyhow::Context;
use clap::Args;
use shared::TopologyDocument;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Topology document (JSON)
    pub topology: PathBuf,
}

impl ValidateCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let document = read_document(&self.topology)?;
        document
            .validate()
            .with_context(|| format!("{} failed validation", self.topology.display()))?;

        println!(
            "ok: project '{}' ({} nodes, {} edges)",
            document.project_id,
            document.nodes.len(),
            document.edges.len()
        );
        Ok(())
    }
}

pub(crate) fn read_document(path: &PathBuf) -> anyhow::Result<TopologyDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_valid_document_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "topo.json",
            r#"{"projectId":"ex-1","nodes":[{"id":"n1","name":"core"}],"edges":[]}"#,
        );
        assert!(ValidateCommand { topology: path }.run().is_ok());
    }

    #[test]
    fn test_dangling_edge_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "topo.json",
            r#"{"projectId":"ex-1","nodes":[],"edges":[{"source":"a","target":"b"}]}"#,
        );
        assert!(ValidateCommand { topology: path }.run().is_err());
    }
}
