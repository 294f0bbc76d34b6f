//! Topology document model

use crate::error::ValidationError;
use crate::role::OwnerTeam;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A device in the exercise topology.
///
/// A node without an owning team is "structural" (routers, switches, shared
/// infrastructure) and is visible to every resolved role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique node identifier within the document
    pub id: String,

    /// Human-readable device name
    pub name: String,

    /// Free-form device type (e.g. 'server', 'firewall', 'router')
    #[serde(default)]
    pub kind: Option<String>,

    /// Owning team; `None` marks a structural node
    #[serde(default)]
    pub owner: Option<OwnerTeam>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: None,
            owner: None,
        }
    }

    /// Builder: set device type
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Builder: set owning team
    pub fn owned_by(mut self, owner: OwnerTeam) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Structural nodes carry no owner and are visible to both teams.
    pub fn is_structural(&self) -> bool {
        self.owner.is_none()
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Optional edge metadata (link type, bandwidth, ...)
    #[serde(default)]
    pub label: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    /// Builder: set metadata label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The full topology graph for one project.
///
/// The store owns documents exclusively; callers always receive clones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDocument {
    /// Externally assigned project identifier
    pub project_id: String,

    /// Nodes in document order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Edges in document order
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl TopologyDocument {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builder: append a node
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Builder: append an edge
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Validate the document before it may be persisted.
    ///
    /// Checks that the project id is non-empty and that every edge endpoint
    /// references a node id present in this document.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::new("projectId", "must not be empty"));
        }

        let node_ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [edge.source.as_str(), edge.target.as_str()] {
                if !node_ids.contains(endpoint) {
                    return Err(ValidationError::new(
                        "edges",
                        format!("edge endpoint '{}' references no node in the document", endpoint),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_doc() -> TopologyDocument {
        TopologyDocument::new("ex-1")
            .with_node(Node::new("n1", "core-router").with_kind("router"))
            .with_node(Node::new("n2", "red-jumpbox").owned_by(OwnerTeam::Red))
            .with_edge(Edge::new("n1", "n2"))
    }

    #[test]
    fn test_valid_document_passes() {
        assert!(valid_doc().validate().is_ok());
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let doc = TopologyDocument::new("  ");
        let err = doc.validate().unwrap_err();
        assert_eq!(err.field, "projectId");
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let doc = valid_doc().with_edge(Edge::new("n1", "ghost"));
        let err = doc.validate().unwrap_err();
        assert_eq!(err.field, "edges");
        assert!(err.message.contains("ghost"));
    }

    #[test]
    fn test_structural_node_detection() {
        let doc = valid_doc();
        assert!(doc.node("n1").unwrap().is_structural());
        assert!(!doc.node("n2").unwrap().is_structural());
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = valid_doc();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"projectId\":\"ex-1\""));
        let back: TopologyDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
