//! Visibility engine - role-scoped filtering of topology documents

use serde::{Deserialize, Serialize};
use shared::{Asset, Edge, Node, TeamRole, TopologyDocument};
use std::collections::HashSet;

/// The subset of a topology one role is permitted to observe.
///
/// Assets are sorted ascending by id so repeated queries are reproducible;
/// nodes and edges keep document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredView {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub assets: Vec<Asset>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.assets.is_empty()
    }
}

/// Apply the visibility rule to a set of assets.
///
/// An asset is visible iff it is enabled and owned by the querying role's
/// team or explicitly shared. The result is sorted ascending by asset id.
pub fn visible_assets(assets: &[Asset], role: TeamRole) -> Vec<Asset> {
    let mut visible: Vec<Asset> = assets
        .iter()
        .filter(|a| a.enabled && a.owner.visible_to(role))
        .cloned()
        .collect();
    visible.sort_by(|a, b| a.id.cmp(&b.id));
    visible
}

/// Compute the filtered view of a topology document for one role.
///
/// 1. Assets are filtered by the ownership rule.
/// 2. A node is visible if it is structural (no owning team) or referenced
///    by a visible asset.
/// 3. An edge is visible iff both endpoints are visible nodes, so a
///    surviving edge can never leak the existence of a hidden node.
///
/// An unresolved role sees nothing at all.
pub fn filter_for_role(document: &TopologyDocument, assets: &[Asset], role: TeamRole) -> FilteredView {
    if !role.is_resolved() {
        return FilteredView::default();
    }

    let assets = visible_assets(assets, role);

    let mut visible_ids: HashSet<&str> = document
        .nodes
        .iter()
        .filter(|n| n.is_structural())
        .map(|n| n.id.as_str())
        .collect();
    for asset in &assets {
        if let Some(node_id) = &asset.node_id {
            // Only ids actually present in the document become visible
            if document.node(node_id).is_some() {
                visible_ids.insert(node_id.as_str());
            }
        }
    }

    let nodes: Vec<Node> = document
        .nodes
        .iter()
        .filter(|n| visible_ids.contains(n.id.as_str()))
        .cloned()
        .collect();

    let edges: Vec<Edge> = document
        .edges
        .iter()
        .filter(|e| {
            visible_ids.contains(e.source.as_str()) && visible_ids.contains(e.target.as_str())
        })
        .cloned()
        .collect();

    FilteredView { nodes, edges, assets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OwnerTeam;

    /// The exercise from the acceptance scenario: one structural core node,
    /// one red-owned and one blue-owned host, an asset on each host.
    fn scenario() -> (TopologyDocument, Vec<Asset>) {
        let doc = TopologyDocument::new("ex-1")
            .with_node(Node::new("n1", "core-switch").with_kind("switch"))
            .with_node(Node::new("n2", "red-host").owned_by(OwnerTeam::Red))
            .with_node(Node::new("n3", "blue-host").owned_by(OwnerTeam::Blue))
            .with_edge(Edge::new("n1", "n2"))
            .with_edge(Edge::new("n1", "n3"));

        let assets = vec![
            Asset::new("a1", "ex-1", "red-c2", OwnerTeam::Red)
                .on_node("n2")
                .as_target(),
            Asset::new("a2", "ex-1", "blue-siem", OwnerTeam::Blue).on_node("n3"),
        ];

        (doc, assets)
    }

    fn node_ids(view: &FilteredView) -> Vec<&str> {
        view.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_red_view_of_scenario() {
        let (doc, assets) = scenario();
        let view = filter_for_role(&doc, &assets, TeamRole::Red);

        assert_eq!(node_ids(&view), vec!["n1", "n2"]);
        assert_eq!(view.assets.len(), 1);
        assert_eq!(view.assets[0].id, "a1");
        assert_eq!(view.edges.len(), 1);
        assert_eq!(view.edges[0].source, "n1");
        assert_eq!(view.edges[0].target, "n2");
    }

    #[test]
    fn test_blue_view_of_scenario() {
        let (doc, assets) = scenario();
        let view = filter_for_role(&doc, &assets, TeamRole::Blue);

        assert_eq!(node_ids(&view), vec!["n1", "n3"]);
        assert_eq!(view.assets.len(), 1);
        assert_eq!(view.assets[0].id, "a2");
        assert_eq!(view.edges.len(), 1);
        assert_eq!(view.edges[0].target, "n3");
    }

    #[test]
    fn test_total_denial_for_none() {
        let (doc, assets) = scenario();
        let view = filter_for_role(&doc, &assets, TeamRole::None);
        assert!(view.is_empty());
    }

    #[test]
    fn test_total_denial_for_unrecognized_role_string() {
        let (doc, assets) = scenario();
        for raw in ["judge", "admin", "RED TEAM", ""] {
            let view = filter_for_role(&doc, &assets, TeamRole::resolve(raw));
            assert!(view.is_empty(), "role string '{}' must see nothing", raw);
        }
    }

    #[test]
    fn test_shared_assets_visible_to_both_teams() {
        let (doc, mut assets) = scenario();
        assets.push(
            Asset::new("a0", "ex-1", "dmz-webserver", OwnerTeam::Shared)
                .on_node("n1")
                .as_target(),
        );

        for role in [TeamRole::Red, TeamRole::Blue] {
            let view = filter_for_role(&doc, &assets, role);
            assert!(view.assets.iter().any(|a| a.id == "a0"));
        }
    }

    #[test]
    fn test_assets_sorted_by_id() {
        let (doc, _) = scenario();
        let assets = vec![
            Asset::new("z9", "ex-1", "late", OwnerTeam::Red),
            Asset::new("a1", "ex-1", "early", OwnerTeam::Red),
            Asset::new("m5", "ex-1", "middle", OwnerTeam::Shared),
        ];
        let view = filter_for_role(&doc, &assets, TeamRole::Red);
        let ids: Vec<&str> = view.assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "m5", "z9"]);
    }

    #[test]
    fn test_disabled_asset_invisible_to_owner() {
        let (doc, mut assets) = scenario();
        assets.push(Asset::new("a9", "ex-1", "retired-host", OwnerTeam::Red).disabled());

        let view = filter_for_role(&doc, &assets, TeamRole::Red);
        assert!(view.assets.iter().all(|a| a.id != "a9"));
    }

    #[test]
    fn test_asset_referencing_unknown_node_adds_no_node() {
        let (doc, mut assets) = scenario();
        assets.push(Asset::new("a7", "ex-1", "phantom", OwnerTeam::Red).on_node("ghost"));

        let view = filter_for_role(&doc, &assets, TeamRole::Red);
        // The asset itself is visible; the unknown reference adds nothing
        assert!(view.assets.iter().any(|a| a.id == "a7"));
        assert!(!node_ids(&view).contains(&"ghost"));
    }

    #[test]
    fn test_deterministic_across_repeated_queries() {
        let (doc, assets) = scenario();
        let first = filter_for_role(&doc, &assets, TeamRole::Blue);
        let second = filter_for_role(&doc, &assets, TeamRole::Blue);
        assert_eq!(first, second);
    }

    // Information-separation properties under adversarial input
    mod red_team {
        use super::*;

        #[test]
        fn containment_holds_for_every_role() {
            let (doc, assets) = scenario();
            for role in [TeamRole::Red, TeamRole::Blue] {
                let view = filter_for_role(&doc, &assets, role);
                for asset in &view.assets {
                    assert!(
                        Some(asset.owner) == role.as_owner() || asset.owner == OwnerTeam::Shared,
                        "asset '{}' leaked to role '{}'",
                        asset.id,
                        role
                    );
                }
            }
        }

        #[test]
        fn no_dangling_edges_for_every_role() {
            let (doc, assets) = scenario();
            for role in [TeamRole::Red, TeamRole::Blue, TeamRole::None] {
                let view = filter_for_role(&doc, &assets, role);
                let ids: HashSet<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
                for edge in &view.edges {
                    assert!(ids.contains(edge.source.as_str()));
                    assert!(ids.contains(edge.target.as_str()));
                }
            }
        }

        #[test]
        fn opposing_team_host_never_leaks_via_edges() {
            // A direct red-blue link must vanish from both teams' views
            // because one endpoint is always hidden.
            let doc = TopologyDocument::new("ex-2")
                .with_node(Node::new("r1", "red-host").owned_by(OwnerTeam::Red))
                .with_node(Node::new("b1", "blue-host").owned_by(OwnerTeam::Blue))
                .with_edge(Edge::new("r1", "b1"));
            let assets = vec![
                Asset::new("a1", "ex-2", "red-impl", OwnerTeam::Red).on_node("r1"),
                Asset::new("a2", "ex-2", "blue-edr", OwnerTeam::Blue).on_node("b1"),
            ];

            let red = filter_for_role(&doc, &assets, TeamRole::Red);
            assert_eq!(node_ids(&red), vec!["r1"]);
            assert!(red.edges.is_empty());

            let blue = filter_for_role(&doc, &assets, TeamRole::Blue);
            assert_eq!(node_ids(&blue), vec!["b1"]);
            assert!(blue.edges.is_empty());
        }

        #[test]
        fn owned_node_without_visible_asset_stays_hidden() {
            let (doc, _) = scenario();
            // Red queries with no assets registered at all: only the
            // structural core node survives.
            let view = filter_for_role(&doc, &[], TeamRole::Red);
            assert_eq!(node_ids(&view), vec!["n1"]);
            assert!(view.edges.is_empty());
        }

        #[test]
        fn empty_document_yields_empty_view() {
            let doc = TopologyDocument::new("ex-empty");
            let view = filter_for_role(&doc, &[], TeamRole::Red);
            assert!(view.is_empty());
        }
    }
}
