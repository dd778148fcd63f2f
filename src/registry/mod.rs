//! # Topology Manifest Module
//!
//! Builds an optional JSON manifest of a generated topology, written next
//! to the XML description as `<name>.json`. Test harnesses driving the
//! leader-election experiments read it to learn the node set and the
//! expected adjacency without parsing the desvirt XML.
//!
//! ## Example Manifest Structure
//!
//! ```json
//! {
//!   "name": "bi-ring3",
//!   "description": "3 nodes in a bi-directional ring",
//!   "topology": "ring",
//!   "direction": "bi",
//!   "node_count": 3,
//!   "link_count": 3,
//!   "nodes": ["0", "1", "2"],
//!   "links": [
//!     { "from": "0", "to": "1", "unidirectional": false }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::config::{Direction, TopologyKind};
use crate::topology::{NodeId, Topology};

/// One link as listed in the manifest
#[derive(Serialize, Debug, PartialEq)]
pub struct ManifestLink {
    pub from: NodeId,
    pub to: NodeId,
    pub unidirectional: bool,
}

/// Summary of a generated topology
#[derive(Serialize, Debug)]
pub struct TopologyManifest {
    /// Network name, also the stem of every output file
    pub name: String,
    pub description: String,
    pub topology: TopologyKind,
    pub direction: Direction,
    pub node_count: usize,
    pub link_count: usize,
    /// Node identifiers in output order
    pub nodes: Vec<NodeId>,
    pub links: Vec<ManifestLink>,
}

impl TopologyManifest {
    pub fn from_topology(topology: &Topology) -> Self {
        Self {
            name: topology.descriptor.name.clone(),
            description: topology.descriptor.description.clone(),
            topology: topology.kind,
            direction: topology.direction,
            node_count: topology.nodes.len(),
            link_count: topology.links.len(),
            nodes: topology.nodes.iter().map(|node| node.id.clone()).collect(),
            links: topology
                .links
                .iter()
                .map(|link| ManifestLink {
                    from: link.from.clone(),
                    to: link.to.clone(),
                    unidirectional: link.unidirectional,
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TopologyConfig;
    use crate::topology::build_topology;

    #[test]
    fn test_manifest_from_ring() {
        let config = TopologyConfig {
            size: 3,
            ..TopologyConfig::default()
        };
        let manifest = TopologyManifest::from_topology(&build_topology(&config));

        assert_eq!(manifest.name, "bi-ring3");
        assert_eq!(manifest.node_count, 3);
        assert_eq!(manifest.link_count, 3);
        assert_eq!(manifest.nodes, vec![NodeId::numeric(0), NodeId::numeric(1), NodeId::numeric(2)]);
        assert_eq!(
            manifest.links[2],
            ManifestLink {
                from: NodeId::numeric(2),
                to: NodeId::numeric(0),
                unidirectional: false,
            }
        );
    }

    #[test]
    fn test_manifest_json() {
        let config = TopologyConfig {
            kind: TopologyKind::BinaryTree,
            size: 3,
            ..TopologyConfig::default()
        };
        let manifest = TopologyManifest::from_topology(&build_topology(&config));
        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

        assert_eq!(json["topology"], "binary-tree");
        assert_eq!(json["direction"], "bi");
        assert_eq!(json["nodes"], serde_json::json!(["root", "a0", "a1"]));
        assert_eq!(json["links"][1]["to"], "a1");
    }
}
