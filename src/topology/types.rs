//! Topology type definitions.
//!
//! Node identifiers, nodes, links, the unordered-pair edge memo and the
//! descriptor that names a generated topology.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::config::{Direction, TopologyConfig, TopologyKind};

/// Label of the root node in tree and star topologies
pub const ROOT_LABEL: &str = "root";

/// Convert a zero-based row or level index to its letter label.
///
/// Bijective base-26: `0 -> "a"`, `25 -> "z"`, `26 -> "aa"`, `27 -> "ab"`.
pub fn letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Identifier of a node as written to the topology file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Numeric label used by ring, line, complete and star leaves
    pub fn numeric(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Label of the root node
    pub fn root() -> Self {
        Self(ROOT_LABEL.to_string())
    }

    /// Letter-plus-number label, e.g. row 1 column 3 is `b3`
    pub fn lettered(letter_index: usize, number: usize) -> Self {
        Self(format!("{}{}", letter(letter_index), number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node entry in the generated topology
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
}

/// A link entry in the generated topology.
///
/// When `unidirectional` is false the emulator treats the entry as a link in
/// both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
    pub broadcast_loss: String,
    pub packet_loss: String,
    pub unidirectional: bool,
}

/// Loss attributes shared by every link of one topology
#[derive(Debug, Clone)]
pub struct LinkAttributes {
    pub broadcast_loss: String,
    pub packet_loss: String,
}

impl LinkAttributes {
    pub fn from_config(config: &TopologyConfig) -> Self {
        Self {
            broadcast_loss: config.broadcast_loss.clone(),
            packet_loss: config.packet_loss.clone(),
        }
    }

    /// Build a link carrying these attributes
    pub fn link(&self, from: NodeId, to: NodeId, unidirectional: bool) -> Link {
        Link {
            from,
            to,
            broadcast_loss: self.broadcast_loss.clone(),
            packet_loss: self.packet_loss.clone(),
            unidirectional,
        }
    }
}

/// Set of already-connected node pairs, ignoring direction
#[derive(Debug, Default)]
pub struct EdgeSet {
    pairs: HashSet<(NodeId, NodeId)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(a: &NodeId, b: &NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Returns true if `a` and `b` are connected in either direction
    pub fn contains(&self, a: &NodeId, b: &NodeId) -> bool {
        self.pairs.contains(&Self::normalize(a, b))
    }

    /// Record the pair; returns false if it was already present
    pub fn insert(&mut self, a: &NodeId, b: &NodeId) -> bool {
        self.pairs.insert(Self::normalize(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Name and human description of a topology, plus derived file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyDescriptor {
    pub name: String,
    pub description: String,
}

impl TopologyDescriptor {
    pub fn from_config(config: &TopologyConfig) -> Self {
        let size = config.size;
        let (rows, cols) = (config.rows, config.cols);
        let (name, description) = match config.kind {
            TopologyKind::Grid => {
                let n = config.node_count();
                (
                    format!("grid{}-{}x{}", n, rows, cols),
                    format!("{} nodes in a regular {}x{} grid (90 deg)", n, rows, cols),
                )
            }
            TopologyKind::Mesh => {
                let n = config.node_count();
                (
                    format!("mesh{}-{}x{}", n, rows, cols),
                    format!("{} nodes in a regular {}x{} mesh (45 deg)", n, rows, cols),
                )
            }
            TopologyKind::Ring => match config.direction {
                Direction::Uni => (
                    format!("uni-ring{}", size),
                    format!("{} nodes in a uni-directional ring", size),
                ),
                Direction::Bi => (
                    format!("bi-ring{}", size),
                    format!("{} nodes in a bi-directional ring", size),
                ),
            },
            TopologyKind::BinaryTree => match config.direction {
                Direction::Uni => (
                    format!("uni-tree{}", size),
                    format!("{} nodes in a uni-directional binary-tree (root down)", size),
                ),
                Direction::Bi => (
                    format!("bi-tree{}", size),
                    format!("{} nodes in a bi-directional binary-tree", size),
                ),
            },
            TopologyKind::Line => (format!("line{}", size), format!("{} nodes in a line", size)),
            TopologyKind::Complete => (
                format!("complete{}", size),
                format!("{} nodes in a complete graph", size),
            ),
            TopologyKind::Star => (
                format!("star{}", size),
                format!(
                    "{} nodes each connected only to one central node",
                    size.saturating_sub(1)
                ),
            ),
        };
        Self { name, description }
    }

    /// `<name>.xml`
    pub fn xml_file_name(&self) -> String {
        format!("{}.xml", self.name)
    }

    /// `<name>_cleanup.sh`
    pub fn cleanup_file_name(&self) -> String {
        format!("{}_cleanup.sh", self.name)
    }

    /// `<name>.json`
    pub fn manifest_file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

/// A fully generated topology
#[derive(Debug, Clone)]
pub struct Topology {
    pub descriptor: TopologyDescriptor,
    pub kind: TopologyKind,
    pub direction: Direction,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_bijection() {
        assert_eq!(letter(0), "a");
        assert_eq!(letter(1), "b");
        assert_eq!(letter(25), "z");
        assert_eq!(letter(26), "aa");
        assert_eq!(letter(27), "ab");
        assert_eq!(letter(51), "az");
        assert_eq!(letter(52), "ba");
        assert_eq!(letter(701), "zz");
        assert_eq!(letter(702), "aaa");
    }

    #[test]
    fn test_letters_are_unique() {
        let labels: HashSet<String> = (0..2000).map(letter).collect();
        assert_eq!(labels.len(), 2000);
    }

    #[test]
    fn test_node_id_labels() {
        assert_eq!(NodeId::numeric(12).as_str(), "12");
        assert_eq!(NodeId::root().as_str(), "root");
        assert_eq!(NodeId::lettered(1, 3).to_string(), "b3");
        assert_eq!(NodeId::lettered(26, 0).to_string(), "aa0");
    }

    #[test]
    fn test_edge_set_ignores_direction() {
        let a = NodeId::lettered(0, 0);
        let b = NodeId::lettered(0, 1);

        let mut edges = EdgeSet::new();
        assert!(edges.is_empty());
        assert!(edges.insert(&a, &b));
        assert!(edges.contains(&b, &a));
        assert!(!edges.insert(&b, &a));
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_descriptor_names() {
        let mut config = TopologyConfig::default();
        let descriptor = TopologyDescriptor::from_config(&config);
        assert_eq!(descriptor.name, "bi-ring4");
        assert_eq!(descriptor.description, "4 nodes in a bi-directional ring");
        assert_eq!(descriptor.xml_file_name(), "bi-ring4.xml");
        assert_eq!(descriptor.cleanup_file_name(), "bi-ring4_cleanup.sh");

        config.kind = TopologyKind::Mesh;
        config.rows = 3;
        config.cols = 4;
        let descriptor = TopologyDescriptor::from_config(&config);
        assert_eq!(descriptor.name, "mesh12-3x4");
        assert_eq!(descriptor.description, "12 nodes in a regular 3x4 mesh (45 deg)");

        config.kind = TopologyKind::BinaryTree;
        config.direction = Direction::Uni;
        config.size = 7;
        let descriptor = TopologyDescriptor::from_config(&config);
        assert_eq!(descriptor.name, "uni-tree7");
        assert_eq!(
            descriptor.description,
            "7 nodes in a uni-directional binary-tree (root down)"
        );

        config.kind = TopologyKind::Star;
        let descriptor = TopologyDescriptor::from_config(&config);
        assert_eq!(descriptor.name, "star7");
        assert_eq!(descriptor.description, "6 nodes each connected only to one central node");
    }

    #[test]
    fn test_direction_does_not_rename_undirected_kinds() {
        let config = TopologyConfig {
            kind: TopologyKind::Line,
            direction: Direction::Uni,
            size: 5,
            ..TopologyConfig::default()
        };
        assert_eq!(TopologyDescriptor::from_config(&config).name, "line5");
    }
}
