//! Node generation.
//!
//! Produces the ordered node identifiers of each topology kind. The order
//! here is the order nodes appear in the topology file and in the cleanup
//! script.

use std::collections::HashSet;

use log::debug;

use crate::config::{TopologyConfig, TopologyKind};
use crate::topology::types::{Node, NodeId};

/// Position of a node in a binary tree: `level` 0 is the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreePosition {
    pub level: usize,
    pub index: usize,
}

impl TreePosition {
    pub const ROOT: Self = Self { level: 0, index: 0 };

    /// `root` for the root, otherwise `letter(level - 1)` followed by the index
    pub fn id(&self) -> NodeId {
        if self.level == 0 {
            NodeId::root()
        } else {
            NodeId::lettered(self.level - 1, self.index)
        }
    }

    pub fn left_child(&self) -> Self {
        Self { level: self.level + 1, index: self.index * 2 }
    }

    pub fn right_child(&self) -> Self {
        Self { level: self.level + 1, index: self.index * 2 + 1 }
    }
}

/// Depth of a binary tree holding `size` nodes: `floor(log2(size + 1))`
pub fn tree_depth(size: usize) -> usize {
    size.saturating_add(1).ilog2() as usize
}

/// Positions of the nodes of a binary tree with `size` nodes, level by level.
///
/// The root is always present; below it each level `l` holds up to `2^l`
/// nodes and filling stops once `size` nodes exist.
pub fn tree_positions(size: usize) -> Vec<TreePosition> {
    let mut positions = vec![TreePosition::ROOT];
    let depth = tree_depth(size);

    'levels: for level in 1..=depth {
        for index in 0..(1usize << level) {
            if positions.len() >= size {
                break 'levels;
            }
            positions.push(TreePosition { level, index });
        }
    }

    debug!("Binary tree of size {} spans {} levels below the root", size, depth);
    positions
}

/// Set of tree positions, used to decide which children exist
pub fn tree_members(positions: &[TreePosition]) -> HashSet<TreePosition> {
    positions.iter().copied().collect()
}

/// Grid/mesh node identifiers in row-major order
pub fn grid_ids(rows: usize, cols: usize) -> Vec<NodeId> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| NodeId::lettered(row, col)))
        .collect()
}

/// Identifiers `"0"` through `"count-1"`
pub fn numeric_ids(count: usize) -> Vec<NodeId> {
    (0..count).map(NodeId::numeric).collect()
}

/// Node identifiers for the configured topology, in output order
pub fn generate_node_ids(config: &TopologyConfig) -> Vec<NodeId> {
    match config.kind {
        TopologyKind::Grid | TopologyKind::Mesh => grid_ids(usize::from(config.rows), config.cols),
        TopologyKind::Ring | TopologyKind::Line | TopologyKind::Complete => numeric_ids(config.size),
        TopologyKind::BinaryTree => tree_positions(config.size).iter().map(TreePosition::id).collect(),
        TopologyKind::Star => {
            let mut ids = vec![NodeId::root()];
            ids.extend(numeric_ids(config.size.saturating_sub(1)));
            ids
        }
    }
}

/// Nodes for the configured topology, each carrying the configured binary
pub fn generate_nodes(config: &TopologyConfig) -> Vec<Node> {
    let binary = config.binary_path().map(str::to_string);
    generate_node_ids(config)
        .into_iter()
        .map(|id| Node { id, binary: binary.clone() })
        .collect()
}
