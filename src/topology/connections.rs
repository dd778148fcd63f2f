//! Link generation.
//!
//! Each topology kind has its own adjacency rule. Grid and mesh check an
//! [`EdgeSet`] before emitting so every neighbouring pair appears once; the
//! other kinds only ever produce each pair once by construction.

use log::debug;

use crate::config::{TopologyConfig, TopologyKind};
use crate::topology::layout::{tree_members, tree_positions};
use crate::topology::types::{EdgeSet, Link, LinkAttributes, NodeId};

/// Up, right, down, left
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Up-left, up-right, down-left, down-right
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generate the links of the configured topology, in output order
pub fn generate_links(config: &TopologyConfig) -> Vec<Link> {
    let attrs = LinkAttributes::from_config(config);
    let uni = config.unidirectional();
    let rows = usize::from(config.rows);

    let links = match config.kind {
        TopologyKind::Grid => grid_links(rows, config.cols, false, &attrs),
        TopologyKind::Mesh => grid_links(rows, config.cols, true, &attrs),
        TopologyKind::Ring => ring_links(config.size, uni, &attrs),
        TopologyKind::Line => line_links(config.size, uni, &attrs),
        TopologyKind::BinaryTree => tree_links(config.size, uni, &attrs),
        TopologyKind::Complete => complete_links(config.size, &attrs),
        TopologyKind::Star => star_links(config.size, &attrs),
    };

    debug!("Generated {} links for {} topology", links.len(), config.kind);
    links
}

/// Rectangular adjacency. With `diagonals` the diagonal neighbours are
/// checked after the orthogonal ones, giving 8-connectivity.
pub fn grid_links(rows: usize, cols: usize, diagonals: bool, attrs: &LinkAttributes) -> Vec<Link> {
    let offsets: Vec<(isize, isize)> = if diagonals {
        ORTHOGONAL.iter().chain(DIAGONAL.iter()).copied().collect()
    } else {
        ORTHOGONAL.to_vec()
    };

    let mut existing = EdgeSet::new();
    let mut links = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let from = NodeId::lettered(row, col);
            for &(d_row, d_col) in &offsets {
                let (Some(n_row), Some(n_col)) =
                    (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
                else {
                    continue;
                };
                if n_row >= rows || n_col >= cols {
                    continue;
                }

                let to = NodeId::lettered(n_row, n_col);
                if existing.insert(&from, &to) {
                    links.push(attrs.link(from.clone(), to, false));
                }
            }
        }
    }

    links
}

/// `x -> (x + 1) mod size` for every node
pub fn ring_links(size: usize, uni: bool, attrs: &LinkAttributes) -> Vec<Link> {
    (0..size)
        .map(|x| attrs.link(NodeId::numeric(x), NodeId::numeric((x + 1) % size), uni))
        .collect()
}

/// `x -> x + 1`, no wraparound
pub fn line_links(size: usize, uni: bool, attrs: &LinkAttributes) -> Vec<Link> {
    (1..size)
        .map(|x| attrs.link(NodeId::numeric(x - 1), NodeId::numeric(x), uni))
        .collect()
}

/// Parent to child links, only towards children that exist in the tree
pub fn tree_links(size: usize, uni: bool, attrs: &LinkAttributes) -> Vec<Link> {
    let positions = tree_positions(size);
    let members = tree_members(&positions);
    let mut links = Vec::new();

    for parent in &positions {
        for child in [parent.left_child(), parent.right_child()] {
            if members.contains(&child) {
                links.push(attrs.link(parent.id(), child.id(), uni));
            }
        }
    }

    links
}

/// Every pair `x < y` once
pub fn complete_links(size: usize, attrs: &LinkAttributes) -> Vec<Link> {
    let mut links = Vec::with_capacity(size * size.saturating_sub(1) / 2);
    for x in 0..size {
        for y in (x + 1)..size {
            links.push(attrs.link(NodeId::numeric(x), NodeId::numeric(y), false));
        }
    }
    links
}

/// Root to every leaf
pub fn star_links(size: usize, attrs: &LinkAttributes) -> Vec<Link> {
    (0..size.saturating_sub(1))
        .map(|leaf| attrs.link(NodeId::root(), NodeId::numeric(leaf), false))
        .collect()
}
