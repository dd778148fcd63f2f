//! Network topology module.
//!
//! This module contains the topology model (node identifiers, nodes, links),
//! node generation per topology kind and the per-kind adjacency rules.

pub mod types;
pub mod layout;
pub mod connections;

// Re-export key types and functions for easier access
pub use types::{letter, EdgeSet, Link, LinkAttributes, Node, NodeId, Topology, TopologyDescriptor};
pub use layout::{generate_nodes, tree_positions, TreePosition};
pub use connections::generate_links;

use crate::config::TopologyConfig;

/// Build the complete topology model for a configuration
pub fn build_topology(config: &TopologyConfig) -> Topology {
    Topology {
        descriptor: TopologyDescriptor::from_config(config),
        kind: config.kind,
        direction: config.direction,
        nodes: generate_nodes(config),
        links: generate_links(config),
    }
}
