//! # vnet-topogen - Topology generator for desvirt/vnet RIOT emulation
//!
//! This library generates the static network description files consumed by
//! the desvirt virtual-network layer when testing a leader-election protocol
//! across simulated wireless RIOT `native` nodes.
//!
//! ## Overview
//!
//! Given a topology shape, a size (or row/column count), a link direction and
//! broadcast/packet loss rates, the generator emits:
//!
//! - `<name>.xml`: the desvirt topology (node type, nodes, links)
//! - `<name>_cleanup.sh`: an executable teardown script
//! - `<name>.json`: an optional manifest of the generated graph
//!
//! ## Supported Topologies
//!
//! - **ring**: `x -> (x+1) mod n`
//! - **line**: `x -> x+1`, no wraparound
//! - **binary-tree**: root plus levels `a`, `b`, ... filled left to right
//! - **grid**: rows x cols with 4-neighbour links, labels like `b3`
//! - **mesh**: grid plus diagonals (8-neighbour)
//! - **star**: one root connected to every leaf
//! - **complete**: every pair of nodes connected once
//!
//! Grid, mesh, star and complete graphs are always bidirectional; ring, line
//! and binary-tree honour the `uni`/`bi` direction.
//!
//! ## Architecture
//!
//! - `config`: parameter types, defaults and validation
//! - `config_loader`: YAML config loading and CLI overrides
//! - `topology`: node labels, node generation and adjacency rules
//! - `vnet`: XML and cleanup script rendering
//! - `registry`: JSON manifest of a generated topology
//! - `utils`: executable script writing and parameter advisories
//! - `orchestrator`: pure generation plus the file-writing stage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vnet_topogen::config::{TopologyConfig, TopologyKind};
//! use vnet_topogen::orchestrator::{generate_outputs, write_outputs};
//!
//! let config = TopologyConfig {
//!     kind: TopologyKind::Mesh,
//!     rows: 3,
//!     cols: 3,
//!     ..TopologyConfig::default()
//! };
//!
//! let outputs = generate_outputs(&config, false)?;
//! write_outputs(&outputs, std::path::Path::new("."))?;
//! // ./mesh9-3x3.xml and ./mesh9-3x3_cleanup.sh now exist
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Typed validation errors use `thiserror`; everything that touches the
//! filesystem returns `color_eyre::Result` with path context attached.

pub mod config;
pub mod config_loader;
pub mod topology;
pub mod vnet;
pub mod registry;
pub mod utils;
pub mod orchestrator;
