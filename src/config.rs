//! Generator configuration types.
//!
//! These structures describe one generator run: which topology to build,
//! how large it is, which loss rates go on the links, and where the output
//! files land. They deserialize from the optional YAML config file and are
//! overridden field by field from the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Highest row count for grid/mesh topologies (one letter per row).
pub const MAX_ROWS: u8 = 26;

/// Topology shapes the generator can emit
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TopologyKind {
    /// Every node linked to its successor, last node back to the first
    Ring,
    /// Ring without the wraparound link
    Line,
    /// Root node with two children per node, filled level by level
    BinaryTree,
    /// Rectangular grid with 4-neighbour connectivity
    Grid,
    /// Rectangular grid with 8-neighbour connectivity
    Mesh,
    /// Central root connected to every leaf
    Star,
    /// Every node connected to every other node
    Complete,
}

impl TopologyKind {
    /// Returns true if node count comes from rows and columns instead of size
    pub fn is_rectangular(&self) -> bool {
        matches!(self, Self::Grid | Self::Mesh)
    }

    /// Returns true if the direction flag affects generated links
    pub fn honors_direction(&self) -> bool {
        matches!(self, Self::Ring | Self::Line | Self::BinaryTree)
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ring => "ring",
            Self::Line => "line",
            Self::BinaryTree => "binary-tree",
            Self::Grid => "grid",
            Self::Mesh => "mesh",
            Self::Star => "star",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Link directionality
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Links only carry traffic from `from_node` to `to_node`
    Uni,
    /// Links carry traffic both ways
    Bi,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uni => f.write_str("uni"),
            Self::Bi => f.write_str("bi"),
        }
    }
}

/// Top-level configuration for a generator run
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub topology: TopologyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let rows = self.topology.rows;
        if rows == 0 || rows > MAX_ROWS {
            return Err(ValidationError::InvalidRows(rows));
        }

        if self.output.dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidOutput(
                "output directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Shape and link parameters of the topology
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TopologyConfig {
    pub kind: TopologyKind,
    /// Grid/mesh rows, 1 to 26
    pub rows: u8,
    /// Grid/mesh columns
    pub cols: usize,
    /// Node count for every kind except grid and mesh
    pub size: usize,
    pub direction: Direction,
    /// Broadcast loss percentage, copied verbatim onto every link
    pub broadcast_loss: String,
    /// Packet loss percentage, copied verbatim onto every link
    pub packet_loss: String,
    /// Compiled RIOT `.elf` to run on every node; empty for none
    pub binary: String,
}

impl TopologyConfig {
    /// Number of nodes the topology resolves to
    pub fn node_count(&self) -> usize {
        if self.kind.is_rectangular() {
            usize::from(self.rows) * self.cols
        } else {
            self.size
        }
    }

    /// Whether emitted links are marked unidirectional.
    ///
    /// Grid, mesh, star and complete graphs are always bidirectional.
    pub fn unidirectional(&self) -> bool {
        self.kind.honors_direction() && self.direction == Direction::Uni
    }

    /// Binary path as an option, `None` when empty
    pub fn binary_path(&self) -> Option<&str> {
        if self.binary.is_empty() {
            None
        } else {
            Some(&self.binary)
        }
    }
}

/// Where and what to write
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the generated files
    pub dir: PathBuf,
    /// Also write a JSON manifest of the generated graph
    pub manifest: bool,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid row count {0}: must be between 1 and 26")]
    InvalidRows(u8),
    #[error("Invalid output configuration: {0}")]
    InvalidOutput(String),
}

/// Default implementations
impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            kind: TopologyKind::Ring,
            rows: 2,
            cols: 2,
            size: 4,
            direction: Direction::Bi,
            broadcast_loss: "0.0".to_string(),
            packet_loss: "0.0".to_string(),
            binary: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            manifest: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_config_parsing() {
        let yaml = r#"
topology:
  kind: binary-tree
  size: 7
  direction: uni
  broadcast_loss: "5.0"
output:
  dir: "out"
  manifest: true
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.topology.kind, TopologyKind::BinaryTree);
        assert_eq!(config.topology.size, 7);
        assert_eq!(config.topology.direction, Direction::Uni);
        assert_eq!(config.topology.broadcast_loss, "5.0");
        // Unspecified fields keep their defaults
        assert_eq!(config.topology.packet_loss, "0.0");
        assert_eq!(config.topology.rows, 2);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert!(config.output.manifest);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.topology.kind, TopologyKind::Ring);
        assert_eq!(config.topology.direction, Direction::Bi);
        assert_eq!(config.output.dir, PathBuf::from("."));
    }

    #[test]
    fn test_row_validation() {
        let mut config = Config::default();

        config.topology.rows = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRows(0))));

        config.topology.rows = 27;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRows(27))));

        config.topology.rows = 26;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let mut config = Config::default();
        config.output.dir = PathBuf::new();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidOutput(_))));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let yaml = r#"
topology:
  kind: hexagon
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_node_count() {
        let mut topology = TopologyConfig {
            kind: TopologyKind::Grid,
            rows: 3,
            cols: 5,
            size: 100,
            ..TopologyConfig::default()
        };
        assert_eq!(topology.node_count(), 15);

        topology.kind = TopologyKind::Complete;
        assert_eq!(topology.node_count(), 100);
    }

    #[test]
    fn test_direction_ignored_for_undirected_kinds() {
        let mut topology = TopologyConfig {
            direction: Direction::Uni,
            ..TopologyConfig::default()
        };
        for kind in [TopologyKind::Ring, TopologyKind::Line, TopologyKind::BinaryTree] {
            topology.kind = kind;
            assert!(topology.unidirectional(), "{} should honor uni", kind);
        }
        for kind in [TopologyKind::Grid, TopologyKind::Mesh, TopologyKind::Star, TopologyKind::Complete] {
            topology.kind = kind;
            assert!(!topology.unidirectional(), "{} should stay bidirectional", kind);
        }
    }

    #[test]
    fn test_kind_display_matches_serde_names() {
        assert_eq!(TopologyKind::BinaryTree.to_string(), "binary-tree");
        let parsed: TopologyKind = serde_yaml::from_str("binary-tree").unwrap();
        assert_eq!(parsed, TopologyKind::BinaryTree);
    }
}
