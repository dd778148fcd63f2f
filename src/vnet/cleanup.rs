//! Cleanup script rendering.
//!
//! The script takes the RIOT project name as its only argument, stops and
//! undefines the desvirt network, deletes the bridge and every per-node tap
//! link, removes each node's compiled binary and finally kills anything still
//! running under the project name.

use std::fmt::{self, Write};

use crate::topology::Topology;

/// Directory holding the per-node RIOT native binaries
pub const NATIVE_BIN_DIR: &str = "bin/native";

/// Number of lines the script emits per node
pub const LINES_PER_NODE: usize = 2;

/// Write the cleanup script for a topology
pub fn write_cleanup_script<W: Write>(out: &mut W, topology: &Topology) -> fmt::Result {
    let name = &topology.descriptor.name;

    writeln!(out, "#!/bin/sh")?;
    writeln!(out, "PROJ=\"$1\"")?;
    writeln!(out)?;
    writeln!(out, "make desvirt-stop TOPO={}", name)?;
    writeln!(out, "make desvirt-undefine TOPO={}", name)?;
    writeln!(out, "sudo ip link delete {}", name)?;

    for node in &topology.nodes {
        writeln!(out, "sudo ip link delete {}_{}", name, node.id)?;
        writeln!(out, "rm {}/${{PROJ}}{}.elf", NATIVE_BIN_DIR, node.id)?;
    }

    writeln!(out, "pkill -9 -f ${{PROJ}}")
}

/// Render the cleanup script into a `String`
pub fn render_cleanup_script(topology: &Topology) -> String {
    let mut script = String::new();
    // Writing into a String cannot fail
    let _ = write_cleanup_script(&mut script, topology);
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TopologyConfig, TopologyKind};
    use crate::topology::build_topology;

    #[test]
    fn test_render_star() {
        let config = TopologyConfig {
            kind: TopologyKind::Star,
            size: 3,
            ..TopologyConfig::default()
        };
        let script = render_cleanup_script(&build_topology(&config));

        let expected = "#!/bin/sh
PROJ=\"$1\"

make desvirt-stop TOPO=star3
make desvirt-undefine TOPO=star3
sudo ip link delete star3
sudo ip link delete star3_root
rm bin/native/${PROJ}root.elf
sudo ip link delete star3_0
rm bin/native/${PROJ}0.elf
sudo ip link delete star3_1
rm bin/native/${PROJ}1.elf
pkill -9 -f ${PROJ}
";
        assert_eq!(script, expected);
    }

    #[test]
    fn test_grid_nodes_in_row_major_order() {
        let config = TopologyConfig {
            kind: TopologyKind::Grid,
            rows: 2,
            cols: 2,
            ..TopologyConfig::default()
        };
        let script = render_cleanup_script(&build_topology(&config));
        let deletes: Vec<&str> = script
            .lines()
            .filter(|line| line.starts_with("sudo ip link delete grid4-2x2_"))
            .collect();
        assert_eq!(
            deletes,
            vec![
                "sudo ip link delete grid4-2x2_a0",
                "sudo ip link delete grid4-2x2_a1",
                "sudo ip link delete grid4-2x2_b0",
                "sudo ip link delete grid4-2x2_b1",
            ]
        );
    }
}
