//! Generation orchestrator.
//!
//! Coordinates one generator run: builds the topology model, renders the
//! artifacts into memory, then writes them to the output directory.
//! Generation ([`generate_outputs`]) touches no filesystem state, so it can be
//! tested and run repeatedly with identical results.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, TopologyConfig};
use crate::registry::TopologyManifest;
use crate::topology::{build_topology, TopologyDescriptor};
use crate::utils::{topology_advisories, write_executable_script};
use crate::vnet::{render_cleanup_script, render_topology_xml};

/// In-memory artifacts of one generator run
#[derive(Debug, Clone)]
pub struct GeneratedOutputs {
    pub descriptor: TopologyDescriptor,
    pub node_count: usize,
    pub link_count: usize,
    /// desvirt topology description
    pub xml: String,
    /// Teardown script
    pub cleanup: String,
    /// JSON manifest, when requested
    pub manifest: Option<String>,
}

/// Paths of the files written for one run
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFiles {
    pub xml: PathBuf,
    pub cleanup: PathBuf,
    pub manifest: Option<PathBuf>,
}

impl WrittenFiles {
    /// All written paths, in creation order
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.xml.as_path(), self.cleanup.as_path()];
        if let Some(manifest) = &self.manifest {
            paths.push(manifest.as_path());
        }
        paths
    }
}

/// Generate all artifacts for a topology configuration
pub fn generate_outputs(config: &TopologyConfig, with_manifest: bool) -> Result<GeneratedOutputs> {
    for advisory in topology_advisories(config) {
        warn!("{}", advisory);
    }

    let topology = build_topology(config);
    info!(
        "Generated '{}' ({}): {} nodes, {} links",
        topology.descriptor.name,
        topology.descriptor.description,
        topology.nodes.len(),
        topology.links.len()
    );

    let xml = render_topology_xml(&topology);
    let cleanup = render_cleanup_script(&topology);
    debug!("Rendered {} bytes of XML and {} bytes of cleanup script", xml.len(), cleanup.len());

    let manifest = if with_manifest {
        let json = TopologyManifest::from_topology(&topology)
            .to_json()
            .wrap_err("Failed to serialize topology manifest")?;
        Some(json)
    } else {
        None
    };

    Ok(GeneratedOutputs {
        node_count: topology.nodes.len(),
        link_count: topology.links.len(),
        descriptor: topology.descriptor,
        xml,
        cleanup,
        manifest,
    })
}

/// Write generated artifacts into `output_dir`, creating it if needed.
///
/// Existing files with the same names are overwritten.
pub fn write_outputs(outputs: &GeneratedOutputs, output_dir: &Path) -> Result<WrittenFiles> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let descriptor = &outputs.descriptor;

    let xml_path = output_dir.join(descriptor.xml_file_name());
    fs::write(&xml_path, &outputs.xml)
        .wrap_err_with(|| format!("Failed to write topology file '{}'", xml_path.display()))?;
    debug!("Wrote {:?}", xml_path);

    let cleanup_path = output_dir.join(descriptor.cleanup_file_name());
    write_executable_script(&cleanup_path, &outputs.cleanup)?;
    debug!("Wrote {:?}", cleanup_path);

    let manifest_path = match &outputs.manifest {
        Some(json) => {
            let path = output_dir.join(descriptor.manifest_file_name());
            fs::write(&path, json)
                .wrap_err_with(|| format!("Failed to write manifest '{}'", path.display()))?;
            debug!("Wrote {:?}", path);
            Some(path)
        }
        None => None,
    };

    Ok(WrittenFiles {
        xml: xml_path,
        cleanup: cleanup_path,
        manifest: manifest_path,
    })
}

/// Run the whole pipeline for a resolved configuration
pub fn run(config: &Config) -> Result<WrittenFiles> {
    let topology = &config.topology;
    info!(
        "Topology: {} (rows={}, cols={}, size={}, direction={})",
        topology.kind, topology.rows, topology.cols, topology.size, topology.direction
    );

    let outputs = generate_outputs(topology, config.output.manifest)?;
    let written = write_outputs(&outputs, &config.output.dir)?;

    info!("Wrote {} files to {:?}", written.paths().len(), config.output.dir);
    Ok(written)
}
