use crate::config::{Config, Direction, TopologyKind};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open config file '{}'", config_path.display()))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse config file '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that override YAML (or default) settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rows: Option<u8>,
    pub cols: Option<usize>,
    pub size: Option<usize>,
    pub kind: Option<TopologyKind>,
    pub direction: Option<Direction>,
    pub broadcast_loss: Option<String>,
    pub packet_loss: Option<String>,
    pub binary: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub manifest: bool,
}

/// Apply CLI overrides to a configuration
pub fn apply_cli_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    let topology = &mut config.topology;

    if let Some(rows) = overrides.rows {
        debug!("CLI override: rows = {}", rows);
        topology.rows = rows;
    }
    if let Some(cols) = overrides.cols {
        debug!("CLI override: cols = {}", cols);
        topology.cols = cols;
    }
    if let Some(size) = overrides.size {
        debug!("CLI override: size = {}", size);
        topology.size = size;
    }
    if let Some(kind) = overrides.kind {
        debug!("CLI override: topology = {}", kind);
        topology.kind = kind;
    }
    if let Some(direction) = overrides.direction {
        debug!("CLI override: direction = {}", direction);
        topology.direction = direction;
    }
    if let Some(loss) = &overrides.broadcast_loss {
        topology.broadcast_loss = loss.clone();
    }
    if let Some(loss) = &overrides.packet_loss {
        topology.packet_loss = loss.clone();
    }
    if let Some(binary) = &overrides.binary {
        topology.binary = binary.clone();
    }
    if let Some(dir) = &overrides.output_dir {
        config.output.dir = dir.clone();
    }
    // A flag can only switch the manifest on
    if overrides.manifest {
        config.output.manifest = true;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

/// Resolve the effective configuration: YAML file (if any), then CLI overrides
pub fn resolve_config(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_cli_overrides(&mut config, overrides)?;
    Ok(config)
}
