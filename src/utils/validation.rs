//! Parameter sanity checks.
//!
//! Degenerate parameters are never fatal: the generator still produces a
//! (possibly tiny or link-less) topology. These checks only collect
//! advisories for the caller to log.

use crate::config::{TopologyConfig, TopologyKind};
use std::path::Path;

/// Minimum size at which a topology kind has its characteristic shape
fn minimum_size(kind: TopologyKind) -> usize {
    match kind {
        TopologyKind::Ring => 3,
        TopologyKind::Line | TopologyKind::BinaryTree | TopologyKind::Star | TopologyKind::Complete => 2,
        TopologyKind::Grid | TopologyKind::Mesh => 1,
    }
}

/// Returns true if `value` is a number in [0, 100]
fn is_percentage(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|p| (0.0..=100.0).contains(&p))
        .unwrap_or(false)
}

/// Collect warnings about degenerate or suspicious topology parameters
///
/// # Examples
/// ```
/// use vnet_topogen::config::{TopologyConfig, TopologyKind};
/// use vnet_topogen::utils::validation::topology_advisories;
///
/// let ring = TopologyConfig { kind: TopologyKind::Ring, size: 2, ..TopologyConfig::default() };
/// assert_eq!(topology_advisories(&ring).len(), 1);
/// assert!(topology_advisories(&TopologyConfig::default()).is_empty());
/// ```
pub fn topology_advisories(config: &TopologyConfig) -> Vec<String> {
    let mut advisories = Vec::new();
    let kind = config.kind;

    if kind.is_rectangular() {
        if config.cols == 0 {
            advisories.push(format!("{} topology with 0 columns has no nodes", kind));
        }
    } else if config.size < minimum_size(kind) {
        advisories.push(format!(
            "{} topology of size {} is degenerate (needs at least {} nodes)",
            kind,
            config.size,
            minimum_size(kind)
        ));
    }

    for (label, value) in [
        ("broadcast loss", &config.broadcast_loss),
        ("packet loss", &config.packet_loss),
    ] {
        if !is_percentage(value) {
            advisories.push(format!(
                "{} '{}' is not a percentage between 0 and 100; it is written verbatim",
                label, value
            ));
        }
    }

    if let Some(binary) = config.binary_path() {
        if !Path::new(binary).exists() {
            advisories.push(format!("binary '{}' does not exist (yet)", binary));
        }
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_clean() {
        assert!(topology_advisories(&TopologyConfig::default()).is_empty());
    }

    #[test]
    fn test_small_sizes_flagged() {
        let cases = [
            (TopologyKind::Ring, 2, true),
            (TopologyKind::Ring, 3, false),
            (TopologyKind::Line, 1, true),
            (TopologyKind::BinaryTree, 1, true),
            (TopologyKind::Star, 0, true),
            (TopologyKind::Complete, 2, false),
        ];
        for (kind, size, flagged) in cases {
            let config = TopologyConfig { kind, size, ..TopologyConfig::default() };
            assert_eq!(!topology_advisories(&config).is_empty(), flagged, "{} size {}", kind, size);
        }
    }

    #[test]
    fn test_grid_ignores_size() {
        let config = TopologyConfig {
            kind: TopologyKind::Grid,
            size: 0,
            ..TopologyConfig::default()
        };
        assert!(topology_advisories(&config).is_empty());

        let config = TopologyConfig { cols: 0, ..config };
        assert_eq!(topology_advisories(&config).len(), 1);
    }

    #[test]
    fn test_loss_strings() {
        assert!(is_percentage("0.0"));
        assert!(is_percentage("100"));
        assert!(is_percentage(" 12.5 "));
        assert!(!is_percentage("150"));
        assert!(!is_percentage("-1"));
        assert!(!is_percentage("lossy"));

        let config = TopologyConfig {
            packet_loss: "lots".to_string(),
            ..TopologyConfig::default()
        };
        let advisories = topology_advisories(&config);
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].contains("packet loss"));
    }

    #[test]
    fn test_missing_binary_flagged() {
        let config = TopologyConfig {
            binary: "/nonexistent/project.elf".to_string(),
            ..TopologyConfig::default()
        };
        assert_eq!(topology_advisories(&config).len(), 1);
    }
}
