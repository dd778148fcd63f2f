//! Shared utilities: executable script writing, parameter advisories.

pub mod script;
pub mod validation;

pub use script::write_executable_script;
pub use validation::topology_advisories;
