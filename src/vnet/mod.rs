//! # desvirt/vnet output rendering
//!
//! Turns a generated [`Topology`](crate::topology::Topology) into the two
//! artifacts the RIOT desvirt tooling consumes:
//!
//! - `xml.rs`: the `<topology version="1">` network description
//! - `cleanup.rs`: the shell script that tears the virtual network down
//!
//! Both renderers write into any [`std::fmt::Write`] sink one element at a
//! time; the `render_*` helpers collect into a `String`.
//!
//! ## Example Generated Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <topology version="1">
//!     <net description="3 nodes in a line" name="line3">
//!         <nodeTypes>
//!             <nodeType name="riot_native">
//!                 <interfaces>
//!                     <interface name="wlan0" type="802.11bg"/>
//!                 </interfaces>
//!             </nodeType>
//!         </nodeTypes>
//!         <nodes>
//!             <node binary="" name="0" type="riot_native"/>
//!             ...
//!         </nodes>
//!         <links>
//!             <link broadcast_loss="0.0" from_if="wlan0" from_node="0" loss="0.0" to_if="wlan0" to_node="1" uni="false"/>
//!             ...
//!         </links>
//!     </net>
//! </topology>
//! ```

pub mod cleanup;
pub mod xml;

pub use cleanup::{render_cleanup_script, write_cleanup_script};
pub use xml::{render_topology_xml, write_topology_xml};

/// Node type declared for every node
pub const NODE_TYPE: &str = "riot_native";

/// The single wireless interface of every node
pub const INTERFACE_NAME: &str = "wlan0";

/// Interface type of [`INTERFACE_NAME`]
pub const INTERFACE_TYPE: &str = "802.11bg";
