//! Topology XML rendering.

use std::borrow::Cow;
use std::fmt::{self, Write};

use super::{INTERFACE_NAME, INTERFACE_TYPE, NODE_TYPE};
use crate::topology::{Link, Node, Topology};

/// Escape a value for use inside a double-quoted XML attribute
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn write_header<W: Write>(out: &mut W, description: &str, name: &str) -> fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<topology version="1">"#)?;
    writeln!(
        out,
        r#"    <net description="{}" name="{}">"#,
        escape_attr(description),
        escape_attr(name)
    )?;
    writeln!(out, "        <nodeTypes>")?;
    writeln!(out, r#"            <nodeType name="{}">"#, NODE_TYPE)?;
    writeln!(out, "                <interfaces>")?;
    writeln!(
        out,
        r#"                    <interface name="{}" type="{}"/>"#,
        INTERFACE_NAME, INTERFACE_TYPE
    )?;
    writeln!(out, "                </interfaces>")?;
    writeln!(out, "            </nodeType>")?;
    writeln!(out, "        </nodeTypes>")
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    writeln!(
        out,
        r#"            <node binary="{}" name="{}" type="{}"/>"#,
        escape_attr(node.binary.as_deref().unwrap_or("")),
        escape_attr(node.id.as_str()),
        NODE_TYPE
    )
}

fn write_link<W: Write>(out: &mut W, link: &Link) -> fmt::Result {
    writeln!(
        out,
        r#"            <link broadcast_loss="{}" from_if="{}" from_node="{}" loss="{}" to_if="{}" to_node="{}" uni="{}"/>"#,
        escape_attr(&link.broadcast_loss),
        INTERFACE_NAME,
        escape_attr(link.from.as_str()),
        escape_attr(&link.packet_loss),
        INTERFACE_NAME,
        escape_attr(link.to.as_str()),
        link.unidirectional
    )
}

/// Write the topology description: header, node type, nodes, links.
///
/// The document ends right after `</topology>` with no trailing newline.
pub fn write_topology_xml<W: Write>(out: &mut W, topology: &Topology) -> fmt::Result {
    let descriptor = &topology.descriptor;
    write_header(out, &descriptor.description, &descriptor.name)?;

    writeln!(out, "        <nodes>")?;
    for node in &topology.nodes {
        write_node(out, node)?;
    }
    writeln!(out, "        </nodes>")?;

    writeln!(out, "        <links>")?;
    for link in &topology.links {
        write_link(out, link)?;
    }
    writeln!(out, "        </links>")?;

    writeln!(out, "    </net>")?;
    write!(out, "</topology>")
}

/// Render the topology description into a `String`
pub fn render_topology_xml(topology: &Topology) -> String {
    let mut xml = String::new();
    // Writing into a String cannot fail
    let _ = write_topology_xml(&mut xml, topology);
    xml
}
