//! Indented text rendering of parse forests.

use std::fmt::Write;

use structura_core::Colors;

use crate::node::{Node, StructureNode};

impl StructureNode<'_> {
    /// Indented tree, one node per line: structure names, then statement
    /// kinds followed by their quoted text.
    pub fn dump(&self) -> String {
        self.dump_colored(Colors::OFF)
    }

    pub fn dump_colored(&self, colors: Colors) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_structure(&mut out, self, 0, colors);
        out
    }

    /// Forest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn write_structure(
    w: &mut impl Write,
    node: &StructureNode<'_>,
    depth: usize,
    c: Colors,
) -> std::fmt::Result {
    writeln!(w, "{:indent$}{}{}{}", "", c.blue, node.name(), c.reset, indent = depth * 2)?;
    for child in node.children() {
        match child {
            Node::Structure(inner) => write_structure(w, inner, depth + 1, c)?,
            Node::Statement(leaf) => {
                let statement = leaf.statement();
                writeln!(
                    w,
                    "{:indent$}{}{}{} {}{:?}{}",
                    "",
                    c.green,
                    statement.kind(),
                    c.reset,
                    c.dim,
                    statement.text(),
                    c.reset,
                    indent = (depth + 1) * 2
                )?;
            }
        }
    }
    Ok(())
}
