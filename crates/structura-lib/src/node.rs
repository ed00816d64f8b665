//! Parse forest nodes.
//!
//! A [`StructureNode`] is created before its subtree is known to match and is
//! only attached to its parent once the structure succeeds having consumed at
//! least one statement. [`StatementNode`]s borrow the statements they wrap.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use structura_core::Statement;

use crate::structure::Structure;

/// A node of the parse forest.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(untagged)]
pub enum Node<'s> {
    Structure(StructureNode<'s>),
    Statement(StatementNode<'s>),
}

impl<'s> Node<'s> {
    pub fn as_structure(&self) -> Option<&StructureNode<'s>> {
        match self {
            Node::Structure(node) => Some(node),
            Node::Statement(_) => None,
        }
    }

    pub fn as_statement(&self) -> Option<&StatementNode<'s>> {
        match self {
            Node::Statement(node) => Some(node),
            Node::Structure(_) => None,
        }
    }

    /// First statement covered by this node, in input order.
    pub fn first_statement(&self) -> Option<&'s Statement> {
        match self {
            Node::Statement(node) => Some(node.statement),
            Node::Structure(node) => node.first_statement(),
        }
    }

    /// Last statement covered by this node, in input order.
    pub fn last_statement(&self) -> Option<&'s Statement> {
        match self {
            Node::Statement(node) => Some(node.statement),
            Node::Structure(node) => node.last_statement(),
        }
    }
}

/// Leaf wrapping one classified statement.
#[derive(Clone, Copy, Debug)]
pub struct StatementNode<'s> {
    statement: &'s Statement,
    /// Position of the statement in the matched input.
    index: usize,
}

impl<'s> StatementNode<'s> {
    pub(crate) fn new(statement: &'s Statement, index: usize) -> Self {
        Self { statement, index }
    }

    pub fn statement(&self) -> &'s Statement {
        self.statement
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Serialize for StatementNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StatementNode", 3)?;
        state.serialize_field("statement", &self.statement.kind())?;
        state.serialize_field("text", self.statement.text())?;
        state.serialize_field("row", &self.statement.row())?;
        state.end()
    }
}

/// Branch for one matched structure with its children in input order.
#[derive(Clone)]
pub struct StructureNode<'s> {
    structure: &'static dyn Structure,
    children: Vec<Node<'s>>,
}

impl<'s> StructureNode<'s> {
    pub fn new(structure: &'static dyn Structure) -> Self {
        Self {
            structure,
            children: Vec::new(),
        }
    }

    pub fn structure(&self) -> &'static dyn Structure {
        self.structure
    }

    pub fn name(&self) -> &'static str {
        self.structure.name()
    }

    pub fn children(&self) -> &[Node<'s>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push(&mut self, child: Node<'s>) {
        self.children.push(child);
    }

    /// Drop children attached after `len`; used when a matcher backtracks.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.children.truncate(len);
    }

    pub fn first_statement(&self) -> Option<&'s Statement> {
        self.children.iter().find_map(Node::first_statement)
    }

    pub fn last_statement(&self) -> Option<&'s Statement> {
        self.children.iter().rev().find_map(Node::last_statement)
    }

    /// All statements below this node, in input order.
    pub fn statements(&self) -> Vec<&'s Statement> {
        let mut out = Vec::new();
        self.collect_statements(&mut out);
        out
    }

    fn collect_statements(&self, out: &mut Vec<&'s Statement>) {
        for child in &self.children {
            match child {
                Node::Statement(node) => out.push(node.statement),
                Node::Structure(node) => node.collect_statements(out),
            }
        }
    }

    /// Descendant structure nodes named `name`, depth-first, outermost first.
    pub fn find_all(&self, name: &str) -> Vec<&StructureNode<'s>> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a StructureNode<'s>>) {
        for child in &self.children {
            if let Node::Structure(node) = child {
                if node.name() == name {
                    out.push(node);
                }
                node.collect_named(name, out);
            }
        }
    }
}

impl fmt::Debug for StructureNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureNode")
            .field("structure", &self.name())
            .field("children", &self.children)
            .finish()
    }
}

impl Serialize for StructureNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StructureNode", 2)?;
        state.serialize_field("structure", self.name())?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
