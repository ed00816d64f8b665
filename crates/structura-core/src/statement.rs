//! Classified statements.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

/// Kind tag of a classified statement (e.g. `If`, `EndIf`, `Data`).
///
/// Kinds are compared by name, so two kinds built from the same string are
/// the same kind. Grammar code usually declares them as constants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatementKind(&'static str);

impl StatementKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }

    /// Cross-reference name, `statement/<Name>`.
    pub fn qualified_name(self) -> String {
        format!("statement/{}", self.0)
    }
}

impl fmt::Debug for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatementKind({})", self.0)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for StatementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One classified statement: its kind, its source text and where it came from.
///
/// Statements are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    kind: StatementKind,
    text: String,
    /// Byte range in the original source.
    span: Range<usize>,
    /// Zero-based line of the first token.
    row: usize,
}

impl Statement {
    /// Create a statement without position information.
    pub fn new(kind: StatementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: 0..0,
            row: 0,
        }
    }

    /// Attach source position information.
    pub fn at(mut self, span: Range<usize>, row: usize) -> Self {
        self.span = span;
        self.row = row;
        self
    }

    #[inline]
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Whether this statement was classified as `kind`.
    #[inline]
    pub fn is(&self, kind: StatementKind) -> bool {
        self.kind == kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn row(&self) -> usize {
        self.row
    }
}
