//! Parse driver: runs a root structure over a statement list and turns the
//! outcome into a forest plus diagnostics.

use structura_core::Statement;

use crate::context::MatchContext;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::EngineError;
use crate::limits::MatchLimits;
use crate::node::StructureNode;
use crate::result::{Input, MatchResult};
use crate::structure::Structure;
use crate::trace::{NoopTracer, Tracer};

/// Matches statement lists against a root structure.
///
/// The root structure's own node stands in as the root of the forest, so a
/// successful parse of `Any` yields a tree whose top node is `Any`.
#[derive(Clone, Copy)]
pub struct Parser {
    root: &'static dyn Structure,
    limits: MatchLimits,
}

impl Parser {
    pub fn new(root: &'static dyn Structure) -> Self {
        Self {
            root,
            limits: MatchLimits::default(),
        }
    }

    pub fn limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn root(&self) -> &'static dyn Structure {
        self.root
    }

    pub fn parse<'s>(&self, statements: &'s [Statement]) -> Result<ParseOutcome<'s>, EngineError> {
        self.parse_with(statements, NoopTracer)
    }

    /// Parse while reporting match events to `tracer`.
    ///
    /// Pass `&mut tracer` to keep the tracer for inspection afterwards.
    pub fn parse_with<'s, T: Tracer>(
        &self,
        statements: &'s [Statement],
        tracer: T,
    ) -> Result<ParseOutcome<'s>, EngineError> {
        let mut ctx = MatchContext::with_tracer(self.limits, tracer);
        let mut root = StructureNode::new(self.root);
        let result = ctx.run_structure(self.root, Input::new(statements), &mut root)?;

        let mut diagnostics = Diagnostics::new();
        if result.error {
            report_failure(&mut diagnostics, statements, ctx.furthest(), &result);
        } else if let Some(next) = result.unmatched.first() {
            diagnostics
                .report(DiagnosticKind::UnexpectedStatement, next.span())
                .message(next.kind().name())
                .emit();
        }

        Ok(ParseOutcome {
            root,
            result,
            diagnostics,
        })
    }
}

/// Anchor a syntax error at the last statement matched before the failure,
/// pointing at the statement that could not be matched.
fn report_failure(
    diagnostics: &mut Diagnostics,
    statements: &[Statement],
    furthest: usize,
    result: &MatchResult<'_>,
) {
    let anchor = furthest
        .checked_sub(1)
        .and_then(|index| statements.get(index))
        .or_else(|| statements.first());
    let range = anchor.map_or(0..0, Statement::span);

    let mut builder = diagnostics.report(DiagnosticKind::SyntaxError, range);
    if !result.error_description.is_empty() {
        builder = builder.message(result.error_description.as_str());
    }
    if furthest > 0
        && let Some(found) = statements.get(furthest)
    {
        builder = builder.related_to(format!("found `{}`", found.kind()), found.span());
    }
    builder.emit();
}

/// Result of a parse: the forest, the root match result and diagnostics.
#[derive(Debug)]
pub struct ParseOutcome<'s> {
    root: StructureNode<'s>,
    result: MatchResult<'s>,
    diagnostics: Diagnostics,
}

impl<'s> ParseOutcome<'s> {
    /// Root of the forest. Empty when the parse failed.
    pub fn root(&self) -> &StructureNode<'s> {
        &self.root
    }

    pub fn into_root(self) -> StructureNode<'s> {
        self.root
    }

    /// Match result of the root structure.
    pub fn result(&self) -> &MatchResult<'s> {
        &self.result
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of statements consumed by the root structure.
    pub fn consumed(&self) -> usize {
        self.result.consumed()
    }

    /// Whether every statement was matched.
    pub fn is_complete(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}
