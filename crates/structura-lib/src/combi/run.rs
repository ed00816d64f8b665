//! Matching.
//!
//! Every primitive upholds the same failure contract: a failing matcher
//! returns its own input as `unmatched`, consumes nothing, and leaves the
//! parent node exactly as it found it. Sequence and repetition record the
//! parent's child count before running and truncate back to it on failure.

use structura_core::StatementKind;

use super::{Combi, Matcher};
use crate::context::MatchContext;
use crate::error::EngineError;
use crate::limits::MatchLimits;
use crate::node::{Node, StatementNode, StructureNode};
use crate::result::{Input, MatchResult};
use crate::trace::Tracer;

impl Matcher {
    /// Match against `input`, attaching nodes to `parent`.
    ///
    /// Uses default limits and no tracing. See [`Matcher::run_with`].
    pub fn run<'s>(
        &self,
        input: Input<'s>,
        parent: &mut StructureNode<'s>,
    ) -> Result<MatchResult<'s>, EngineError> {
        let mut ctx = MatchContext::new(MatchLimits::default());
        self.run_with(input, parent, &mut ctx)
    }

    /// Match against `input` within an existing match context.
    ///
    /// `Ok` carries both successes and ordinary failures; `Err` is reserved
    /// for fatal conditions (fuel, recursion, empty repetition).
    pub fn run_with<'s, T: Tracer>(
        &self,
        input: Input<'s>,
        parent: &mut StructureNode<'s>,
        ctx: &mut MatchContext<'s, T>,
    ) -> Result<MatchResult<'s>, EngineError> {
        ctx.consume_fuel()?;
        match &self.0 {
            Combi::Sequence(items) => run_sequence(items, input, parent, ctx),
            Combi::Alternative(items) => run_alternative(items, input, parent, ctx),
            Combi::Optional(inner) => {
                let mut result = inner.run_with(input, parent, ctx)?;
                result.error = false;
                Ok(result)
            }
            Combi::Star(body) => run_star(body, input, parent, ctx),
            Combi::Sub(structure) => ctx.run_sub(*structure, input, parent),
            Combi::Statement(kind) => Ok(run_statement(*kind, input, parent, ctx)),
        }
    }
}

fn run_sequence<'s, T: Tracer>(
    items: &[Matcher],
    input: Input<'s>,
    parent: &mut StructureNode<'s>,
    ctx: &mut MatchContext<'s, T>,
) -> Result<MatchResult<'s>, EngineError> {
    let mark = parent.len();
    let mut rest = input;

    for item in items {
        let result = item.run_with(rest, parent, ctx)?;
        if result.error {
            parent.truncate(mark);
            let progress = rest.position() - input.position();
            return Ok(MatchResult::failure(
                input,
                result.error_description,
                progress,
            ));
        }
        rest = result.unmatched;
    }

    Ok(MatchResult::success(input, rest))
}

fn run_alternative<'s, T: Tracer>(
    items: &[Matcher],
    input: Input<'s>,
    parent: &mut StructureNode<'s>,
    ctx: &mut MatchContext<'s, T>,
) -> Result<MatchResult<'s>, EngineError> {
    let mut best_progress = 0;
    let mut best_description = String::new();

    for item in items {
        let result = item.run_with(input, parent, ctx)?;
        if !result.error {
            return Ok(result);
        }
        ctx.tracer.trace_backtrack(input.position());
        // Strictly greater: the first branch reaching the maximum keeps it.
        if result.error_matched > best_progress {
            best_progress = result.error_matched;
            best_description = result.error_description;
        }
    }

    if best_progress == 0 {
        let names: Vec<String> = items.iter().map(Matcher::expected_name).collect();
        return Ok(MatchResult::failure(
            input,
            format!("Expected {}", names.join(" or ")),
            0,
        ));
    }

    Ok(MatchResult::failure(input, best_description, best_progress))
}

fn run_star<'s, T: Tracer>(
    body: &Matcher,
    input: Input<'s>,
    parent: &mut StructureNode<'s>,
    ctx: &mut MatchContext<'s, T>,
) -> Result<MatchResult<'s>, EngineError> {
    let mark = parent.len();
    let mut rest = input;

    loop {
        if rest.is_empty() {
            return Ok(MatchResult::success(input, rest));
        }

        let result = body.run_with(rest, parent, ctx)?;
        if result.error {
            if result.error_matched > 0 {
                // A half-matched element is malformed, not the end of the list.
                parent.truncate(mark);
                return Ok(MatchResult::failure(
                    input,
                    result.error_description,
                    result.error_matched,
                ));
            }
            return Ok(MatchResult::success(input, rest));
        }

        if result.unmatched.position() == rest.position() {
            return Err(EngineError::EmptyRepetition {
                structure: parent.name(),
            });
        }
        rest = result.unmatched;
    }
}

fn run_statement<'s, T: Tracer>(
    kind: StatementKind,
    input: Input<'s>,
    parent: &mut StructureNode<'s>,
    ctx: &mut MatchContext<'s, T>,
) -> MatchResult<'s> {
    match input.first() {
        Some(statement) if statement.is(kind) => {
            ctx.tracer.trace_statement(statement, input.position());
            ctx.record_statement(input.position());
            parent.push(Node::Statement(StatementNode::new(
                statement,
                input.position(),
            )));
            MatchResult::success(input, input.advance(1))
        }
        found => {
            ctx.tracer
                .trace_statement_failure(kind, found, input.position());
            let description = format!("Expected {}", kind.name().to_uppercase());
            MatchResult::failure(input, description, 0)
        }
    }
}
