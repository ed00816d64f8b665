//! Per-match state: fuel, recursion depth, memo table and tracer.
//!
//! Matchers themselves are stateless; everything that changes while a match
//! runs lives here, one context per top-level match.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::limits::MatchLimits;
use crate::node::{Node, StructureNode};
use crate::result::{Input, MatchResult};
use crate::structure::Structure;
use crate::trace::{NoopTracer, Tracer};

/// Cached outcome of one structure at one input position.
#[derive(Clone)]
struct Memo<'s> {
    result: MatchResult<'s>,
    /// The attached node, present only when the structure succeeded.
    node: Option<StructureNode<'s>>,
}

/// Mutable state threaded through a single match.
pub struct MatchContext<'s, T: Tracer = NoopTracer> {
    limits: MatchLimits,
    fuel: u32,
    depth: u32,
    /// One past the furthest statement matched so far.
    furthest: usize,
    memo: HashMap<(&'static str, usize), Memo<'s>>,
    pub(crate) tracer: T,
}

impl<'s> MatchContext<'s, NoopTracer> {
    pub fn new(limits: MatchLimits) -> Self {
        Self::with_tracer(limits, NoopTracer)
    }
}

impl<'s, T: Tracer> MatchContext<'s, T> {
    pub fn with_tracer(limits: MatchLimits, tracer: T) -> Self {
        Self {
            limits,
            fuel: limits.exec_fuel,
            depth: 0,
            furthest: 0,
            memo: HashMap::new(),
            tracer,
        }
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Fuel left for this match.
    pub fn remaining_fuel(&self) -> u32 {
        self.fuel
    }

    /// One past the furthest statement any leaf matcher has consumed.
    ///
    /// Progress counts in a `MatchResult` are relative to the failing
    /// matcher's own input; this is the absolute high-water mark.
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub(crate) fn record_statement(&mut self, position: usize) {
        self.furthest = self.furthest.max(position + 1);
    }

    /// Charge one matcher invocation.
    pub(crate) fn consume_fuel(&mut self) -> Result<(), EngineError> {
        if self.fuel == 0 {
            return Err(EngineError::ExecFuelExhausted);
        }
        self.fuel -= 1;
        Ok(())
    }

    /// Match `structure`'s body at `input`, building children into `node`.
    ///
    /// Used both for `sub` references and for the root structure of a parse.
    pub(crate) fn run_structure(
        &mut self,
        structure: &'static dyn Structure,
        input: Input<'s>,
        node: &mut StructureNode<'s>,
    ) -> Result<MatchResult<'s>, EngineError> {
        if self.depth >= self.limits.recursion_limit {
            return Err(EngineError::RecursionLimitExceeded);
        }
        self.depth += 1;
        self.tracer.trace_enter(structure.name(), input.position());

        let result = structure.matcher().run_with(input, node, self);

        self.depth -= 1;
        let result = result?;
        self.tracer.trace_exit(structure.name(), &result);
        Ok(result)
    }

    /// Match a `sub` reference: run the structure under a fresh node and
    /// attach that node to `parent` if at least one statement was consumed.
    pub(crate) fn run_sub(
        &mut self,
        structure: &'static dyn Structure,
        input: Input<'s>,
        parent: &mut StructureNode<'s>,
    ) -> Result<MatchResult<'s>, EngineError> {
        let key = (structure.name(), input.position());
        if self.limits.memoize
            && let Some(memo) = self.memo.get(&key)
        {
            self.tracer.trace_memo_hit(structure.name(), input.position());
            let memo = memo.clone();
            if let Some(node) = memo.node {
                parent.push(Node::Structure(node));
            }
            return Ok(memo.result);
        }

        let mut node = StructureNode::new(structure);
        let mut result = self.run_structure(structure, input, &mut node)?;

        let attached = if result.error {
            None
        } else if result.matched.is_empty() {
            // Succeeding without consuming anything would nest empty
            // structures into the forest, so it counts as a failure.
            result.error = true;
            if result.error_description.is_empty() {
                result.error_description =
                    format!("Expected {}", structure.name().to_uppercase());
            }
            None
        } else {
            let cached = self.limits.memoize.then(|| node.clone());
            parent.push(Node::Structure(node));
            cached
        };

        if self.limits.memoize {
            self.memo.insert(
                key,
                Memo {
                    result: result.clone(),
                    node: attached,
                },
            );
        }

        Ok(result)
    }
}
