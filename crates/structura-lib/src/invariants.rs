//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::GrammarError;
use crate::combi::Matcher;

/// Unwrap a grammar construction result.
///
/// A malformed combinator is a bug in the grammar definition, so it aborts
/// grammar construction instead of surfacing at match time.
pub(crate) fn ensure_matcher(result: Result<Matcher, GrammarError>) -> Matcher {
    result.unwrap_or_else(|err| panic!("malformed grammar: {err}"))
}
