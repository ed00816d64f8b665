//! Grammar combinators.
//!
//! Six primitives compose every structure body:
//!
//! | constructor       | matches                                         |
//! |-------------------|-------------------------------------------------|
//! | `seq!(a, b, ..)`  | all sub-matchers in order                       |
//! | `alt!(a, b, ..)`  | the first sub-matcher that succeeds             |
//! | `opt(x)`          | `x` or nothing                                  |
//! | `star(x)`         | `x` zero or more times                          |
//! | `sub(&Rule)`      | another structure, as a nested forest node      |
//! | `sta(KIND)`       | exactly one statement of the given kind         |
//!
//! Matchers are immutable once built and hold no per-match state, so one
//! grammar can serve any number of concurrent matches.

mod render;
mod run;

#[cfg(test)]
mod render_tests;

use std::fmt;

use structura_core::StatementKind;

use crate::error::GrammarError;
use crate::invariants::ensure_matcher;
use crate::structure::{Structure, qualified_name};

/// A composable grammar matcher.
#[derive(Clone)]
pub struct Matcher(pub(crate) Combi);

#[derive(Clone)]
pub(crate) enum Combi {
    Sequence(Vec<Matcher>),
    Alternative(Vec<Matcher>),
    Optional(Box<Matcher>),
    Star(Box<Matcher>),
    /// Resolved through `Structure::matcher` at match time.
    Sub(&'static dyn Structure),
    Statement(StatementKind),
}

impl Matcher {
    /// Sequence of at least two matchers.
    pub fn try_sequence(items: Vec<Matcher>) -> Result<Self, GrammarError> {
        if items.len() < 2 {
            return Err(GrammarError::TooFewMatchers {
                combinator: "Sequence",
                count: items.len(),
            });
        }
        Ok(Self(Combi::Sequence(items)))
    }

    /// Sequence of at least two matchers.
    ///
    /// # Panics
    /// Panics with fewer than two matchers.
    pub fn sequence(items: Vec<Matcher>) -> Self {
        ensure_matcher(Self::try_sequence(items))
    }

    /// Ordered choice between at least two matchers.
    pub fn try_alternative(items: Vec<Matcher>) -> Result<Self, GrammarError> {
        if items.len() < 2 {
            return Err(GrammarError::TooFewMatchers {
                combinator: "Alternative",
                count: items.len(),
            });
        }
        Ok(Self(Combi::Alternative(items)))
    }

    /// Ordered choice between at least two matchers.
    ///
    /// # Panics
    /// Panics with fewer than two matchers.
    pub fn alternative(items: Vec<Matcher>) -> Self {
        ensure_matcher(Self::try_alternative(items))
    }

    /// Every structure and statement kind this matcher references, as
    /// `structure/<Name>` and `statement/<Kind>`, in grammar order.
    ///
    /// Structures are listed by name only, so this terminates on recursive
    /// grammars. Duplicates are kept.
    pub fn using(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_using(&mut out);
        out
    }

    fn collect_using(&self, out: &mut Vec<String>) {
        match &self.0 {
            Combi::Sequence(items) | Combi::Alternative(items) => {
                for item in items {
                    item.collect_using(out);
                }
            }
            Combi::Optional(inner) | Combi::Star(inner) => inner.collect_using(out),
            Combi::Sub(structure) => out.push(qualified_name(*structure)),
            Combi::Statement(kind) => out.push(kind.qualified_name()),
        }
    }

    /// Structures referenced directly through `sub`, in grammar order.
    pub(crate) fn referenced_structures(&self, out: &mut Vec<&'static dyn Structure>) {
        match &self.0 {
            Combi::Sequence(items) | Combi::Alternative(items) => {
                for item in items {
                    item.referenced_structures(out);
                }
            }
            Combi::Optional(inner) | Combi::Star(inner) => inner.referenced_structures(out),
            Combi::Sub(structure) => out.push(*structure),
            Combi::Statement(_) => {}
        }
    }

    /// Name used in "Expected ..." descriptions when an alternative fails
    /// without any branch making progress.
    pub(crate) fn expected_name(&self) -> String {
        match &self.0 {
            Combi::Statement(kind) => kind.name().to_uppercase(),
            Combi::Sub(structure) => structure.name().to_uppercase(),
            Combi::Sequence(items) => items
                .first()
                .map_or_else(String::new, Matcher::expected_name),
            Combi::Alternative(items) => items
                .iter()
                .map(Matcher::expected_name)
                .collect::<Vec<_>>()
                .join(" or "),
            Combi::Optional(inner) | Combi::Star(inner) => inner.expected_name(),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matcher({})", self.to_ebnf())
    }
}

/// Sequence: `seq!(a, b, ...)`. Needs at least two matchers.
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::Matcher::sequence(::std::vec![$($item),*])
    };
}

/// Ordered choice: `alt!(a, b, ...)`. Needs at least two matchers.
#[macro_export]
macro_rules! alt {
    ($($item:expr),* $(,)?) => {
        $crate::Matcher::alternative(::std::vec![$($item),*])
    };
}

/// `begin`, then `body`, then `end`.
pub fn begin_end(begin: Matcher, body: Matcher, end: Matcher) -> Matcher {
    Matcher::sequence(vec![begin, body, end])
}

pub fn opt(matcher: Matcher) -> Matcher {
    Matcher(Combi::Optional(Box::new(matcher)))
}

/// Zero or more repetitions.
///
/// The body must consume input whenever it succeeds; a body that succeeds
/// empty-handed aborts the match with `EngineError::EmptyRepetition`.
pub fn star(matcher: Matcher) -> Matcher {
    Matcher(Combi::Star(Box::new(matcher)))
}

pub fn sub(structure: &'static dyn Structure) -> Matcher {
    Matcher(Combi::Sub(structure))
}

/// Exactly one statement of `kind`.
pub fn sta(kind: StatementKind) -> Matcher {
    Matcher(Combi::Statement(kind))
}
