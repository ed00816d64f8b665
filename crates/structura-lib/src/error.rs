//! Errors raised by grammar construction and by matching.
//!
//! Ordinary match failures are not errors: they are `MatchResult`s with
//! `error` set. The enums here cover what cannot be recovered from.

/// Fatal errors that abort a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A repetition body succeeded without consuming a statement.
    /// Continuing would loop forever, so the grammar is rejected.
    #[error("repetition in structure `{structure}` matched without consuming a statement")]
    EmptyRepetition { structure: &'static str },

    /// Execution fuel exhausted (too many matcher invocations).
    #[error("match execution limit exceeded")]
    ExecFuelExhausted,

    /// Too many nested structure invocations.
    #[error("match recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Errors in grammar authoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("{combinator} needs at least two sub-matchers, got {count}")]
    TooFewMatchers {
        combinator: &'static str,
        count: usize,
    },

    #[error("structure `{0}` is already registered")]
    DuplicateStructure(&'static str),
}
