//! Match input cursor and match results.

use std::fmt;

use structura_core::Statement;

/// Immutable statement slice plus a cursor.
///
/// Matchers never mutate the statements they are given; consuming input means
/// returning a cursor further along the same slice. Backtracking is just
/// reusing an older cursor.
#[derive(Clone, Copy)]
pub struct Input<'s> {
    statements: &'s [Statement],
    position: usize,
}

impl<'s> Input<'s> {
    pub fn new(statements: &'s [Statement]) -> Self {
        Self {
            statements,
            position: 0,
        }
    }

    /// Index of the next unconsumed statement.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Statements not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'s [Statement] {
        &self.statements[self.position..]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position >= self.statements.len()
    }

    #[inline]
    pub fn first(&self) -> Option<&'s Statement> {
        self.statements.get(self.position)
    }

    /// The whole slice this cursor walks over.
    pub fn statements(&self) -> &'s [Statement] {
        self.statements
    }

    pub(crate) fn advance(self, count: usize) -> Self {
        Self {
            statements: self.statements,
            position: (self.position + count).min(self.statements.len()),
        }
    }

    /// Statements between `self` and a later cursor over the same slice.
    pub(crate) fn until(self, end: Input<'s>) -> &'s [Statement] {
        &self.statements[self.position..end.position]
    }
}

impl PartialEq for Input<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.statements, other.statements) && self.position == other.position
    }
}

impl Eq for Input<'_> {}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("position", &self.position)
            .field("remaining", &self.remaining().len())
            .finish()
    }
}

/// Outcome of running one matcher.
///
/// When `error` is set, `matched` is empty and `unmatched` is the input the
/// matcher was given: a failing matcher never consumes anything.
///
/// `error_matched` counts statements consumed before the failure. It is only
/// meaningful when comparing sibling alternatives, where the branch that got
/// further is taken as the most likely intent. That is a best-effort
/// heuristic, not a guarantee that the reported failure is the right one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult<'s> {
    pub matched: &'s [Statement],
    pub unmatched: Input<'s>,
    pub error: bool,
    pub error_description: String,
    pub error_matched: usize,
}

impl<'s> MatchResult<'s> {
    /// Success consuming everything between `start` and `rest`.
    pub(crate) fn success(start: Input<'s>, rest: Input<'s>) -> Self {
        Self {
            matched: start.until(rest),
            unmatched: rest,
            error: false,
            error_description: String::new(),
            error_matched: 0,
        }
    }

    pub(crate) fn failure(
        input: Input<'s>,
        description: impl Into<String>,
        progress: usize,
    ) -> Self {
        Self {
            matched: &input.remaining()[..0],
            unmatched: input,
            error: true,
            error_description: description.into(),
            error_matched: progress,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.error
    }

    /// Number of statements consumed.
    pub fn consumed(&self) -> usize {
        self.matched.len()
    }
}
