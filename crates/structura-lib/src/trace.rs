//! Tracing infrastructure for debugging structure matching.
//!
//! # Design: Zero-Cost Abstraction
//!
//! Matchers are generic over the tracer. With `NoopTracer` every hook is an
//! `#[inline(always)]` empty function and the calls compile away. No tracing
//! state lives in the matchers or the match context.
//!
//! `PrintTracer` collects one line per event, indented by structure depth:
//!
//! ```text
//! ▶ If @0
//!   ● If @0
//!   ▶ Body @1
//!     ▶ Normal @1
//!       ● Write @1
//!     ◀ Normal (1)
//!   ◀ Body (1)
//!   ● EndIf @2
//! ◀ If (3)
//! ```

use structura_core::{Colors, Statement, StatementKind};

use crate::result::MatchResult;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Structure enter/exit and matched statements.
    #[default]
    Default,
    /// Also statement mismatches, backtracking and memo hits.
    Verbose,
    /// Everything, with statement text.
    VeryVerbose,
}

/// Hooks called by the matchers while they run.
///
/// - `trace_enter` - before a structure body is matched
/// - `trace_exit` - after a structure body finished, with its result
/// - `trace_statement` - a leaf matcher consumed a statement
/// - `trace_statement_failure` - a leaf matcher rejected the next statement
/// - `trace_backtrack` - an alternative branch failed and the next one is tried
/// - `trace_memo_hit` - a structure result was replayed from the memo table
pub trait Tracer {
    fn trace_enter(&mut self, structure: &'static str, position: usize);

    fn trace_exit(&mut self, structure: &'static str, result: &MatchResult<'_>);

    fn trace_statement(&mut self, statement: &Statement, position: usize);

    fn trace_statement_failure(
        &mut self,
        expected: StatementKind,
        found: Option<&Statement>,
        position: usize,
    );

    fn trace_backtrack(&mut self, position: usize);

    fn trace_memo_hit(&mut self, structure: &'static str, position: usize);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace_enter(&mut self, structure: &'static str, position: usize) {
        (**self).trace_enter(structure, position)
    }

    fn trace_exit(&mut self, structure: &'static str, result: &MatchResult<'_>) {
        (**self).trace_exit(structure, result)
    }

    fn trace_statement(&mut self, statement: &Statement, position: usize) {
        (**self).trace_statement(statement, position)
    }

    fn trace_statement_failure(
        &mut self,
        expected: StatementKind,
        found: Option<&Statement>,
        position: usize,
    ) {
        (**self).trace_statement_failure(expected, found, position)
    }

    fn trace_backtrack(&mut self, position: usize) {
        (**self).trace_backtrack(position)
    }

    fn trace_memo_hit(&mut self, structure: &'static str, position: usize) {
        (**self).trace_memo_hit(structure, position)
    }
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _structure: &'static str, _position: usize) {}

    #[inline(always)]
    fn trace_exit(&mut self, _structure: &'static str, _result: &MatchResult<'_>) {}

    #[inline(always)]
    fn trace_statement(&mut self, _statement: &Statement, _position: usize) {}

    #[inline(always)]
    fn trace_statement_failure(
        &mut self,
        _expected: StatementKind,
        _found: Option<&Statement>,
        _position: usize,
    ) {
    }

    #[inline(always)]
    fn trace_backtrack(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_memo_hit(&mut self, _structure: &'static str, _position: usize) {}
}

/// Tracer that collects a readable log of the match.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Current structure nesting, drives indentation.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity != Verbosity::Default
    }

    fn push(&mut self, content: String) {
        self.lines
            .push(format!("{:indent$}{}", "", content, indent = self.depth * 2));
    }

    fn format_position(&self, position: usize) -> String {
        let c = self.colors;
        format!("{}@{}{}", c.dim, position, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, structure: &'static str, position: usize) {
        let c = self.colors;
        let pos = self.format_position(position);
        self.push(format!("▶ {}{}{} {}", c.blue, structure, c.reset, pos));
        self.depth += 1;
    }

    fn trace_exit(&mut self, structure: &'static str, result: &MatchResult<'_>) {
        let c = self.colors;
        self.depth = self.depth.saturating_sub(1);
        if result.error {
            self.push(format!(
                "◀ {}{}{}: {}{}{}",
                c.blue, structure, c.reset, c.red, result.error_description, c.reset
            ));
        } else {
            self.push(format!(
                "◀ {}{}{} ({})",
                c.blue,
                structure,
                c.reset,
                result.consumed()
            ));
        }
    }

    fn trace_statement(&mut self, statement: &Statement, position: usize) {
        let c = self.colors;
        let pos = self.format_position(position);
        let mut line = format!("● {}{}{} {}", c.green, statement.kind(), c.reset, pos);
        if self.verbosity == Verbosity::VeryVerbose {
            line.push_str(&format!(" {}{:?}{}", c.dim, statement.text(), c.reset));
        }
        self.push(line);
    }

    fn trace_statement_failure(
        &mut self,
        expected: StatementKind,
        found: Option<&Statement>,
        position: usize,
    ) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let pos = self.format_position(position);
        let mut line = format!("○ {}{}{} {}", c.red, expected, c.reset, pos);
        if self.verbosity == Verbosity::VeryVerbose {
            match found {
                Some(stmt) => line.push_str(&format!(" found {}", stmt.kind())),
                None => line.push_str(" at end of input"),
            }
        }
        self.push(line);
    }

    fn trace_backtrack(&mut self, position: usize) {
        if !self.verbose() {
            return;
        }
        let pos = self.format_position(position);
        self.push(format!("❮❮❮ {}", pos));
    }

    fn trace_memo_hit(&mut self, structure: &'static str, position: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let pos = self.format_position(position);
        self.push(format!("⬥ {}{}{} {}", c.blue, structure, c.reset, pos));
    }
}
