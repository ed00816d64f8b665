//! Structura: ordered-choice structure matching over classified statements.
//!
//! Grammars are written as [`Structure`]s, each exposing one [`Matcher`]
//! built from six combinators. A [`Parser`] runs a root structure over a
//! statement list and returns the parse forest plus diagnostics.
//!
//! # Example
//!
//! ```
//! use structura_lib::{Matcher, Parser, Statement, StatementKind, Structure, seq, sta, star};
//!
//! const DATA: StatementKind = StatementKind::new("Data");
//! const WRITE: StatementKind = StatementKind::new("Write");
//!
//! struct Program;
//!
//! impl Structure for Program {
//!     fn name(&self) -> &'static str {
//!         "Program"
//!     }
//!
//!     fn matcher(&self) -> Matcher {
//!         seq!(star(sta(DATA)), sta(WRITE))
//!     }
//! }
//!
//! let statements = vec![
//!     Statement::new(DATA, "DATA x TYPE i."),
//!     Statement::new(WRITE, "WRITE x."),
//! ];
//! let outcome = Parser::new(&Program).parse(&statements).expect("within limits");
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.consumed(), 2);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod analysis;
mod combi;
mod context;
pub mod diagnostics;
mod dump;
mod error;
mod invariants;
mod limits;
mod node;
mod parser;
mod registry;
mod result;
mod structure;
pub mod trace;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod test_utils;

pub use combi::{Matcher, begin_end, opt, star, sta, sub};
pub use context::MatchContext;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use error::{EngineError, GrammarError};
pub use limits::MatchLimits;
pub use node::{Node, StatementNode, StructureNode};
pub use parser::{ParseOutcome, Parser};
pub use registry::GrammarRegistry;
pub use result::{Input, MatchResult};
pub use structure::{Structure, qualified_name};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

pub use structura_core::{Colors, Statement, StatementKind};
