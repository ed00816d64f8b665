#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Structura crates.
//!
//! Two pieces live here:
//! - **Statements**: the already-classified units the structure matcher consumes.
//!   Tokenization and classification happen upstream; this crate only models
//!   the result.
//! - **Colors**: the ANSI palette used by dumps, traces and the CLI.

pub mod colors;
mod statement;

#[cfg(test)]
mod statement_tests;

pub use colors::Colors;
pub use statement::{Statement, StatementKind};
