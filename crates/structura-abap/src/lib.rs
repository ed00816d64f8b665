#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A small ABAP grammar for Structura.
//!
//! Covers the block statements that shape a program (conditionals, loops,
//! `CASE`, `FORM`, classes and methods). Everything else is matched as a
//! flat statement under [`Normal`]. Statements the classifier could not
//! place are tagged [`statements::UNKNOWN`] and still parse.

pub mod statements;
mod structures;

#[cfg(test)]
mod lib_tests;

pub use statements::from_name;
pub use structures::{
    Any, Body, Case, ClassDefinition, ClassImplementation, Do, Else, ElseIf, Form, If, Loop,
    Method, Normal, When, While,
};

use structura_lib::{GrammarError, GrammarRegistry, Structure};

/// Root structure of a program.
pub fn root() -> &'static dyn Structure {
    &Any
}

/// Every structure of the grammar, root first.
pub fn all() -> [&'static dyn Structure; 15] {
    [
        &Any,
        &Normal,
        &Body,
        &If,
        &ElseIf,
        &Else,
        &While,
        &Do,
        &Loop,
        &Case,
        &When,
        &Form,
        &ClassDefinition,
        &ClassImplementation,
        &Method,
    ]
}

/// Registry holding [`all`] structures.
pub fn registry() -> Result<GrammarRegistry, GrammarError> {
    GrammarRegistry::from_structures(all())
}
