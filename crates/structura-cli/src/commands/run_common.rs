//! Shared setup for commands that run a match.

use std::path::Path;

use structura_lib::{Diagnostics, EngineError, GrammarRegistry, MatchLimits, Parser, Structure};

use super::loader::{StatementFile, load_statements};

/// Root structure and limits for a match run.
#[derive(Debug)]
pub struct RunOptions {
    pub root: String,
    pub limits: MatchLimits,
}

pub struct PreparedRun {
    pub file: StatementFile,
    pub parser: Parser,
}

/// Load the statement file and build a parser, exiting on failure.
pub fn prepare(statements_path: &Path, run: &RunOptions) -> PreparedRun {
    let registry = load_registry();
    let root = resolve_structure(&registry, &run.root);

    let file = match load_statements(statements_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    PreparedRun {
        file,
        parser: Parser::new(root).limits(run.limits),
    }
}

pub fn load_registry() -> GrammarRegistry {
    match structura_abap::registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

pub fn resolve_structure(registry: &GrammarRegistry, name: &str) -> &'static dyn Structure {
    if let Some(root) = registry.get(name) {
        return root;
    }

    eprintln!("error: unknown structure '{}'", name);
    eprintln!();
    eprintln!(
        "Available structures: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );
    std::process::exit(1);
}

/// Print diagnostics to stderr, annotated with the statement file.
pub fn print_diagnostics(diagnostics: &Diagnostics, file: &StatementFile, color: bool) {
    if diagnostics.is_empty() {
        return;
    }
    let rendered = diagnostics
        .printer()
        .source(&file.source)
        .path(&file.name)
        .colored(color)
        .render();
    eprintln!("{}", rendered);
}

/// Report a fatal engine error and exit.
pub fn exit_engine_error(e: EngineError) -> ! {
    eprintln!("runtime error: {}", e);
    std::process::exit(2);
}
