//! Trace structure matching for debugging.

use std::path::PathBuf;

use structura_core::Colors;
use structura_lib::{PrintTracer, Verbosity};

use super::run_common::{self, PreparedRun, RunOptions};

pub struct TraceArgs {
    pub statements_path: PathBuf,
    pub run: RunOptions,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let PreparedRun { file, parser } = run_common::prepare(&args.statements_path, &args.run);

    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let outcome = match parser.parse_with(&file.statements, &mut tracer) {
        Ok(outcome) => {
            tracer.print();
            outcome
        }
        Err(e) => {
            tracer.print();
            run_common::exit_engine_error(e);
        }
    };

    println!("{}---{}", colors.dim, colors.reset);
    println!(
        "consumed {} of {} statements",
        outcome.consumed(),
        file.statements.len()
    );

    if outcome.diagnostics().has_errors() {
        run_common::print_diagnostics(outcome.diagnostics(), &file, args.color);
        std::process::exit(1);
    }
}
