//! Print the parse forest of a statement file.

use std::path::PathBuf;

use structura_core::Colors;

use super::run_common::{self, PreparedRun, RunOptions};

pub struct TreeArgs {
    pub statements_path: PathBuf,
    pub run: RunOptions,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let PreparedRun { file, parser } = run_common::prepare(&args.statements_path, &args.run);

    let outcome = match parser.parse(&file.statements) {
        Ok(outcome) => outcome,
        Err(e) => run_common::exit_engine_error(e),
    };

    // A failed parse leaves the root empty; only the diagnostics are useful.
    if !outcome.result().error {
        if args.json {
            match outcome.root().to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(2);
                }
            }
        } else {
            print!("{}", outcome.root().dump_colored(Colors::new(args.color)));
        }
    }

    run_common::print_diagnostics(outcome.diagnostics(), &file, args.color);
    if outcome.diagnostics().has_errors() {
        std::process::exit(1);
    }
}
