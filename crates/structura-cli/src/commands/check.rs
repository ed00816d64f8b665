use std::path::PathBuf;

use super::run_common::{self, PreparedRun, RunOptions};

pub struct CheckArgs {
    pub statements_path: PathBuf,
    pub run: RunOptions,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let PreparedRun { file, parser } = run_common::prepare(&args.statements_path, &args.run);

    let outcome = match parser.parse(&file.statements) {
        Ok(outcome) => outcome,
        Err(e) => run_common::exit_engine_error(e),
    };

    if outcome.diagnostics().has_errors() {
        run_common::print_diagnostics(outcome.diagnostics(), &file, args.color);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
