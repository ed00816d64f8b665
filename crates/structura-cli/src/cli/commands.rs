//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Commands that run a match share the runtime flags.

use clap::Command;

use super::args::*;

/// Add the flags that configure a match run.
fn with_runtime_args(cmd: Command) -> Command {
    cmd.arg(root_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(memo_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("structura")
        .about("Match classified ABAP statements against grammar structures")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(trace_command())
        .subcommand(docs_command())
        .subcommand(deps_command())
}

/// Parse a statement file and report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Parse a statement file and report syntax errors")
        .after_help(
            r#"EXAMPLES:
  structura check demos/report.stmt              # silent on success
  structura check demos/report.stmt --root Form  # match a single FORM"#,
        )
        .arg(statements_path_arg())
        .arg(color_arg());

    with_runtime_args(cmd)
}

/// Print the parse forest.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the parse forest of a statement file")
        .after_help(
            r#"EXAMPLES:
  structura tree demos/report.stmt          # indented tree
  structura tree demos/report.stmt --json   # JSON forest"#,
        )
        .arg(statements_path_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_runtime_args(cmd)
}

/// Trace matcher execution.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace structure matching for debugging")
        .after_help(
            r#"EXAMPLES:
  structura trace demos/report.stmt         # structures and matches
  structura trace demos/report.stmt -vv     # also mismatches and backtracking"#,
        )
        .arg(statements_path_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    with_runtime_args(cmd)
}

/// Railroad diagrams or EBNF of the grammar.
pub fn docs_command() -> Command {
    Command::new("docs")
        .about("Print railroad diagrams or EBNF of the grammar")
        .after_help(
            r#"EXAMPLES:
  structura docs                # railroad diagram for every structure
  structura docs If --ebnf      # one EBNF rule"#,
        )
        .arg(structure_arg())
        .arg(ebnf_arg())
        .arg(color_arg())
}

/// Dependency graph and grammar validation.
pub fn deps_command() -> Command {
    Command::new("deps")
        .about("Print the dependency graph and validate the grammar")
        .arg(root_arg())
        .arg(strict_arg())
        .arg(color_arg())
}
