//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Statement file (positional, `-` for stdin).
pub fn statements_path_arg() -> Arg {
    Arg::new("statements_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Statement file, one classified statement per line ('-' for stdin)")
}

/// Structure to document (positional, optional).
pub fn structure_arg() -> Arg {
    Arg::new("structure")
        .value_name("STRUCTURE")
        .help("Structure name (all structures if omitted)")
}

/// Root structure (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("NAME")
        .default_value("Any")
        .help("Structure to match from")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output the forest as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output the forest as JSON")
}

/// EBNF instead of railroad diagrams (--ebnf).
pub fn ebnf_arg() -> Arg {
    Arg::new("ebnf")
        .long("ebnf")
        .action(ArgAction::SetTrue)
        .help("Print EBNF rules instead of railroad diagrams")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Maximum matcher invocations")
}

/// Nesting limit for structure calls (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting of structure calls")
}

/// Memoize structure results (--memo).
pub fn memo_arg() -> Arg {
    Arg::new("memo")
        .long("memo")
        .action(ArgAction::SetTrue)
        .help("Cache structure results by input position")
}
