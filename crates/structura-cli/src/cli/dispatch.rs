//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use structura_lib::{MatchLimits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::deps::DepsArgs;
use crate::commands::docs::DocsArgs;
use crate::commands::run_common::RunOptions;
use crate::commands::trace::TraceArgs;
use crate::commands::tree::TreeArgs;

/// Runtime flags shared by check/tree/trace.
#[derive(Debug, PartialEq, Eq)]
pub struct RunParams {
    pub root: String,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub memo: bool,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let defaults = MatchLimits::default();
        Self {
            root: m
                .get_one::<String>("root")
                .cloned()
                .unwrap_or_else(|| "Any".to_owned()),
            fuel: m
                .get_one::<u32>("fuel")
                .copied()
                .unwrap_or(defaults.get_exec_fuel()),
            recursion_limit: m
                .get_one::<u32>("recursion_limit")
                .copied()
                .unwrap_or(defaults.get_recursion_limit()),
            memo: m.get_flag("memo"),
        }
    }
}

impl From<RunParams> for RunOptions {
    fn from(p: RunParams) -> Self {
        Self {
            root: p.root,
            limits: MatchLimits::new()
                .exec_fuel(p.fuel)
                .recursion_limit(p.recursion_limit)
                .memoize(p.memo),
        }
    }
}

pub struct CheckParams {
    pub statements_path: PathBuf,
    pub run: RunParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statements_path: statements_path(m),
            run: RunParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            statements_path: p.statements_path,
            run: p.run.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub statements_path: PathBuf,
    pub run: RunParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statements_path: statements_path(m),
            run: RunParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            statements_path: p.statements_path,
            run: p.run.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub statements_path: PathBuf,
    pub run: RunParams,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statements_path: statements_path(m),
            run: RunParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            statements_path: p.statements_path,
            run: p.run.into(),
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DocsParams {
    pub structure: Option<String>,
    pub ebnf: bool,
    pub color: ColorChoice,
}

impl DocsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            structure: m.get_one::<String>("structure").cloned(),
            ebnf: m.get_flag("ebnf"),
            color: parse_color(m),
        }
    }
}

impl From<DocsParams> for DocsArgs {
    fn from(p: DocsParams) -> Self {
        Self {
            structure: p.structure,
            ebnf: p.ebnf,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DepsParams {
    pub root: String,
    pub strict: bool,
    pub color: ColorChoice,
}

impl DepsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: m
                .get_one::<String>("root")
                .cloned()
                .unwrap_or_else(|| "Any".to_owned()),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<DepsParams> for DepsArgs {
    fn from(p: DepsParams) -> Self {
        Self {
            root: p.root,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn statements_path(m: &ArgMatches) -> PathBuf {
    // Required by clap; the fallback reads stdin.
    m.get_one::<PathBuf>("statements_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
