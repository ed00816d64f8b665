mod cli;
mod commands;

use cli::{CheckParams, DepsParams, DocsParams, TraceParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("docs", m)) => {
            let params = DocsParams::from_matches(m);
            commands::docs::run(params.into());
        }
        Some(("deps", m)) => {
            let params = DepsParams::from_matches(m);
            commands::deps::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
