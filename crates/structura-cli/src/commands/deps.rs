//! Dependency graph and grammar validation.

use structura_core::Colors;

use super::run_common;

pub struct DepsArgs {
    pub root: String,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: DepsArgs) {
    let registry = run_common::load_registry();
    let colors = Colors::new(args.color);

    for (name, dependencies) in registry.dependencies() {
        println!("{}{}{}", colors.blue, name, colors.reset);
        for dependency in &dependencies {
            println!("  {}->{} {}", colors.dim, colors.reset, dependency);
        }
        let dependents = registry.dependents(name);
        if !dependents.is_empty() {
            println!("  {}<-{} {}", colors.dim, colors.reset, dependents.join(", "));
        }
    }

    let diagnostics = registry.validate(&args.root);
    if diagnostics.is_empty() {
        return;
    }

    eprintln!("{}", diagnostics.render());
    if diagnostics.has_errors() || (args.strict && diagnostics.has_warnings()) {
        std::process::exit(1);
    }
}
