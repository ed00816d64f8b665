//! Railroad diagrams and EBNF for the grammar.

use structura_core::Colors;
use structura_lib::Structure;

use super::run_common;

pub struct DocsArgs {
    pub structure: Option<String>,
    pub ebnf: bool,
    pub color: bool,
}

pub fn run(args: DocsArgs) {
    let registry = run_common::load_registry();
    let colors = Colors::new(args.color);

    if let Some(name) = &args.structure {
        let name = run_common::resolve_structure(&registry, name).name();
        let rendered = if args.ebnf {
            registry.ebnf_rule(name)
        } else {
            registry.railroad(name)
        };
        if let Some(text) = rendered {
            println!("{}", text);
        }
        return;
    }

    if args.ebnf {
        println!("{}", registry.ebnf());
        return;
    }

    for name in registry.names() {
        if let Some(railroad) = registry.railroad(name) {
            println!("{}{}{}", colors.blue, name, colors.reset);
            println!("{}", railroad);
        }
    }
}
