//! Grammar documentation output: railroad diagram descriptions and EBNF.
//!
//! Sub-rules render by name only, so both renderings terminate on
//! recursive grammars.

use super::{Combi, Matcher};

impl Matcher {
    /// Railroad diagram description, e.g.
    /// `Railroad.Sequence(Railroad.Terminal('If', {href: '#/statement/If'}),...)`.
    pub fn to_railroad(&self) -> String {
        match &self.0 {
            Combi::Sequence(items) => format!("Railroad.Sequence({})", railroad_list(items)),
            Combi::Alternative(items) => {
                format!("Railroad.Choice(0, {})", railroad_list(items))
            }
            Combi::Optional(inner) => format!("Railroad.Optional({})", inner.to_railroad()),
            Combi::Star(inner) => format!("Railroad.ZeroOrMore({})", inner.to_railroad()),
            Combi::Sub(structure) => {
                let name = structure.name();
                format!("Railroad.NonTerminal('{name}', {{href: '#/structure/{name}'}})")
            }
            Combi::Statement(kind) => {
                let name = kind.name();
                format!("Railroad.Terminal('{name}', {{href: '#/statement/{name}'}})")
            }
        }
    }

    /// EBNF right-hand side: structures by name, statement kinds quoted.
    pub fn to_ebnf(&self) -> String {
        match &self.0 {
            Combi::Sequence(items) => items
                .iter()
                .map(|item| match item.0 {
                    Combi::Alternative(_) => format!("({})", item.to_ebnf()),
                    _ => item.to_ebnf(),
                })
                .collect::<Vec<_>>()
                .join(" "),
            Combi::Alternative(items) => items
                .iter()
                .map(Matcher::to_ebnf)
                .collect::<Vec<_>>()
                .join(" | "),
            Combi::Optional(inner) => format!("{}?", inner.ebnf_operand()),
            Combi::Star(inner) => format!("{}*", inner.ebnf_operand()),
            Combi::Sub(structure) => structure.name().to_string(),
            Combi::Statement(kind) => format!("'{}'", kind.name()),
        }
    }

    /// Operand of a postfix operator; compound expressions need parentheses.
    fn ebnf_operand(&self) -> String {
        match self.0 {
            Combi::Sequence(_) | Combi::Alternative(_) => format!("({})", self.to_ebnf()),
            _ => self.to_ebnf(),
        }
    }
}

fn railroad_list(items: &[Matcher]) -> String {
    items
        .iter()
        .map(Matcher::to_railroad)
        .collect::<Vec<_>>()
        .join(",")
}
