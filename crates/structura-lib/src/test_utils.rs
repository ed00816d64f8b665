//! Test grammar and statement helpers.

use crate::{Matcher, Statement, StatementKind, Structure, begin_end, opt, sta, star, sub};
use crate::{alt, seq};

pub const FROM_KW: StatementKind = StatementKind::new("FromKw");
pub const DYNAMIC: StatementKind = StatementKind::new("Dynamic");
pub const TABLE_NAME: StatementKind = StatementKind::new("TableName");
pub const FIELD: StatementKind = StatementKind::new("Field");
pub const OTHER: StatementKind = StatementKind::new("Other");
pub const IF: StatementKind = StatementKind::new("If");
pub const ELSE: StatementKind = StatementKind::new("Else");
pub const END_IF: StatementKind = StatementKind::new("EndIf");
pub const WRITE: StatementKind = StatementKind::new("Write");
pub const DATA: StatementKind = StatementKind::new("Data");

/// Neutral parent for running bare matchers.
pub struct Host;

impl Structure for Host {
    fn name(&self) -> &'static str {
        "Host"
    }

    fn matcher(&self) -> Matcher {
        sta(OTHER)
    }
}

/// Top level: any mix of blocks, writes and declarations.
pub struct Program;

impl Structure for Program {
    fn name(&self) -> &'static str {
        "Program"
    }

    fn matcher(&self) -> Matcher {
        star(alt!(sub(&Block), sta(WRITE), sta(DATA)))
    }
}

/// `IF. [Body] [ELSE. [Body]] ENDIF.`
pub struct Block;

impl Structure for Block {
    fn name(&self) -> &'static str {
        "Block"
    }

    fn matcher(&self) -> Matcher {
        begin_end(
            sta(IF),
            seq!(opt(sub(&Body)), opt(sub(&ElseBranch))),
            sta(END_IF),
        )
    }
}

pub struct ElseBranch;

impl Structure for ElseBranch {
    fn name(&self) -> &'static str {
        "ElseBranch"
    }

    fn matcher(&self) -> Matcher {
        seq!(sta(ELSE), opt(sub(&Body)))
    }
}

/// Recurses back into `Block`.
pub struct Body;

impl Structure for Body {
    fn name(&self) -> &'static str {
        "Body"
    }

    fn matcher(&self) -> Matcher {
        star(alt!(sta(WRITE), sub(&Block)))
    }
}

/// Matches nothing on anything but `WRITE`.
pub struct MaybeWrite;

impl Structure for MaybeWrite {
    fn name(&self) -> &'static str {
        "MaybeWrite"
    }

    fn matcher(&self) -> Matcher {
        opt(sta(WRITE))
    }
}

/// Repetition whose body can succeed empty-handed.
pub struct Spinning;

impl Structure for Spinning {
    fn name(&self) -> &'static str {
        "Spinning"
    }

    fn matcher(&self) -> Matcher {
        star(opt(sta(WRITE)))
    }
}

/// Reaches itself before consuming anything.
pub struct LeftRec;

impl Structure for LeftRec {
    fn name(&self) -> &'static str {
        "LeftRec"
    }

    fn matcher(&self) -> Matcher {
        alt!(seq!(sub(&LeftRec), sta(WRITE)), sta(DATA))
    }
}

/// Statements named after their kind, one per line, with byte spans into
/// the text returned by [`source`].
pub fn statements(kinds: &[StatementKind]) -> Vec<Statement> {
    let mut offset = 0;
    kinds
        .iter()
        .enumerate()
        .map(|(row, kind)| {
            let text = format!("{}.", kind.name().to_uppercase());
            let span = offset..offset + text.len();
            offset = span.end + 1;
            Statement::new(*kind, text).at(span, row)
        })
        .collect()
}

/// Source text the spans from [`statements`] point into.
pub fn source(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(Statement::text)
        .collect::<Vec<_>>()
        .join("\n")
}
