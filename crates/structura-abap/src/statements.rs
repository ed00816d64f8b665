//! Statement kinds produced by the ABAP classifier.

use structura_core::StatementKind;

pub const DATA: StatementKind = StatementKind::new("Data");
pub const WRITE: StatementKind = StatementKind::new("Write");
pub const MOVE: StatementKind = StatementKind::new("Move");
pub const CALL: StatementKind = StatementKind::new("Call");
pub const CLEAR: StatementKind = StatementKind::new("Clear");
/// Statement the classifier could not place.
pub const UNKNOWN: StatementKind = StatementKind::new("Unknown");

pub const IF: StatementKind = StatementKind::new("If");
pub const ELSE_IF: StatementKind = StatementKind::new("ElseIf");
pub const ELSE: StatementKind = StatementKind::new("Else");
pub const END_IF: StatementKind = StatementKind::new("EndIf");

pub const WHILE: StatementKind = StatementKind::new("While");
pub const END_WHILE: StatementKind = StatementKind::new("EndWhile");
pub const DO: StatementKind = StatementKind::new("Do");
pub const END_DO: StatementKind = StatementKind::new("EndDo");
pub const LOOP: StatementKind = StatementKind::new("Loop");
pub const END_LOOP: StatementKind = StatementKind::new("EndLoop");

pub const CASE: StatementKind = StatementKind::new("Case");
pub const WHEN: StatementKind = StatementKind::new("When");
pub const END_CASE: StatementKind = StatementKind::new("EndCase");

pub const FORM: StatementKind = StatementKind::new("Form");
pub const END_FORM: StatementKind = StatementKind::new("EndForm");

pub const CLASS_DEFINITION: StatementKind = StatementKind::new("ClassDefinition");
pub const PUBLIC_SECTION: StatementKind = StatementKind::new("PublicSection");
pub const PROTECTED_SECTION: StatementKind = StatementKind::new("ProtectedSection");
pub const PRIVATE_SECTION: StatementKind = StatementKind::new("PrivateSection");
pub const METHOD_DEF: StatementKind = StatementKind::new("MethodDef");
pub const CLASS_IMPLEMENTATION: StatementKind = StatementKind::new("ClassImplementation");
pub const METHOD: StatementKind = StatementKind::new("Method");
pub const END_METHOD: StatementKind = StatementKind::new("EndMethod");
pub const END_CLASS: StatementKind = StatementKind::new("EndClass");

/// All kinds known to this grammar.
pub const ALL: &[StatementKind] = &[
    DATA,
    WRITE,
    MOVE,
    CALL,
    CLEAR,
    UNKNOWN,
    IF,
    ELSE_IF,
    ELSE,
    END_IF,
    WHILE,
    END_WHILE,
    DO,
    END_DO,
    LOOP,
    END_LOOP,
    CASE,
    WHEN,
    END_CASE,
    FORM,
    END_FORM,
    CLASS_DEFINITION,
    PUBLIC_SECTION,
    PROTECTED_SECTION,
    PRIVATE_SECTION,
    METHOD_DEF,
    CLASS_IMPLEMENTATION,
    METHOD,
    END_METHOD,
    END_CLASS,
];

/// Look up a kind by name, ignoring ASCII case (`endif` finds `EndIf`).
pub fn from_name(name: &str) -> Option<StatementKind> {
    ALL.iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}
