use crate::{Statement, StatementKind};

const IF: StatementKind = StatementKind::new("If");
const END_IF: StatementKind = StatementKind::new("EndIf");

#[test]
fn kinds_compare_by_name() {
    assert_eq!(IF, StatementKind::new("If"));
    assert_ne!(IF, END_IF);
}

#[test]
fn qualified_name() {
    assert_eq!(END_IF.qualified_name(), "statement/EndIf");
}

#[test]
fn statement_is_kind() {
    let stmt = Statement::new(IF, "IF a = b.");
    assert!(stmt.is(IF));
    assert!(!stmt.is(END_IF));
    assert_eq!(stmt.kind().name(), "If");
}

#[test]
fn statement_position() {
    let stmt = Statement::new(IF, "IF a = b.").at(10..19, 2);
    assert_eq!(stmt.span(), 10..19);
    assert_eq!(stmt.row(), 2);
    assert_eq!(stmt.text(), "IF a = b.");
}

#[test]
fn statement_serializes_kind_as_name() {
    let stmt = Statement::new(END_IF, "ENDIF.").at(0..6, 0);
    let json = serde_json::to_string(&stmt).unwrap();
    assert_eq!(
        json,
        r#"{"kind":"EndIf","text":"ENDIF.","span":{"start":0,"end":6},"row":0}"#
    );
}
