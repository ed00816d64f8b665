use structura_core::{Statement, StatementKind};
use structura_lib::{DiagnosticKind, Parser};

use super::*;
use crate::statements::*;

/// Statements one per line, spans pointing into the lines joined by `\n`.
fn program(lines: &[(StatementKind, &str)]) -> Vec<Statement> {
    let mut offset = 0;
    lines
        .iter()
        .enumerate()
        .map(|(row, (kind, text))| {
            let span = offset..offset + text.len();
            offset = span.end + 1;
            Statement::new(*kind, *text).at(span, row)
        })
        .collect()
}

#[test]
fn kind_lookup_ignores_case() {
    assert_eq!(from_name("EndIf"), Some(END_IF));
    assert_eq!(from_name("endif"), Some(END_IF));
    assert_eq!(from_name("CLASSDEFINITION"), Some(CLASS_DEFINITION));
    assert!(from_name("EndSelect").is_none());
}

#[test]
fn kind_names_are_unique() {
    for (i, kind) in ALL.iter().enumerate() {
        assert!(
            ALL[i + 1..].iter().all(|other| other != kind),
            "duplicate kind {kind}"
        );
    }
}

#[test]
fn grammar_is_valid() {
    let registry = registry().expect("unique names");

    assert_eq!(registry.len(), all().len());
    let diagnostics = registry.validate(root().name());
    assert!(diagnostics.is_empty(), "{}", diagnostics.render());
}

#[test]
fn nested_blocks() {
    let input = program(&[
        (DATA, "DATA lv_x TYPE i."),
        (IF, "IF lv_x = 1."),
        (WRITE, "WRITE 'one'."),
        (ELSE_IF, "ELSEIF lv_x = 2."),
        (LOOP, "LOOP AT lt_tab INTO ls_row."),
        (MOVE, "lv_x = ls_row-id."),
        (END_LOOP, "ENDLOOP."),
        (ELSE, "ELSE."),
        (CLEAR, "CLEAR lv_x."),
        (END_IF, "ENDIF."),
    ]);

    let outcome = Parser::new(root()).parse(&input).expect("within limits");

    assert!(outcome.is_complete());
    insta::assert_snapshot!(outcome.root().dump(), @r#"
    Any
      Normal
        Data "DATA lv_x TYPE i."
      Normal
        If
          If "IF lv_x = 1."
          Body
            Normal
              Write "WRITE 'one'."
          ElseIf
            ElseIf "ELSEIF lv_x = 2."
            Body
              Normal
                Loop
                  Loop "LOOP AT lt_tab INTO ls_row."
                  Body
                    Normal
                      Move "lv_x = ls_row-id."
                  EndLoop "ENDLOOP."
          Else
            Else "ELSE."
            Body
              Normal
                Clear "CLEAR lv_x."
          EndIf "ENDIF."
    "#);
}

#[test]
fn classes_and_subroutines() {
    let input = program(&[
        (CLASS_DEFINITION, "CLASS lcl_app DEFINITION."),
        (PUBLIC_SECTION, "PUBLIC SECTION."),
        (METHOD_DEF, "METHODS run."),
        (END_CLASS, "ENDCLASS."),
        (CLASS_IMPLEMENTATION, "CLASS lcl_app IMPLEMENTATION."),
        (METHOD, "METHOD run."),
        (CASE, "CASE sy-subrc."),
        (WHEN, "WHEN 0."),
        (CALL, "CALL FUNCTION 'Z_OK'."),
        (WHEN, "WHEN OTHERS."),
        (END_CASE, "ENDCASE."),
        (END_METHOD, "ENDMETHOD."),
        (END_CLASS, "ENDCLASS."),
        (FORM, "FORM main."),
        (UNKNOWN, "SELECT-OPTIONS s_id FOR lv_id."),
        (END_FORM, "ENDFORM."),
    ]);

    let outcome = Parser::new(root()).parse(&input).expect("within limits");
    let tree = outcome.root();

    assert!(outcome.is_complete());
    assert_eq!(outcome.consumed(), input.len());
    assert_eq!(tree.children().len(), 3);
    assert_eq!(tree.find_all("Method").len(), 1);
    assert_eq!(tree.find_all("When").len(), 2);
    assert_eq!(tree.find_all("Form").len(), 1);
}

#[test]
fn unterminated_form() {
    let input = program(&[(FORM, "FORM run."), (WRITE, "WRITE x.")]);

    let outcome = Parser::new(root()).parse(&input).expect("within limits");

    assert!(!outcome.is_complete());
    insta::assert_snapshot!(
        outcome.diagnostics().render(),
        @"error at 10..18: Expected ENDFORM"
    );
}

#[test]
fn stray_end_statement() {
    let input = program(&[(WRITE, "WRITE x."), (END_IF, "ENDIF.")]);

    let outcome = Parser::new(root()).parse(&input).expect("within limits");

    assert_eq!(outcome.consumed(), 1);
    let diag = &outcome.diagnostics().as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedStatement);
    assert_eq!(diag.range(), Some(9..15));
}

#[test]
fn if_rule_as_ebnf() {
    let registry = registry().expect("unique names");

    insta::assert_snapshot!(
        registry.ebnf_rule("If").expect("registered"),
        @"If ::= 'If' Body? ElseIf* Else? 'EndIf'"
    );
}
