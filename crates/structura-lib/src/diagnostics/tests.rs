use super::*;

#[test]
fn builder_uses_kind_templates() {
    let mut diag = Diagnostics::new();
    diag.report(DiagnosticKind::UnexpectedStatement, 4..10)
        .message("Write")
        .emit();
    diag.report(DiagnosticKind::SyntaxError, 0..3).emit();

    assert_eq!(diag.len(), 2);
    assert_eq!(diag.as_slice()[0].message(), "unexpected `Write` statement");
    assert_eq!(diag.as_slice()[1].message(), "syntax error");
}

#[test]
fn severity_counts() {
    let mut diag = Diagnostics::new();
    diag.report_grammar(DiagnosticKind::UnreachableStructure)
        .message("Orphan")
        .emit();
    assert!(diag.has_warnings());
    assert!(!diag.has_errors());

    diag.report_grammar(DiagnosticKind::LeftRecursion).emit();
    assert_eq!(diag.error_count(), 1);
    assert_eq!(diag.warning_count(), 1);
}

#[test]
fn display_includes_related_and_hints() {
    let mut diag = Diagnostics::new();
    diag.report(DiagnosticKind::SyntaxError, 4..10)
        .message("Expected ENDIF")
        .related_to("found `Data`", 11..16)
        .hint("close the block")
        .emit();

    insta::assert_snapshot!(
        diag.render(),
        @"error at 4..10: Expected ENDIF (related: found `Data` at 11..16) (hint: close the block)"
    );
}

#[test]
fn extend_merges_collections() {
    let mut first = Diagnostics::new();
    first.report_grammar(DiagnosticKind::LeftRecursion).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::SyntaxError, 0..1).emit();

    first.extend(second);

    assert_eq!(first.len(), 2);
    assert_eq!(
        first.iter().map(|d| d.kind()).collect::<Vec<_>>(),
        [DiagnosticKind::LeftRecursion, DiagnosticKind::SyntaxError]
    );
}

#[test]
fn source_rendering_annotates_statement() {
    let source = "IF.\nWRITE.\nDATA.";
    let mut diag = Diagnostics::new();
    diag.report(DiagnosticKind::SyntaxError, 4..10)
        .message("Expected ENDIF")
        .related_to("found `Data`", 11..16)
        .emit();

    let rendered = diag.printer().source(source).path("demo.stmt").render();

    assert!(rendered.contains("error: Expected ENDIF"));
    assert!(rendered.contains("demo.stmt"));
    assert!(rendered.contains("WRITE."));
    assert!(rendered.contains("found `Data`"));
}

#[test]
fn source_rendering_keeps_grammar_findings_plain() {
    let mut diag = Diagnostics::new();
    diag.report_grammar(DiagnosticKind::UnreachableStructure)
        .message("Orphan")
        .emit();

    assert_eq!(
        diag.render_source("IF.", false),
        "warning: `Orphan` is not reachable from the root"
    );
}

#[test]
fn empty_source_renders_plain() {
    let mut diag = Diagnostics::new();
    diag.report(DiagnosticKind::SyntaxError, 0..0)
        .message("Expected IF")
        .emit();

    assert_eq!(diag.render_source("", false), "error at 0..0: Expected IF");
}
