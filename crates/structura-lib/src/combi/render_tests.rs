use crate::test_utils::*;
use crate::{Structure, opt, sta, star, sub};
use crate::{alt, seq};

#[test]
fn railroad_statement_and_structure() {
    assert_eq!(
        sta(WRITE).to_railroad(),
        "Railroad.Terminal('Write', {href: '#/statement/Write'})"
    );
    assert_eq!(
        sub(&Block).to_railroad(),
        "Railroad.NonTerminal('Block', {href: '#/structure/Block'})"
    );
}

#[test]
fn railroad_composites() {
    insta::assert_snapshot!(Program.matcher().to_railroad(), @"Railroad.ZeroOrMore(Railroad.Choice(0, Railroad.NonTerminal('Block', {href: '#/structure/Block'}),Railroad.Terminal('Write', {href: '#/statement/Write'}),Railroad.Terminal('Data', {href: '#/statement/Data'})))");
    insta::assert_snapshot!(Block.matcher().to_railroad(), @"Railroad.Sequence(Railroad.Terminal('If', {href: '#/statement/If'}),Railroad.Sequence(Railroad.Optional(Railroad.NonTerminal('Body', {href: '#/structure/Body'})),Railroad.Optional(Railroad.NonTerminal('ElseBranch', {href: '#/structure/ElseBranch'}))),Railroad.Terminal('EndIf', {href: '#/statement/EndIf'}))");
}

#[test]
fn railroad_terminates_on_self_reference() {
    assert_eq!(
        LeftRec.matcher().to_railroad(),
        "Railroad.Choice(0, Railroad.Sequence(Railroad.NonTerminal('LeftRec', {href: '#/structure/LeftRec'}),Railroad.Terminal('Write', {href: '#/statement/Write'})),Railroad.Terminal('Data', {href: '#/statement/Data'}))"
    );
}

#[test]
fn ebnf_parenthesizes_nested_choices() {
    assert_eq!(
        seq!(sta(FROM_KW), alt!(sta(DYNAMIC), sta(TABLE_NAME))).to_ebnf(),
        "'FromKw' ('Dynamic' | 'TableName')"
    );
    assert_eq!(
        alt!(seq!(sta(WRITE), sta(DATA)), sta(FIELD)).to_ebnf(),
        "'Write' 'Data' | 'Field'"
    );
    assert_eq!(opt(seq!(sta(WRITE), sta(DATA))).to_ebnf(), "('Write' 'Data')?");
    assert_eq!(star(sta(FIELD)).to_ebnf(), "'Field'*");
}

#[test]
fn ebnf_of_recursive_structures() {
    assert_eq!(Block.matcher().to_ebnf(), "'If' Body? ElseBranch? 'EndIf'");
    assert_eq!(Body.matcher().to_ebnf(), "('Write' | Block)*");
}

#[test]
fn debug_shows_ebnf() {
    assert_eq!(format!("{:?}", opt(sub(&Body))), "Matcher(Body?)");
}

#[test]
fn using_lists_references_in_order() {
    assert_eq!(
        Block.matcher().using(),
        [
            "statement/If",
            "structure/Body",
            "structure/ElseBranch",
            "statement/EndIf",
        ]
    );
}

#[test]
fn using_keeps_duplicates_and_stops_at_structures() {
    assert_eq!(
        seq!(sta(WRITE), sta(WRITE)).using(),
        ["statement/Write", "statement/Write"]
    );
    assert_eq!(
        LeftRec.matcher().using(),
        ["structure/LeftRec", "statement/Write", "statement/Data"]
    );
}
