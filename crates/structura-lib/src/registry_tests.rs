use crate::test_utils::*;
use crate::{GrammarError, GrammarRegistry, Structure};

fn grammar() -> GrammarRegistry {
    let structures: [&'static dyn Structure; 4] = [&Program, &Block, &ElseBranch, &Body];
    GrammarRegistry::from_structures(structures).expect("unique names")
}

#[test]
fn registers_in_order() {
    let registry = grammar();

    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        ["Program", "Block", "ElseBranch", "Body"]
    );
    assert!(registry.contains("Body"));
    assert_eq!(registry.get("Block").map(|s| s.name()), Some("Block"));
    assert!(registry.get("Missing").is_none());
}

#[test]
fn rejects_duplicate_names() {
    let mut registry = grammar();

    let err = registry.register(&Block).unwrap_err();

    assert_eq!(err, GrammarError::DuplicateStructure("Block"));
    assert_eq!(err.to_string(), "structure `Block` is already registered");
    assert_eq!(registry.len(), 4);
}

#[test]
fn dependencies_are_deduplicated() {
    let registry = grammar();
    let deps = registry.dependencies();

    let block: Vec<_> = deps["Block"].iter().map(String::as_str).collect();
    assert_eq!(
        block,
        [
            "statement/If",
            "structure/Body",
            "structure/ElseBranch",
            "statement/EndIf",
        ]
    );

    let body: Vec<_> = deps["Body"].iter().map(String::as_str).collect();
    assert_eq!(body, ["statement/Write", "structure/Block"]);
}

#[test]
fn dependents_of_structure() {
    let registry = grammar();

    assert_eq!(registry.dependents("Body"), ["Block", "ElseBranch"]);
    assert_eq!(registry.dependents("Block"), ["Program", "Body"]);
    assert!(registry.dependents("Program").is_empty());
}

#[test]
fn grammar_as_ebnf() {
    insta::assert_snapshot!(grammar().ebnf(), @r"
    Program ::= (Block | 'Write' | 'Data')*
    Block ::= 'If' Body? ElseBranch? 'EndIf'
    ElseBranch ::= 'Else' Body?
    Body ::= ('Write' | Block)*
    ");
}

#[test]
fn per_structure_documentation() {
    let registry = grammar();

    assert_eq!(
        registry.ebnf_rule("ElseBranch").as_deref(),
        Some("ElseBranch ::= 'Else' Body?")
    );
    assert_eq!(
        registry.railroad("ElseBranch").as_deref(),
        Some(
            "Railroad.Sequence(Railroad.Terminal('Else', {href: '#/statement/Else'}),Railroad.Optional(Railroad.NonTerminal('Body', {href: '#/structure/Body'})))"
        )
    );
    assert!(registry.railroad("Missing").is_none());
}
