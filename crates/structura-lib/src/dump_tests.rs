use crate::test_utils::*;
use crate::{Colors, Parser};

#[test]
fn dump_colored() {
    let input = statements(&[IF, END_IF]);
    let outcome = Parser::new(&Block).parse(&input).expect("within limits");

    assert_eq!(
        outcome.root().dump_colored(Colors::ON),
        "\x1b[34mBlock\x1b[0m\n  \x1b[32mIf\x1b[0m \x1b[2m\"IF.\"\x1b[0m\n  \x1b[32mEndIf\x1b[0m \x1b[2m\"ENDIF.\"\x1b[0m\n"
    );
}

#[test]
fn forest_as_json() {
    let input = statements(&[IF, WRITE, END_IF]);
    let outcome = Parser::new(&Block).parse(&input).expect("within limits");

    insta::assert_snapshot!(outcome.root().to_json().expect("serializable"), @r#"
    {
      "structure": "Block",
      "children": [
        {
          "statement": "If",
          "text": "IF.",
          "row": 0
        },
        {
          "structure": "Body",
          "children": [
            {
              "statement": "Write",
              "text": "WRITE.",
              "row": 1
            }
          ]
        },
        {
          "statement": "EndIf",
          "text": "ENDIF.",
          "row": 2
        }
      ]
    }
    "#);
}

#[test]
fn find_all_and_statements() {
    let input = statements(&[IF, IF, END_IF, ELSE, IF, WRITE, END_IF, END_IF]);
    let outcome = Parser::new(&Program).parse(&input).expect("within limits");
    let root = outcome.root();

    assert_eq!(root.find_all("Block").len(), 3);
    assert_eq!(root.find_all("ElseBranch").len(), 1);
    assert_eq!(root.statements().len(), input.len());
    assert!(
        root.statements()
            .iter()
            .zip(&input)
            .all(|(found, original)| std::ptr::eq(*found, original))
    );
}
