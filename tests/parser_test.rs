use proptest::prelude::*;

use reckon::lexer::{TokenKind, KEYWORD_HASHMAP};
use reckon::parser::{
    formatter::{ProgramFormatter, SExpressionFormatter},
    parse, Expression, NodeKind, Statement, SyntaxErrorKind, VariableDecl, MAX_DEPTH,
};

fn check(input: &str, expected: &str, test_name: &str) {
    let formatter = SExpressionFormatter;
    let actual = match parse(input) {
        Ok(ref program) => formatter.format(program),
        Err(ref e) => formatter.format_error(e),
    };

    assert_eq!(actual, expected, "Failed the test {test_name}");
}

fn error_kind(input: &str) -> SyntaxErrorKind {
    parse(input).expect_err("Input should not parse.").kind
}

#[test]
fn smoke_test() {
    check("", "", "smoke");
}

#[test]
fn test_precedence() {
    check("2 + 3 * 4", "(+ 2.0 (* 3.0 4.0))", "precedence");
    check("(2 + 3) * 4", "(* (+ 2.0 3.0) 4.0)", "grouping");
    check("8 / 4 % 3 - 1", "(- (% (/ 8.0 4.0) 3.0) 1.0)", "left associative");
}

#[test]
fn test_declarations() {
    check(
        "let x = 1; const y = x; let z;",
        "(let x 1.0)\n(const y x)\n(let z)",
        "declarations",
    );
}

#[test]
fn test_assignment_is_right_associative() {
    check("a = b = 1 + c", "(= a (= b (+ 1.0 c)))", "assignment");
}

#[test]
fn test_expression_statements_need_no_semicolon() {
    check("1 2; x", "1.0\n2.0\nx", "bare expressions");
}

#[test]
fn test_errors() {
    check("(1 + 2", "[line 1] Error: Unexpected end of input.", "unbalanced");
    check(
        "let x = 1",
        "[line 1] Error: Unexpected end of input.",
        "missing semicolon",
    );
    check(
        "const x;",
        "[line 1] Error: Expected assignment for constant x.",
        "const without initializer",
    );
    check(
        "\n1 + )",
        "[line 2] Error: Unexpected token CLOSE_PAREN \")\".",
        "non expression",
    );
    check("#", "[line 1] Error: Unexpected character: #", "lexical");
}

#[test]
fn test_long_operator_chain_is_too_deep() {
    let source = format!("1{}", "+1".repeat(200_000));
    let error = parse(&source).expect_err("Chain exceeds the nesting limit.");
    assert_eq!(error.kind, SyntaxErrorKind::TooDeep(MAX_DEPTH));
    assert_eq!(error.span.range(), 2 * MAX_DEPTH + 1..2 * MAX_DEPTH + 2);
}

#[test]
fn test_deep_parentheses_are_too_deep() {
    let source = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(error_kind(&source), SyntaxErrorKind::TooDeep(MAX_DEPTH));
}

#[test]
fn test_nesting_within_limit_parses() {
    let chain = format!("1{}", "*1".repeat(MAX_DEPTH - 1));
    let nested = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(parse(&chain).is_ok());
    assert!(parse(&nested).is_ok());
}

#[test]
fn declaration_shape() {
    let program = parse("const answer = 6 * 7;").unwrap();
    assert_eq!(program.len(), 1);
    assert_eq!(
        program.get_statement(0),
        Some(&Statement::VariableDecl(VariableDecl {
            name: "answer".into(),
            constant: true,
            initial: Some(Expression::binary(
                "*",
                Expression::NumericLiteral(6.0),
                Expression::NumericLiteral(7.0)
            )),
        }))
    );
}

#[test]
fn let_requires_equals_or_semicolon() {
    assert_eq!(
        error_kind("let x 5;"),
        SyntaxErrorKind::UnexpectedToken {
            actual: TokenKind::Number,
            expected: TokenKind::Semicolon,
        }
    );
    assert_eq!(
        error_kind("let = 5;"),
        SyntaxErrorKind::UnexpectedToken {
            actual: TokenKind::Equals,
            expected: TokenKind::Identifier,
        }
    );
}

#[test]
fn assignment_target_must_be_identifier() {
    assert_eq!(
        error_kind("(a) + 1 = 2"),
        SyntaxErrorKind::InvalidLValue(NodeKind::BinaryExpression)
    );
    // Parentheses do not produce a node, so this is a plain identifier target.
    assert!(parse("(a) = 2").is_ok());
}

#[test]
fn extra_closing_paren_is_an_error() {
    assert!(matches!(
        error_kind("(1 + 2))"),
        SyntaxErrorKind::NonExpression(TokenKind::CloseParen, _)
    ));
}

#[test]
fn lexical_errors_come_first() {
    assert!(matches!(
        error_kind("(1 + @"),
        SyntaxErrorKind::LexicalError(_)
    ));
}

// Property-based tests

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%")]
}

fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[a-zA-Z]{1,6}".prop_filter("Keywords are not identifiers", |s| {
            !KEYWORD_HASHMAP.contains_key(s.as_str())
        }),
    ]
}

fn arithmetic_strategy() -> impl Strategy<Value = String> {
    atom_strategy().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator_strategy(), inner.clone())
                .prop_map(|(lhs, op, rhs)| format!("{lhs} {op} {rhs}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

proptest! {
    #[test]
    fn arithmetic_parses_to_one_statement(input in arithmetic_strategy()) {
        let program = parse(&input);
        prop_assert!(program.is_ok(), "{input} failed to parse");
        let program = program.unwrap();
        prop_assert_eq!(program.len(), 1);
        prop_assert!(matches!(program.get_statement(0), Some(Statement::Expression(_))));
    }

    #[test]
    fn unclosed_group_is_rejected(input in arithmetic_strategy()) {
        let source = format!("({input}");
        prop_assert!(parse(&source).is_err());
    }
}
