use proptest::prelude::*;

use reckon::lexer::{
    formatter::{BasicFormatter, TokenFormatter},
    tokenize, Lexer, LexicalErrorKind, TokenKind, KEYWORD_HASHMAP,
};

fn check(input: &str, expected: &str, test_name: &str) {
    let mut scanner = Lexer::new(input);
    let formatter = BasicFormatter;
    let mut buffer = String::new();
    loop {
        match scanner.next_token() {
            Ok(token) => {
                buffer.push_str(&formatter.format(&token));
                if matches!(token.kind, TokenKind::EndOfInput) {
                    break;
                }
            }
            Err(error) => {
                buffer.push_str(&formatter.format_lexical_error(&error));
            }
        }
        buffer.push('\n');
    }

    assert_eq!(buffer, expected, "Failed the test {test_name}");
}

#[test]
fn smoke_test() {
    check("", "EOF  null", "smoke");
}

#[test]
fn test_declaration() {
    check(
        "let x = 42;",
        "LET let null\nIDENTIFIER x null\nEQUALS = null\nNUMBER 42 42.0\nSEMICOLON ; null\nEOF  null",
        "declaration",
    );
}

#[test]
fn test_operators_and_parentheses() {
    check(
        "(1+2)%3",
        "OPEN_PAREN ( null\nNUMBER 1 1.0\nBINARY_OPERATOR + null\nNUMBER 2 2.0\nCLOSE_PAREN ) null\nBINARY_OPERATOR % null\nNUMBER 3 3.0\nEOF  null",
        "operators",
    );
}

#[test]
fn test_keywords_need_exact_match() {
    check(
        "const lets",
        "CONST const null\nIDENTIFIER lets null\nEOF  null",
        "keywords",
    );
}

#[test]
fn test_unrecognized_characters_are_reported() {
    check(
        "1 @\n2.5",
        "NUMBER 1 1.0\n[line 1] Error: Unexpected character: @\nNUMBER 2 2.0\n[line 2] Error: Unexpected character: .\nNUMBER 5 5.0\nEOF  null",
        "unrecognized",
    );
}

#[test]
fn tokenize_stops_at_first_error() {
    let error = tokenize("a $ #").unwrap_err();
    assert_eq!(error.kind, LexicalErrorKind::Unrecognized('$'));
    assert_eq!(error.span.range(), 2..3);
}

#[test]
fn whitespace_only_is_just_end_of_input() {
    let tokens = tokenize(" \t\r\n ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
}

#[test]
fn huge_numbers_do_not_fail() {
    let digits = "9".repeat(400);
    let tokens = tokenize(&digits).unwrap();
    assert_eq!(tokens[0].lexeme.as_str(), digits);
    assert_eq!(tokens[0].lexeme.parse::<f64>().unwrap(), f64::INFINITY);
}

// Property-based tests

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("%".to_string()),
        Just("=".to_string()),
        Just(";".to_string()),
    ]
}

fn numeric_literal_strategy() -> impl Strategy<Value = String> {
    "[0-9]+".prop_map(|s| s)
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]+".prop_map(|s: String| s)
}

fn keyword_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("let".to_string()), Just("const".to_string())]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]+".prop_map(|s: String| s)
}

fn token_sequence_strategy() -> impl Strategy<Value = Vec<String>> {
    const MIN_TOKEN_COUNT: usize = 1;
    const MAX_TOKEN_COUNT: usize = 100;
    prop::collection::vec(
        prop_oneof![
            symbol_strategy(),
            numeric_literal_strategy(),
            identifier_strategy(),
            keyword_strategy(),
        ],
        MIN_TOKEN_COUNT..MAX_TOKEN_COUNT,
    )
}

fn unrecognized_char_strategy() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("Must not start a token or be whitespace", |c| {
        !(c.is_ascii_alphanumeric() || " \t\r\n()+-*/%=;".contains(*c))
    })
}

proptest! {
    #[test]
    fn digits_lex_to_a_single_number(input in "[0-9]{1,64}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].lexeme.as_str(), input.as_str());
        prop_assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn lexer_handles_valid_tokens(input in token_sequence_strategy(), separator in whitespace_strategy()) {
        // Add 1 to include EOF token
        let expected_num_tokens = input.len() + 1;
        let tokens = tokenize(&input.join(&separator));
        prop_assert!(tokens.is_ok());
        let tokens = tokens.unwrap();
        prop_assert_eq!(tokens.len(), expected_num_tokens);
        for (token, text) in tokens.iter().zip(input.iter()) {
            prop_assert_eq!(token.lexeme.as_str(), text.as_str());
            if let Some(kind) = KEYWORD_HASHMAP.get(text.as_str()) {
                prop_assert_eq!(token.kind, *kind);
            }
        }
    }

    #[test]
    fn lexer_rejects_unknown_characters(c in unrecognized_char_strategy()) {
        let input = format!("1 + {c}");
        let error = tokenize(&input).unwrap_err();
        prop_assert_eq!(error.kind, LexicalErrorKind::Unrecognized(c));
        prop_assert_eq!(error.span.range(), 4..4 + c.len_utf8());
    }
}
