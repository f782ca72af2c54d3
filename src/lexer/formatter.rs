use super::token::{Token, TokenKind};
use crate::diagnostic::render_report;
use crate::lexer::{LexicalError, LexicalErrorKind};

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats a lexer error into a string.
    fn format_lexical_error(&self, error: &LexicalError) -> String;
}

/// One token per line as `KIND lexeme literal`.
pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        let lexeme = &token.lexeme;
        match token.kind {
            TokenKind::Number => {
                let value: f64 = lexeme
                    .parse()
                    .expect("Digit runs are always parseable into f64.");
                format!("NUMBER {lexeme} {value:?}")
            }
            TokenKind::EndOfInput => "EOF  null".into(),
            kind => format!("{kind} {lexeme} null"),
        }
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        match error.kind {
            LexicalErrorKind::Unrecognized(c) => {
                format!("[line {}] Error: Unexpected character: {c}", error.line)
            }
        }
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("{error:?}")
    }
}

/// Renders lexical errors as annotated source snippets.
pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src str,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self { text, path }
    }
}

impl<'src> TokenFormatter for PrettyFormatter<'src> {
    fn format(&self, token: &Token) -> String {
        format!("({}) {}", token.line, BasicFormatter.format(token))
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        match error.kind {
            LexicalErrorKind::Unrecognized(c) => render_report(
                self.path,
                self.text,
                error.span,
                error.code(),
                "Encountered an unrecognized character",
                &format!("Unexpected character {c:?}"),
            ),
        }
    }
}
