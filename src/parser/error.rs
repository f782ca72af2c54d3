use super::NodeKind;
use crate::lexer::{LexicalError, Span, TokenKind};
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    #[error("Expected {expected} but got {actual}.")]
    UnexpectedToken {
        actual: TokenKind,
        expected: TokenKind,
    },
    #[error("Unexpected token {0} {1:?}.")]
    NonExpression(TokenKind, CompactString),
    #[error("Unexpected end of input.")]
    UnexpectedEof,
    #[error("Expected assignment for constant {0}.")]
    MissingInitializer(CompactString),
    #[error("Cannot assign to {0}, expected an identifier.")]
    InvalidLValue(NodeKind),
    #[error("Expression nests deeper than {0} levels.")]
    TooDeep(usize),
    #[error("{}", .0.kind)]
    LexicalError(LexicalError),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct SyntaxError {
    #[source]
    pub kind: SyntaxErrorKind,
    pub span: Span,
    pub line: u32,
}

impl SyntaxError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            SyntaxErrorKind::UnexpectedToken { .. } => "SX001",
            SyntaxErrorKind::NonExpression(..) => "SX002",
            SyntaxErrorKind::UnexpectedEof => "SX003",
            SyntaxErrorKind::MissingInitializer(_) => "SX004",
            SyntaxErrorKind::InvalidLValue(_) => "SX005",
            SyntaxErrorKind::TooDeep(_) => "SX006",
            SyntaxErrorKind::LexicalError(ref e) => e.code(),
        }
    }
}

impl From<LexicalError> for SyntaxError {
    fn from(value: LexicalError) -> Self {
        Self {
            span: value.span,
            line: value.line,
            kind: SyntaxErrorKind::LexicalError(value),
        }
    }
}
