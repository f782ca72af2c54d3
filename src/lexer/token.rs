use compact_str::CompactString;
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::Range;
use std::sync::LazyLock;

/// The hashmap for keywords
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("let", TokenKind::Let);
    map.insert("const", TokenKind::Const);
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The byte position of the start of the token.
    pub start: u32,
    /// The length of the token in bytes.
    pub length: u32,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start as u32,
            length: end.saturating_sub(start) as u32,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Parentheses
    OpenParen,
    CloseParen,
    // Operators
    BinaryOperator,
    Equals,
    Semicolon,

    // Literals
    Number,
    Identifier,

    // Keywords
    Let,
    Const,

    // End of input.
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::OpenParen => write!(f, "OPEN_PAREN"),
            TokenKind::CloseParen => write!(f, "CLOSE_PAREN"),
            TokenKind::BinaryOperator => write!(f, "BINARY_OPERATOR"),
            TokenKind::Equals => write!(f, "EQUALS"),
            TokenKind::Semicolon => write!(f, "SEMICOLON"),
            TokenKind::Number => write!(f, "NUMBER"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::Let => write!(f, "LET"),
            TokenKind::Const => write!(f, "CONST"),
            TokenKind::EndOfInput => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The literal text of the token. Empty for `EndOfInput`.
    pub lexeme: CompactString,
    pub span: Span,
    pub line: u32,
}
