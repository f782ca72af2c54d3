mod cursor;
mod error;
pub mod formatter;
mod state;
mod token;

use cursor::SourceChar;
pub use error::{LexicalError, LexicalErrorKind};
use state::{LexerState, LexerStateTransition};
use std::str::CharIndices;
pub use token::{Span, Token, TokenKind, KEYWORD_HASHMAP};

/// Scans the whole source, always ending with an `EndOfInput` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let finished = matches!(token.kind, TokenKind::EndOfInput);
        tokens.push(token);
        if finished {
            return Ok(tokens);
        }
    }
}

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    chars: CharIndices<'src>,
    state: LexerState,
    lookahead: Option<SourceChar>,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            state: LexerState::default(),
            lookahead: None,
            line: 1,
        }
    }
}

impl<'src> Lexer<'src> {
    fn next_char(&mut self) -> Option<SourceChar> {
        if let Some(c) = self.lookahead.take() {
            return Some(c);
        }

        let (offset, value) = self.chars.next()?;
        let c = SourceChar {
            value,
            offset,
            line: self.line,
        };
        if value == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Produces the next token. Once the source is exhausted every call
    /// returns `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        loop {
            let next_char = self.next_char();
            let transition = self.state.execute(self.source, next_char);

            match transition {
                LexerStateTransition::Stay => {}
                LexerStateTransition::ChangeState(new_state) => {
                    self.state = new_state;
                }
                LexerStateTransition::ChangeStateAndEmit {
                    new_state,
                    token_or_error,
                } => {
                    self.state = new_state;
                    return token_or_error;
                }
                LexerStateTransition::ChangeStateAndEmitAndPutBack {
                    new_state,
                    token_or_error,
                    put_back,
                } => {
                    self.state = new_state;
                    self.lookahead = Some(put_back);
                    return token_or_error;
                }
            }
        }
    }
}
