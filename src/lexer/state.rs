use super::{
    cursor::SourceChar,
    token::{Span, Token, TokenKind, KEYWORD_HASHMAP},
    LexicalError, LexicalErrorKind,
};

pub enum LexerStateTransition {
    Stay,
    ChangeStateAndEmit {
        new_state: LexerState,
        token_or_error: Result<Token, LexicalError>,
    },
    ChangeStateAndEmitAndPutBack {
        new_state: LexerState,
        token_or_error: Result<Token, LexicalError>,
        put_back: SourceChar,
    },
    ChangeState(LexerState),
}

trait LexerStateExecutor {
    fn execute(&self, source: &str, next_char: Option<SourceChar>) -> LexerStateTransition;
}

#[derive(Debug, Default)]
pub enum LexerState {
    #[default]
    Normal,
    Number(RunState),
    Word(RunState),
}

impl LexerState {
    pub fn execute(&self, source: &str, next_char: Option<SourceChar>) -> LexerStateTransition {
        match self {
            LexerState::Normal => NormalState.execute(source, next_char),
            LexerState::Number(s) => NumberState(s).execute(source, next_char),
            LexerState::Word(s) => WordState(s).execute(source, next_char),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

struct NormalState;

impl LexerStateExecutor for NormalState {
    fn execute(&self, source: &str, next_char: Option<SourceChar>) -> LexerStateTransition {
        let Some(current) = next_char else {
            return LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token_or_error: Ok(Token {
                    kind: TokenKind::EndOfInput,
                    lexeme: "".into(),
                    span: Span::new(source.len(), source.len()),
                    line: 1 + source.matches('\n').count() as u32,
                }),
            };
        };

        let just = |kind: TokenKind| LexerStateTransition::ChangeStateAndEmit {
            new_state: LexerState::Normal,
            token_or_error: Ok(Token {
                kind,
                lexeme: current.value.to_string().into(),
                span: Span::new(current.offset, current.next_offset()),
                line: current.line,
            }),
        };

        match current.value {
            // Single character tokens
            '(' => just(TokenKind::OpenParen),
            ')' => just(TokenKind::CloseParen),
            '+' | '-' | '*' | '/' | '%' => just(TokenKind::BinaryOperator),
            '=' => just(TokenKind::Equals),
            ';' => just(TokenKind::Semicolon),
            // Multi character tokens
            c if c.is_ascii_digit() => LexerStateTransition::ChangeState(LexerState::Number(
                RunState::starting_at(&current),
            )),
            c if c.is_ascii_alphabetic() => {
                LexerStateTransition::ChangeState(LexerState::Word(RunState::starting_at(&current)))
            }
            c if is_whitespace(c) => LexerStateTransition::Stay,
            c => LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token_or_error: Err(LexicalError {
                    kind: LexicalErrorKind::Unrecognized(c),
                    span: Span::new(current.offset, current.next_offset()),
                    line: current.line,
                }),
            },
        }
    }
}

/// A maximal run of characters belonging to one class.
#[derive(Debug, Clone)]
pub struct RunState {
    start: usize,
    line: u32,
}

impl RunState {
    fn starting_at(c: &SourceChar) -> Self {
        Self {
            start: c.offset,
            line: c.line,
        }
    }

    fn finish(
        &self,
        source: &str,
        next_char: Option<SourceChar>,
        classify: impl Fn(&str) -> TokenKind,
    ) -> LexerStateTransition {
        let end = next_char.map_or(source.len(), |c| c.offset);
        let lexeme = &source[self.start..end];
        let token = Token {
            kind: classify(lexeme),
            lexeme: lexeme.into(),
            span: Span::new(self.start, end),
            line: self.line,
        };
        match next_char {
            Some(put_back) => LexerStateTransition::ChangeStateAndEmitAndPutBack {
                new_state: LexerState::Normal,
                token_or_error: Ok(token),
                put_back,
            },
            None => LexerStateTransition::ChangeStateAndEmit {
                new_state: LexerState::Normal,
                token_or_error: Ok(token),
            },
        }
    }
}

struct NumberState<'a>(&'a RunState);

impl LexerStateExecutor for NumberState<'_> {
    fn execute(&self, source: &str, next_char: Option<SourceChar>) -> LexerStateTransition {
        match next_char {
            Some(c) if c.value.is_ascii_digit() => LexerStateTransition::Stay,
            _ => self.0.finish(source, next_char, |_| TokenKind::Number),
        }
    }
}

struct WordState<'a>(&'a RunState);

impl LexerStateExecutor for WordState<'_> {
    fn execute(&self, source: &str, next_char: Option<SourceChar>) -> LexerStateTransition {
        match next_char {
            Some(c) if c.value.is_ascii_alphabetic() => LexerStateTransition::Stay,
            _ => self.0.finish(source, next_char, |lexeme| {
                KEYWORD_HASHMAP
                    .get(lexeme)
                    .copied()
                    .unwrap_or(TokenKind::Identifier)
            }),
        }
    }
}
