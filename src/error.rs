use crate::interpreter::error::{ConstAssignError, EvalError, NameError, RuntimeError};
use crate::lexer::LexicalError;
use crate::parser::{SyntaxError, SyntaxErrorKind};
use thiserror::Error;

/// Every way a single "parse and evaluate" call can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lexical(LexicalError),
    #[error(transparent)]
    Syntax(SyntaxError),
    #[error(transparent)]
    Name(NameError),
    #[error(transparent)]
    ConstAssign(ConstAssignError),
    #[error(transparent)]
    Eval(EvalError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lexical(e) => e.code(),
            Error::Syntax(e) => e.code(),
            Error::Name(e) => e.code(),
            Error::ConstAssign(e) => e.code(),
            Error::Eval(e) => e.code(),
        }
    }
}

impl From<LexicalError> for Error {
    fn from(value: LexicalError) -> Self {
        Self::Lexical(value)
    }
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        match value.kind {
            SyntaxErrorKind::LexicalError(e) => Self::Lexical(e),
            _ => Self::Syntax(value),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        match value {
            RuntimeError::Name(e) => Self::Name(e),
            RuntimeError::ConstAssign(e) => Self::ConstAssign(e),
            RuntimeError::Eval(e) => Self::Eval(e),
        }
    }
}
