use crate::parser::NodeKind;
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NameError {
    #[error("Cannot declare variable {0}. As it already is defined.")]
    Redeclared(CompactString),
    #[error("Variable {0} is not defined.")]
    Undefined(CompactString),
}

impl NameError {
    pub fn code(&self) -> &'static str {
        match self {
            NameError::Redeclared(_) => "RT001",
            NameError::Undefined(_) => "RT002",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Cannot assign to constant variable {name}.")]
pub struct ConstAssignError {
    pub name: CompactString,
}

impl ConstAssignError {
    pub fn code(&self) -> &'static str {
        "RT003"
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown AST node: {0}")]
    UnsupportedNode(NodeKind),
    #[error("Unknown operator {0}")]
    UnknownOperator(CompactString),
    #[error("Expected identifier in assignment expression but got {0}")]
    InvalidAssignmentTarget(NodeKind),
}

impl EvalError {
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UnsupportedNode(_) => "RT004",
            EvalError::UnknownOperator(_) => "RT005",
            EvalError::InvalidAssignmentTarget(_) => "RT006",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    ConstAssign(#[from] ConstAssignError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::Name(e) => e.code(),
            RuntimeError::ConstAssign(e) => e.code(),
            RuntimeError::Eval(e) => e.code(),
        }
    }
}
