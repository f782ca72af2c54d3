use super::{expression::Expression, NodeKind};
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDecl(VariableDecl),
    FunctionDecl(FunctionDecl),
    Expression(Expression),
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::VariableDecl(_) => NodeKind::VariableDeclaration,
            Statement::FunctionDecl(_) => NodeKind::FunctionDeclaration,
            Statement::Expression(expr) => expr.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: CompactString,
    pub constant: bool,
    /// Only `let` declarations may leave this out.
    pub initial: Option<Expression>,
}

/// Part of the tree shape but never produced by the parser, and rejected
/// by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: CompactString,
    pub parameters: Vec<CompactString>,
    pub body: Vec<Statement>,
}
