use super::NodeKind;
use compact_str::CompactString;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl InfixOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Remainder),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    NumericLiteral(f64),
    Identifier(CompactString),
    /// The operator is kept as its source symbol and only interpreted by
    /// the evaluator.
    Binary {
        operator: CompactString,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Assignment {
        target: Box<Expression>,
        value: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(operator: &str, lhs: Expression, rhs: Expression) -> Self {
        Self::Binary {
            operator: operator.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assignment(target: Expression, value: Expression) -> Self {
        Self::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn get_l_value(&self) -> Option<&CompactString> {
        match self {
            Expression::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::NumericLiteral(_) => NodeKind::NumericLiteral,
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::Binary { .. } => NodeKind::BinaryExpression,
            Expression::Assignment { .. } => NodeKind::AssignmentExpression,
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expression::NumericLiteral(_) | Expression::Identifier(_)
        )
    }

    /// Moves the non-leaf children of this node onto `stack`, leaving
    /// placeholders behind.
    fn detach_children(&mut self, stack: &mut Vec<Expression>) {
        let (Expression::Binary { lhs, rhs, .. }
        | Expression::Assignment {
            target: lhs,
            value: rhs,
        }) = self
        else {
            return;
        };
        for child in [lhs, rhs] {
            if !child.is_leaf() {
                stack.push(mem::replace(&mut **child, Expression::NumericLiteral(0.0)));
            }
        }
    }
}

// Tears the tree down with an explicit stack, so dropping a long operator
// chain does not recurse once per node.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.detach_children(&mut stack);
        }
    }
}
