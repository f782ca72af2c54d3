use super::{
    environment::Environment,
    error::{EvalError, RuntimeError},
};
use crate::error::Error;
use crate::parser::{
    parse, Expression, InfixOperator, Node, NodeKind, Program, Statement, VariableDecl,
};
use crate::value::Value;

/// Evaluates any tree node against `environment`.
pub fn evaluate<'a>(
    node: impl Into<Node<'a>>,
    environment: &mut Environment,
) -> Result<Value, RuntimeError> {
    match node.into() {
        Node::Program(program) => evaluate_program(program, environment),
        Node::Statement(statement) => evaluate_statement(statement, environment),
        Node::Expression(expr) => evaluate_expression(expr, environment),
    }
}

fn evaluate_program(
    program: &Program,
    environment: &mut Environment,
) -> Result<Value, RuntimeError> {
    let mut last = Value::Null;
    for statement in program.iter() {
        last = evaluate_statement(statement, environment)?;
    }
    Ok(last)
}

fn evaluate_statement(
    statement: &Statement,
    environment: &mut Environment,
) -> Result<Value, RuntimeError> {
    match statement {
        Statement::VariableDecl(decl) => evaluate_variable_decl(decl, environment),
        Statement::FunctionDecl(_) => {
            Err(EvalError::UnsupportedNode(NodeKind::FunctionDeclaration).into())
        }
        Statement::Expression(expr) => evaluate_expression(expr, environment),
    }
}

fn evaluate_variable_decl(
    decl: &VariableDecl,
    environment: &mut Environment,
) -> Result<Value, RuntimeError> {
    let value = match decl.initial {
        Some(ref initial) => evaluate_expression(initial, environment)?,
        None => Value::Null,
    };
    Ok(environment.declare_var(&decl.name, value, decl.constant)?)
}

fn evaluate_expression(
    expr: &Expression,
    environment: &mut Environment,
) -> Result<Value, RuntimeError> {
    match expr {
        Expression::NumericLiteral(v) => Ok(Value::Number(*v)),
        Expression::Identifier(name) => Ok(environment.lookup_var(name)?),
        Expression::Binary { operator, lhs, rhs } => {
            // Both sides are always evaluated, left first.
            let lhs = evaluate_expression(lhs, environment)?;
            let rhs = evaluate_expression(rhs, environment)?;
            evaluate_binary(operator, &lhs, &rhs)
        }
        Expression::Assignment { target, value } => {
            let value = evaluate_expression(value, environment)?;
            let Some(name) = target.get_l_value() else {
                return Err(EvalError::InvalidAssignmentTarget(target.kind()).into());
            };
            environment.assign_var(name, value)
        }
    }
}

fn evaluate_binary(operator: &str, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    // Non-numeric operands yield null rather than an error.
    if lhs.as_number().is_none() || rhs.as_number().is_none() {
        return Ok(Value::Null);
    }

    let Some(operator) = InfixOperator::from_symbol(operator) else {
        return Err(EvalError::UnknownOperator(operator.into()).into());
    };
    let result = match operator {
        InfixOperator::Add => lhs.add(rhs),
        InfixOperator::Subtract => lhs.subtract(rhs),
        InfixOperator::Multiply => lhs.multiply(rhs),
        InfixOperator::Divide => lhs.divide(rhs),
        InfixOperator::Remainder => lhs.remainder(rhs),
    };
    Ok(result)
}

/// Runs source text against one persistent environment.
pub struct TreeWalkInterpreter {
    environment: Environment,
}

impl TreeWalkInterpreter {
    pub fn new() -> Self {
        Self {
            environment: Environment::global(),
        }
    }

    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let program = parse(source)?;
        Ok(evaluate(&program, &mut self.environment)?)
    }
}

impl Default for TreeWalkInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
