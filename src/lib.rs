mod diagnostic;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod value;

pub use error::Error;
pub use interpreter::{evaluate, Environment, TreeWalkInterpreter};
pub use lexer::tokenize;
pub use parser::parse;
pub use value::Value;

/// Parses `source` and evaluates it in `environment`.
pub fn run(source: &str, environment: &mut Environment) -> Result<Value, Error> {
    let program = parse(source)?;
    Ok(evaluate(&program, environment)?)
}
