use super::{
    error::{SyntaxError, SyntaxErrorKind},
    expression::Expression,
    program::Program,
    statement::{FunctionDecl, Statement, VariableDecl},
};
use crate::diagnostic::render_report;
use crate::lexer::formatter::{PrettyFormatter as PrettyTokenFormatter, TokenFormatter};

pub trait ProgramFormatter {
    fn format(&self, program: &Program) -> String;
    fn format_error(&self, error: &SyntaxError) -> String;
}

pub struct DebugFormatter;

impl ProgramFormatter for DebugFormatter {
    fn format(&self, program: &Program) -> String {
        format!("{program:#?}")
    }

    fn format_error(&self, error: &SyntaxError) -> String {
        format!("{error:?}")
    }
}

/// Prints one statement per line as an S-expression.
pub struct SExpressionFormatter;

impl SExpressionFormatter {
    pub fn format_expression(expr: &Expression) -> String {
        match expr {
            Expression::NumericLiteral(v) => format!("{v:?}"),
            Expression::Identifier(name) => name.to_string(),
            Expression::Binary { operator, lhs, rhs } => format!(
                "({operator} {} {})",
                Self::format_expression(lhs),
                Self::format_expression(rhs)
            ),
            Expression::Assignment { target, value } => format!(
                "(= {} {})",
                Self::format_expression(target),
                Self::format_expression(value)
            ),
        }
    }

    pub fn format_statement(statement: &Statement) -> String {
        match statement {
            Statement::VariableDecl(VariableDecl {
                name,
                constant,
                initial,
            }) => {
                let keyword = if *constant { "const" } else { "let" };
                match initial {
                    Some(initial) => {
                        format!("({keyword} {name} {})", Self::format_expression(initial))
                    }
                    None => format!("({keyword} {name})"),
                }
            }
            Statement::FunctionDecl(FunctionDecl {
                name,
                parameters,
                body,
            }) => {
                let mut buffer = format!("(fun {name} ({})", parameters.join(" "));
                for statement in body.iter() {
                    buffer.push(' ');
                    buffer.push_str(&Self::format_statement(statement));
                }
                buffer.push(')');
                buffer
            }
            Statement::Expression(expr) => Self::format_expression(expr),
        }
    }
}

impl ProgramFormatter for SExpressionFormatter {
    fn format(&self, program: &Program) -> String {
        program
            .iter()
            .map(Self::format_statement)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &SyntaxError) -> String {
        format!("[line {}] Error: {}", error.line, error.kind)
    }
}

/// Renders syntax errors as annotated source snippets.
pub struct PrettyFormatter<'src> {
    token_formatter: PrettyTokenFormatter<'src>,
    text: &'src str,
    path: &'src str,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self {
            token_formatter: PrettyTokenFormatter::new(text, path),
            text,
            path,
        }
    }
}

impl<'src> ProgramFormatter for PrettyFormatter<'src> {
    fn format(&self, program: &Program) -> String {
        SExpressionFormatter.format(program)
    }

    fn format_error(&self, error: &SyntaxError) -> String {
        let (message, label) = match &error.kind {
            SyntaxErrorKind::LexicalError(e) => {
                return self.token_formatter.format_lexical_error(e);
            }
            SyntaxErrorKind::UnexpectedToken { actual, expected } => (
                "Expected a different token",
                format!("Expected {expected} but got {actual}"),
            ),
            SyntaxErrorKind::NonExpression(kind, lexeme) => (
                "Expected a valid expression",
                format!("{lexeme:?} ({kind}) cannot start an expression"),
            ),
            SyntaxErrorKind::UnexpectedEof => {
                ("Unexpected end of input", "Input ends here...".into())
            }
            SyntaxErrorKind::MissingInitializer(name) => (
                "Expected assignment",
                format!("Constant {name} needs an initial value"),
            ),
            SyntaxErrorKind::InvalidLValue(kind) => {
                ("Expected an l-value", format!("Cannot assign to a {kind}"))
            }
            SyntaxErrorKind::TooDeep(limit) => (
                "Expression is too deeply nested",
                format!("Nesting exceeds {limit} levels here"),
            ),
        };
        render_report(
            self.path,
            self.text,
            error.span,
            error.code(),
            message,
            &label,
        )
    }
}
