pub mod error;
pub mod expression;
pub mod formatter;
pub mod program;
pub mod statement;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use expression::{Expression, InfixOperator};
pub use program::{Node, NodeKind, Program};
pub use statement::{FunctionDecl, Statement, VariableDecl};

use crate::lexer::{tokenize, Span, Token, TokenKind};
use compact_str::CompactString;

/// Tokenizes and parses `source` into a program.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse()
}

/// How far operator chains, parentheses and assignments may nest. This also
/// bounds the height of every tree the parser returns.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent parser reading a token buffer through a cursor.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let terminated = tokens
            .last()
            .is_some_and(|t| matches!(t.kind, TokenKind::EndOfInput));
        if !terminated {
            let end = tokens.last().map_or(0, |t| t.span.end() as usize);
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token {
                kind: TokenKind::EndOfInput,
                lexeme: CompactString::default(),
                span: Span::new(end, end),
                line,
            });
        }
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> &Token {
        // The buffer always ends with `EndOfInput`, which is never consumed.
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    fn next_token(&mut self) -> Token {
        let token = self.peek().clone();
        if !matches!(token.kind, TokenKind::EndOfInput) {
            self.cursor += 1;
        }
        token
    }

    fn error(token: &Token, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            span: token.span,
            line: token.line,
        }
    }

    fn unexpected(token: &Token, expected: TokenKind) -> SyntaxError {
        let kind = match token.kind {
            TokenKind::EndOfInput => SyntaxErrorKind::UnexpectedEof,
            actual => SyntaxErrorKind::UnexpectedToken { actual, expected },
        };
        Self::error(token, kind)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, SyntaxError> {
        if self.peek().kind != expected {
            Err(Self::unexpected(self.peek(), expected))
        } else {
            Ok(self.next_token())
        }
    }

    fn eat_if(&mut self, next: TokenKind) -> Option<Token> {
        if self.peek().kind != next {
            None
        } else {
            Some(self.next_token())
        }
    }

    fn eat_operator(&mut self, symbols: &[&str]) -> Option<Token> {
        let token = self.peek();
        if matches!(token.kind, TokenKind::BinaryOperator)
            && symbols.contains(&token.lexeme.as_str())
        {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// Enters one more level of nesting and returns the level to restore
    /// once the nested rule is done.
    fn descend(&mut self, token: &Token) -> Result<usize, SyntaxError> {
        let base = self.depth;
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Self::error(token, SyntaxErrorKind::TooDeep(MAX_DEPTH)));
        }
        Ok(base)
    }
}

// Parse program/statements
impl Parser {
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !matches!(self.peek().kind, TokenKind::EndOfInput) {
            statements.push(self.parse_statement()?);
        }

        Ok(Program::new(statements))
    }

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek().kind {
            TokenKind::Let | TokenKind::Const => {
                Ok(Statement::VariableDecl(self.parse_variable_decl()?))
            }
            _ => {
                let expr = self.parse_expression()?;
                // Expression statements may omit the semicolon.
                let _ = self.eat_if(TokenKind::Semicolon);
                Ok(Statement::Expression(expr))
            }
        }
    }

    fn parse_variable_decl(&mut self) -> Result<VariableDecl, SyntaxError> {
        let keyword = self.next_token();
        let constant = matches!(keyword.kind, TokenKind::Const);
        let name = self.expect(TokenKind::Identifier)?.lexeme;

        if self.eat_if(TokenKind::Equals).is_none() {
            if constant {
                return Err(Self::error(
                    self.peek(),
                    SyntaxErrorKind::MissingInitializer(name),
                ));
            }
            let _ = self.expect(TokenKind::Semicolon)?;
            return Ok(VariableDecl {
                name,
                constant,
                initial: None,
            });
        }

        let initial = self.parse_expression()?;
        let _ = self.expect(TokenKind::Semicolon)?;
        Ok(VariableDecl {
            name,
            constant,
            initial: Some(initial),
        })
    }
}

// Expressions, lowest precedence first
impl Parser {
    pub fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expression, SyntaxError> {
        let target = self.parse_additive()?;

        let Some(equals) = self.eat_if(TokenKind::Equals) else {
            return Ok(target);
        };
        if target.get_l_value().is_none() {
            return Err(Self::error(
                &equals,
                SyntaxErrorKind::InvalidLValue(target.kind()),
            ));
        }
        let base = self.descend(&equals)?;
        let value = self.parse_assignment()?;
        self.depth = base;
        Ok(Expression::assignment(target, value))
    }

    fn parse_additive(&mut self) -> Result<Expression, SyntaxError> {
        let base = self.depth;
        let mut lhs = self.parse_multiplicative()?;
        while let Some(operator) = self.eat_operator(&["+", "-"]) {
            self.descend(&operator)?;
            let rhs = self.parse_multiplicative()?;
            lhs = Expression::binary(&operator.lexeme, lhs, rhs);
        }
        self.depth = base;
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, SyntaxError> {
        let base = self.depth;
        let mut lhs = self.parse_primary()?;
        while let Some(operator) = self.eat_operator(&["*", "/", "%"]) {
            self.descend(&operator)?;
            let rhs = self.parse_primary()?;
            lhs = Expression::binary(&operator.lexeme, lhs, rhs);
        }
        self.depth = base;
        Ok(lhs)
    }

    fn parse_primary(&mut self) -> Result<Expression, SyntaxError> {
        let token = self.next_token();

        match token.kind {
            TokenKind::Identifier => Ok(Expression::Identifier(token.lexeme)),
            TokenKind::Number => {
                let value = token
                    .lexeme
                    .parse()
                    .expect("Digit runs are always parseable into f64.");
                Ok(Expression::NumericLiteral(value))
            }
            // Bracketed expression
            TokenKind::OpenParen => {
                let base = self.descend(&token)?;
                let inner = self.parse_expression()?;
                let _ = self.expect(TokenKind::CloseParen)?;
                self.depth = base;
                Ok(inner)
            }
            TokenKind::EndOfInput => Err(Self::error(&token, SyntaxErrorKind::UnexpectedEof)),
            kind => Err(Self::error(
                &token,
                SyntaxErrorKind::NonExpression(kind, token.lexeme.clone()),
            )),
        }
    }
}
