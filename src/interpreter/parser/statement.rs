use std::iter::Peekable;

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a complete token stream into a [`Program`] plus every error
/// found along the way.
///
/// The parser never gives up on the first problem: when a statement fails,
/// the error is recorded, the stream is re-synchronized at the next `;`,
/// and parsing continues. Callers inspect the error list to decide whether
/// the program is worth evaluating.
///
/// # Example
/// ```
/// use mk::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let (tokens, _) = tokenize("let x = 5; x + 1");
/// let (program, errors) = parse_program(&tokens);
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[(Token, usize)]) -> (Program, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(&mut iter);
            },
        }
    }

    (Program { statements }, errors)
}

/// Parses a single statement.
///
/// `let` and `return` have dedicated forms; everything else is an
/// expression statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens),
        Some((Token::Return, _)) => parse_return_statement(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses `let <identifier> = <expression>;`.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, "'='")?;

    let value = parse_expression(tokens, Precedence::Lowest)?;
    skip_to_semicolon(tokens);

    Ok(Statement::Let { name, value })
}

/// Parses `return <expression>;`.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let value = parse_expression(tokens, Precedence::Lowest)?;
    skip_to_semicolon(tokens);

    Ok(Statement::Return { value })
}

/// Parses an expression statement. The trailing `;` is optional and
/// consumed when present, which is what makes a REPL line like `1 + 2`
/// valid.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, Precedence::Lowest)?;

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(Statement::Expression { expr })
}

/// Consumes tokens up to and including the terminating `;`. Stops before a
/// `}` so an unterminated statement does not eat its enclosing block.
fn skip_to_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Semicolon => {
                tokens.next();
                break;
            },
            Token::RBrace => break,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Skips to the next statement boundary after a parse error, so the
/// statements behind it still get parsed and their errors reported.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    for (token, _) in tokens.by_ref() {
        if matches!(token, Token::Semicolon) {
            break;
        }
    }
}
