use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression, token_precedence},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not one of the seven binary
/// operators.
///
/// # Example
/// ```
/// use mk::{ast::BinaryOperator, interpreter::{lexer::Token, parser::infix::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Parses a binary operator in infix position, with `left` already parsed.
///
/// The right operand is normally parsed at the operator's own level, which
/// makes the binary operators left-associative. `+` is the exception: its
/// right operand is parsed one level looser, so chains of additions nest to
/// the right and `1 + 2 + 3` comes out as `(1 + (2 + 3))`.
pub fn parse_infix<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = match tokens.next() {
        Some((token, line)) => (token, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let Some(op) = token_to_binary_operator(token) else {
        return Err(ParseError::ExpectedToken { expected: "a binary operator",
                                               found:    token.describe(),
                                               line, });
    };

    let precedence = if matches!(op, BinaryOperator::Add) {
        Precedence::LessGreater
    } else {
        token_precedence(token)
    };
    let right = parse_expression(tokens, precedence)?;

    Ok(Expr::Infix { left: Box::new(left),
                     op,
                     right: Box::new(right) })
}

/// Parses a call argument list, with the callee already parsed and the
/// stream positioned at `(`.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>, function: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen,
                                          "',' or ')'")?;

    Ok(Expr::Call { function: Box::new(function),
                    arguments })
}

/// Parses an index operation, with the indexed expression already parsed
/// and the stream positioned at `[`.
pub fn parse_index<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket, "']'")?;

    Ok(Expr::Index { left:  Box::new(left),
                     index: Box::new(index), })
}
