use std::iter::Peekable;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, Precedence, parse_expression, parse_if},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Dispatches on the token starting an expression.
///
/// This is the prefix half of the Pratt parser: literals, identifiers, the
/// two prefix operators, grouping, `if`, function literals, and the array
/// and hash literal openers each have a rule here. A token with no rule is
/// a `NoPrefixParseFunction` error, which is also how an `ILLEGAL`-ish
/// leftover (say a stray `}`) surfaces to the user.
pub(crate) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Identifier(_)
         | Token::Integer(_)
         | Token::String(_)
         | Token::True
         | Token::False,
         _) => parse_literal(tokens),
        (Token::Bang | Token::Minus, _) => parse_prefix_operator(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::If, _) => {
            tokens.next();
            parse_if(tokens)
        },
        (Token::Function, _) => parse_function_literal(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::LBrace, _) => parse_hash_literal(tokens),
        (token, line) => Err(ParseError::NoPrefixParseFunction { token: token.describe(),
                                                                 line:  *line, }),
    }
}

/// Parses a single-token literal or identifier.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(Expr::Identifier { name: name.clone() }),
        Some((Token::Integer(value), _)) => Ok(Expr::IntegerLiteral { value: *value }),
        Some((Token::String(value), _)) => Ok(Expr::StringLiteral { value: value.clone() }),
        Some((Token::True, _)) => Ok(Expr::BooleanLiteral { value: true }),
        Some((Token::False, _)) => Ok(Expr::BooleanLiteral { value: false }),
        _ => unreachable!(),
    }
}

/// Parses `!<expr>` or `-<expr>`.
///
/// The operand is parsed at [`Precedence::Prefix`], so prefix operators bind
/// tighter than any infix operator and nest right to left: `!-a` is
/// `!(-a)`.
fn parse_prefix_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.next() {
        Some((Token::Bang, _)) => PrefixOperator::Bang,
        Some((Token::Minus, _)) => PrefixOperator::Minus,
        _ => unreachable!(),
    };

    let right = parse_expression(tokens, Precedence::Prefix)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right) })
}

/// Parses a parenthesized expression. The parentheses only steer
/// precedence; no wrapper node is produced.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen, "')'")?;

    Ok(expr)
}

/// Parses a function literal: `fn(<params>) { <body> }`.
///
/// The parameter list is a possibly empty comma-separated list of plain
/// identifiers; anything else there is a parse error.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    expect_token(tokens, &Token::LParen, "'('")?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen, "',' or ')'")?;

    expect_token(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens)?;

    Ok(Expr::FunctionLiteral { parameters, body })
}

/// Parses an array literal: `[<expr>, ...]`.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket,
                                         "',' or ']'")?;

    Ok(Expr::ArrayLiteral { elements })
}

/// Parses a hash literal: `{<key>: <value>, ...}`.
///
/// Keys are full expressions, evaluated at runtime; `{1 + 2: "three"}` is
/// legal. Pair order is kept so evaluation stays deterministic.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let mut pairs = Vec::new();

    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::HashLiteral { pairs });
    }

    loop {
        let key = parse_expression(tokens, Precedence::Lowest)?;
        expect_token(tokens, &Token::Colon, "':'")?;
        let value = parse_expression(tokens, Precedence::Lowest)?;
        pairs.push((key, value));

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((token, line)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or '}'",
                                                       found:    token.describe(),
                                                       line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(Expr::HashLiteral { pairs })
}
