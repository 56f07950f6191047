//! # mk
//!
//! mk is a small, dynamically typed scripting language with first-class
//! functions, lexical closures, integers, booleans, strings, arrays, and
//! hash maps. This crate contains the reference tree-walking interpreter:
//! a lexer, a Pratt parser, and a recursive evaluator over a shared
//! environment chain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::tokenize,
        parser::statement::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expr` types that
/// represent source code as a tree, plus the operator enums. Every node can
/// render itself back to parseable source, which the function display form
/// and the parser tests rely on.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors carry the source line and accumulate; runtime errors carry
/// a message only and abort evaluation. The top-level [`Error`] wraps
/// whichever phase failed.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the lexer, parser, evaluator, value representation, and
/// environments to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive prompt.
///
/// Reads one line at a time and evaluates it against a persistent top-level
/// environment, so definitions accumulate across lines.
pub mod repl;

/// Interprets a source string in a fresh environment and returns the final
/// value.
///
/// The value of a program is the value of its last statement (or of a
/// top-level `return`). Use [`interpret_with`] to keep state between runs.
///
/// # Errors
/// Returns [`Error::Parse`] with every accumulated syntax error if parsing
/// fails, or [`Error::Runtime`] if evaluation aborts.
///
/// # Examples
/// ```
/// // The value of the last statement comes back out.
/// let value = mk::interpret("let a = 2 * 3; a + 1").unwrap();
/// assert_eq!(value.to_string(), "7");
///
/// // Closures capture their defining environment.
/// let value = mk::interpret("let add = fn(x) { fn(y) { x + y } }; add(2)(3)").unwrap();
/// assert_eq!(value.to_string(), "5");
///
/// // Runtime failures surface as errors, not panics.
/// let result = mk::interpret("foo + 1");
/// assert!(result.is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Error> {
    let env = Rc::new(RefCell::new(Environment::new()));
    interpret_with(source, &env)
}

/// Interprets a source string against an existing environment.
///
/// This is the REPL entry point: the caller owns the environment, so `let`
/// bindings from one line are visible to the next.
///
/// # Errors
/// Returns [`Error::Parse`] with every accumulated syntax error if parsing
/// fails (nothing is evaluated in that case), or [`Error::Runtime`] if
/// evaluation aborts.
pub fn interpret_with(source: &str, env: &Rc<RefCell<Environment>>) -> Result<Value, Error> {
    let (tokens, mut errors) = tokenize(source);

    let (program, parse_errors) = parse_program(&tokens);
    errors.extend(parse_errors);

    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    Ok(eval_program(&program, env)?)
}
