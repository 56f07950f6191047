use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, collection, function, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Propagating the error with `?`
/// aborts every enclosing scope, so a failure deep inside a call chain
/// surfaces directly at the top level.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a complete program in the given environment.
///
/// Statements run in order. A `return` at program scope stops execution and
/// yields the returned value itself, unwrapped. Otherwise the program's
/// value is the value of its last statement, or null for an empty program.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use mk::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::tokenize,
///     parser::statement::parse_program,
/// };
///
/// let (tokens, _) = tokenize("let a = 2; a * 3");
/// let (program, errors) = parse_program(&tokens);
/// assert!(errors.is_empty());
///
/// let env = Rc::new(RefCell::new(Environment::new()));
/// let value = eval_program(&program, &env).unwrap();
///
/// assert_eq!(value.to_string(), "6");
/// ```
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Return(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a block of statements.
///
/// Unlike [`eval_program`], a `Return` value is handed back still wrapped.
/// Enclosing blocks keep forwarding it untouched until a function boundary
/// (or the program itself) unwraps it; that is what lets a `return` nested
/// in an `if` escape the whole function rather than just the `if`.
///
/// Blocks do not open a scope of their own; `let` inside a block binds in
/// the surrounding environment.
pub fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// A `let` binds the evaluated value in the current environment and yields
/// that value. A `return` wraps its value for block propagation. An
/// expression statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the core dispatch of the tree walker: literals map to values,
/// operators delegate to the unary/binary modules, conditionals test
/// truthiness, function literals capture the current environment, and calls
/// and collections delegate to their modules. Evaluation is strict,
/// left-to-right, depth-first.
pub fn eval_expression(expr: &Expr, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
        Expr::StringLiteral { value } => Ok(Value::from(value.clone())),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            let condition = eval_expression(condition, env)?;

            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { function: callee,
                     arguments, } => function::core::eval_call(callee, arguments, env),
        Expr::ArrayLiteral { elements } => collection::eval_array_literal(elements, env),
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            collection::eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs } => collection::eval_hash_literal(pairs, env),
    }
}

/// Resolves an identifier.
///
/// The environment chain is searched first; only when that misses is the
/// built-in registry consulted, so a `let` binding can shadow a built-in
/// name.
fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = function::builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}
