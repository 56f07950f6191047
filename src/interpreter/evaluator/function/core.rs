use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            collection::eval_expressions,
            core::{EvalResult, eval_block, eval_expression},
        },
        value::core::{FunctionValue, Value},
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; an error
/// in any of them aborts the call before anything is applied.
pub fn eval_call(function: &Expr,
                 arguments: &[Expr],
                 env: &Rc<RefCell<Environment>>)
                 -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    let args = eval_expressions(arguments, env)?;

    apply_function(&callee, &args)
}

/// Applies an already-evaluated callee to its arguments.
///
/// User functions run their body in a fresh environment enclosed by the
/// function's defining environment, with parameters bound by position; a
/// `Return` escaping the body is unwrapped here, so it never leaks past the
/// call. Built-ins dispatch through their registry entry. Calling any other
/// value is an error.
///
/// # Example
/// ```
/// use mk::interpreter::{
///     evaluator::function::{builtin, core::apply_function},
///     value::core::Value,
/// };
///
/// let len = Value::Builtin(builtin::lookup("len").unwrap());
/// let arg = Value::from("hello".to_string());
///
/// let value = apply_function(&len, &[arg]).unwrap();
/// assert_eq!(value.to_string(), "5");
/// ```
pub fn apply_function(callee: &Value, args: &[Value]) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments { got:  args.len(),
                                                                  want: function.parameters
                                                                                .len(), });
            }

            let env = extend_function_env(function, args);
            let result = eval_block(&function.body, &env)?;

            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin.call(args),
        _ => Err(RuntimeError::NotAFunction { kind: callee.kind() }),
    }
}

/// Builds the activation environment for a call: a fresh scope whose outer
/// is the function's defining environment (not the caller's), with each
/// parameter bound to its argument.
fn extend_function_env(function: &FunctionValue, args: &[Value]) -> Rc<RefCell<Environment>> {
    let mut env = Environment::enclosed(Rc::clone(&function.env));

    for (parameter, argument) in function.parameters.iter().zip(args) {
        env.set(parameter.clone(), argument.clone());
    }

    Rc::new(RefCell::new(env))
}

/// Strips the `Return` wrapper after a function body finishes, so the
/// caller sees the returned value and not the control-flow marker.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        value => value,
    }
}
