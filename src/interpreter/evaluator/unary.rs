use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// `!` negates truthiness and works on every value: `!true` is `false`,
/// `!null` is `true`, and any other value negates to `false`. `-` works on
/// integers only; anything else is an unknown-operator error.
///
/// # Example
/// ```
/// use mk::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let value = eval_prefix(PrefixOperator::Minus, &Value::Integer(5)).unwrap();
/// assert_eq!(value.to_string(), "-5");
///
/// let value = eval_prefix(PrefixOperator::Bang, &Value::Null).unwrap();
/// assert_eq!(value.to_string(), "true");
/// ```
pub fn eval_prefix(op: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Bang => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Minus => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           kind: right.kind(), }),
        },
    }
}
