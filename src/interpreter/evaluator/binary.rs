use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation on two already-evaluated operands.
///
/// Dispatch order matches the language semantics:
/// 1. Two integers: full arithmetic and comparison.
/// 2. Two strings: `+` concatenates; every other operator is an error, so
///    even `"a" == "a"` is rejected rather than compared.
/// 3. Any other pair with `==`/`!=`: identity comparison, which gives value
///    equality for booleans and null and pointer equality for reference
///    kinds.
/// 4. Everything else, including mixed types, is an unknown-operator error.
///
/// # Example
/// ```
/// use mk::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_infix, value::core::Value},
/// };
///
/// let value = eval_infix(BinaryOperator::Mul,
///                        &Value::Integer(6),
///                        &Value::Integer(7)).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn eval_infix(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(op, l, r),
        _ => match op {
            BinaryOperator::Equal => Ok(Value::Bool(left.is_identical(right))),
            BinaryOperator::NotEqual => Ok(Value::Bool(!left.is_identical(right))),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                          op,
                                                          right: right.kind() }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic follows 64-bit two's-complement semantics and wraps on
/// overflow. Division truncates toward zero; dividing by zero is a runtime
/// error rather than a crash.
fn eval_integer_infix(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    let value = match op {
        Add => Value::Integer(left.wrapping_add(right)),
        Sub => Value::Integer(left.wrapping_sub(right)),
        Mul => Value::Integer(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        Less => Value::Bool(left < right),
        Greater => Value::Bool(left > right),
        Equal => Value::Bool(left == right),
        NotEqual => Value::Bool(left != right),
    };

    Ok(value)
}

/// String operations. Concatenation is the only one.
fn eval_string_infix(op: BinaryOperator, left: &Rc<String>, right: &Rc<String>) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      op,
                                                      right: "STRING" }),
    }
}
