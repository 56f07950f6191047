use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the length of a string (in bytes), array (in elements), or hash
/// (in pairs).
///
/// # Example
/// ```
/// use mk::interpreter::{evaluator::function::array::len, value::core::Value};
///
/// let value = len(&[Value::from("héllo".to_string())]).unwrap();
/// assert_eq!(value.to_string(), "6");
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::String(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        Value::Hash(pairs) => Ok(Value::Integer(pairs.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { name: "len",
                                                         got:  other.kind(), }),
    }
}

/// Returns the first element of an array, or null when it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ArgumentMustBeArray { name: "first",
                                                         got:  other.kind(), }),
    }
}

/// Returns the last element of an array, or null when it is empty.
pub fn last(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ArgumentMustBeArray { name: "last",
                                                         got:  other.kind(), }),
    }
}

/// Returns a new array holding everything but the first element, or null
/// when the array is empty. `rest` of a one-element array is the empty
/// array, which is the usual recursion terminator together with `len`.
///
/// # Example
/// ```
/// use mk::interpreter::{evaluator::function::array::rest, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let value = rest(&[array]).unwrap();
/// assert_eq!(value.to_string(), "[2]");
/// ```
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::from(elements[1..].to_vec()))
            }
        },
        other => Err(RuntimeError::ArgumentMustBeArray { name: "rest",
                                                         got:  other.kind(), }),
    }
}

/// Returns a new array with a value appended; the original array is left
/// untouched.
pub fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(args[1].clone());
            Ok(Value::from(elements))
        },
        other => Err(RuntimeError::ArgumentMustBeArray { name: "push",
                                                         got:  other.kind(), }),
    }
}
