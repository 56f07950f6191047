use chrono::Local;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Returns the current local wall-clock time as a string in
/// `YYYY-MM-DD HH:MM:SS` form.
///
/// Takes no arguments; the registry enforces the arity.
#[allow(clippy::unnecessary_wraps)]
pub fn now(_args: &[Value]) -> EvalResult<Value> {
    let formatted = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Ok(Value::from(formatted))
}
