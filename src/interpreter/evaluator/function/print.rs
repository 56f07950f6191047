use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints each argument's display form on its own line and returns null.
///
/// Accepts any number of arguments, including none. This is the language's
/// only output primitive.
#[allow(clippy::unnecessary_wraps)]
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
