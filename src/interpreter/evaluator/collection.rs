use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_expression},
        value::{core::Value, hash_key::HashPair},
    },
};

/// Evaluates a list of expressions into concrete values, left to right.
///
/// Shared by array literals and call argument lists. The first failing
/// element aborts the whole list.
pub fn eval_expressions(expressions: &[Expr],
                        env: &Rc<RefCell<Environment>>)
                        -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        values.push(eval_expression(expression, env)?);
    }

    Ok(values)
}

/// Evaluates an array literal into a `Value::Array`.
pub fn eval_array_literal(elements: &[Expr], env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let values = eval_expressions(elements, env)?;
    Ok(Value::from(values))
}

/// Evaluates a hash literal into a `Value::Hash`.
///
/// Pairs are evaluated in source order, key before value. Every key must be
/// hashable (integer, boolean, or string); a later pair with an equal key
/// overwrites the earlier one.
pub fn eval_hash_literal(pairs: &[(Expr, Expr)],
                         env: &Rc<RefCell<Environment>>)
                         -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableAsHashKey { kind: key.kind() })?;

        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}

/// Evaluates an index operation on already-evaluated operands.
///
/// Arrays require an integer index; out-of-range and negative indices yield
/// null, not an error. Hashes accept any hashable index and yield null for
/// missing keys. Indexing anything else is an error.
///
/// # Example
/// ```
/// use mk::interpreter::{evaluator::collection::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// let hit = eval_index(&array, &Value::Integer(1)).unwrap();
/// assert_eq!(hit.to_string(), "20");
///
/// let miss = eval_index(&array, &Value::Integer(-1)).unwrap();
/// assert_eq!(miss.to_string(), "null");
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            let element = usize::try_from(*index).ok()
                                                 .and_then(|index| elements.get(index))
                                                 .cloned();
            Ok(element.unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), _) => {
            let key = index.hash_key()
                           .ok_or(RuntimeError::UnusableAsHashKey { kind: index.kind() })?;

            Ok(pairs.get(&key)
                    .map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}
