use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a mapping from names to values with an optional outer
/// parent.
///
/// Environments are shared through `Rc<RefCell<_>>`: every closure holds the
/// environment that was active when its literal was evaluated, and calling a
/// function wraps that captured environment in a fresh enclosed one for the
/// parameter bindings. Lookups walk the outer chain; writes always go to the
/// innermost store. The chain forms a DAG, never a cycle, because bindings
/// can only be replaced, not re-parented.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// The new environment starts empty; lookups that miss it continue in
    /// `outer`. This is how a function call sees both its parameters and the
    /// bindings of its defining environment.
    #[must_use]
    pub fn enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Looks up `name`, searching this environment first and then the outer
    /// chain.
    ///
    /// # Example
    /// ```
    /// use mk::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x".to_string(), Value::Integer(5));
    ///
    /// assert_eq!(env.get("x").map(|v| v.to_string()), Some("5".to_string()));
    /// assert!(env.get("y").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this environment.
    ///
    /// Outer bindings of the same name are shadowed, not modified.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
