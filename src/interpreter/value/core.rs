use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        environment::Environment,
        evaluator::function::builtin::Builtin,
        value::hash_key::{HashKey, HashPair},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: the null value,
/// integers, booleans, strings, arrays, hash maps, user-defined functions,
/// built-in functions, and the transparent `Return` wrapper that carries a
/// `return`ed value out through enclosing blocks.
///
/// Compound values (`String`, `Array`, `Hash`, `Function`) sit behind `Rc`,
/// so cloning a value is cheap and two clones of the same array share
/// identity, mirroring the reference semantics of the language.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null value.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Bool(bool),
    /// An immutable UTF-8 string.
    String(Rc<String>),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash map keyed by [`HashKey`]; each entry keeps the original key
    /// value alongside the stored value.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in function.
    Builtin(Builtin),
    /// A value produced by a `return` statement. Blocks pass this through
    /// untouched; only the program top level and function application unwrap
    /// it.
    Return(Box<Self>),
}

/// A user-defined function: parameters, body, and the environment that was
/// active when the `fn` literal was evaluated. Holding that environment is
/// what makes the function a closure.
pub struct FunctionValue {
    /// Parameter names, bound by position on every call.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment.
    pub env:        Rc<RefCell<Environment>>,
}

// The captured environment is skipped: it can transitively contain this very
// function, and the chain is unbounded.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Rc::new(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl Value {
    /// Returns the type tag used in error messages and hash keys.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Returns whether the value counts as true in a condition.
    ///
    /// Everything is truthy except `null` and `false`; in particular `0`,
    /// `""`, and empty collections are truthy.
    ///
    /// # Example
    /// ```
    /// use mk::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Compares two values by identity, the fallback used by `==` and `!=`
    /// when the operands are not both integers or both strings.
    ///
    /// Booleans and null compare by value (they are canonical); reference
    /// kinds compare by pointer, so two separately built arrays are never
    /// identical even with equal contents; values of different kinds are
    /// never identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::String(left), Self::String(right)) => Rc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name() == right.name(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
            // Preserved misspelling, kept for output compatibility.
            Self::Builtin(_) => write!(f, "builtin funciton"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
