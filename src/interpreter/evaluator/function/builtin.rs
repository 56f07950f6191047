use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{array, clock, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and returns a
/// value or a runtime error.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts every arity.
#[derive(Clone, Copy)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// A registry entry for an intrinsic function: its name, arity, and
/// handler. This is the value a [`Value::Builtin`] carries.
#[derive(Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Defines the builtin registry.
///
/// Each entry provides a name, an arity specification, and the handler
/// function. The macro produces the static lookup table consulted by
/// identifier resolution.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: array::len },
    "first" => { arity: Arity::Exact(1), func: array::first },
    "last"  => { arity: Arity::Exact(1), func: array::last },
    "rest"  => { arity: Arity::Exact(1), func: array::rest },
    "push"  => { arity: Arity::Exact(2), func: array::push },
    "puts"  => { arity: Arity::Any,      func: print::puts },
    "now"   => { arity: Arity::Exact(0), func: clock::now },
}

/// Looks up a builtin by name.
///
/// Identifier resolution calls this only after the environment chain
/// missed, so user bindings shadow builtins.
///
/// # Example
/// ```
/// use mk::interpreter::evaluator::function::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("map").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

impl Builtin {
    /// The registry name of this builtin.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the builtin after checking its arity.
    ///
    /// # Errors
    /// `WrongNumberOfArguments` when an `Exact` arity is violated; otherwise
    /// whatever the handler reports.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(want) = self.arity
           && args.len() != want
        {
            return Err(RuntimeError::WrongNumberOfArguments { got: args.len(),
                                                              want });
        }

        (self.func)(args)
    }
}
