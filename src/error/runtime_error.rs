use crate::ast::{BinaryOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors abort the evaluation in progress and propagate out of
/// every nested scope; the driver renders them as `ERROR: <message>`. They
/// carry no source location.
pub enum RuntimeError {
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The operator.
        op:   PrefixOperator,
        /// Type tag of the operand.
        kind: &'static str,
    },
    /// A binary operator was applied to an unsupported pair of operands.
    /// Mixed-type operands land here as well.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// An identifier was neither bound in the environment chain nor the
    /// name of a built-in.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// Something other than a function or built-in was called.
    NotAFunction {
        /// Type tag of the called value.
        kind: &'static str,
    },
    /// A function or built-in was called with the wrong number of
    /// arguments.
    WrongNumberOfArguments {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments required.
        want: usize,
    },
    /// A built-in received an argument type it cannot work with at all.
    UnsupportedArgument {
        /// Name of the built-in.
        name: &'static str,
        /// Type tag of the offending argument.
        got:  &'static str,
    },
    /// A built-in required an array argument but received something else.
    ArgumentMustBeArray {
        /// Name of the built-in.
        name: &'static str,
        /// Type tag of the offending argument.
        got:  &'static str,
    },
    /// A value without a hash representation was used as a hash key.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// The index operator was applied to a value that supports no indexing.
    IndexNotSupported {
        /// Type tag of the indexed value.
        kind: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPrefixOperator { op, kind } => {
                write!(f, "unknown operator: {op}{kind}")
            },
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },
            // Preserved misspelling, kept for output compatibility.
            Self::IdentifierNotFound { name } => write!(f, "idenfier not found: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function {kind}"),
            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { name, got } => {
                write!(f, "argument to `{name}` not supported, got={got}")
            },
            Self::ArgumentMustBeArray { name, got } => {
                write!(f, "argument to `{name}` must be ARRAY, got {got}")
            },
            Self::UnusableAsHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
