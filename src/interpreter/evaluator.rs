/// Core evaluation logic.
///
/// Contains the main tree-walking dispatch, program and block evaluation
/// with `Return` propagation, statement handling, and identifier
/// resolution.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` (truthiness negation) and `-` (integer negation).
pub mod unary;

/// Binary operator evaluation.
///
/// Implements integer arithmetic and comparison, string concatenation, and
/// the identity fallback for `==`/`!=`.
pub mod binary;

/// Collection evaluation.
///
/// Builds array and hash literals and implements the index operator.
pub mod collection;

/// Function evaluation.
///
/// Handles user-defined calls, closures' activation environments, and the
/// built-in function registry.
pub mod function;
