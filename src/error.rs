/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include illegal tokens, unexpected tokens, and
/// truncated input, each tagged with the source line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown operators, unresolved identifiers, bad call targets, and
/// unusable hash keys.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Top-level error returned by [`crate::interpret`].
///
/// Either the parser rejected the source (carrying every accumulated parse
/// error) or evaluation aborted with a runtime error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// One or more syntax errors; nothing was evaluated.
    Parse(Vec<ParseError>),
    /// Evaluation aborted.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
