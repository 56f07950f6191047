/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an integer,
/// identifier, keyword, operator, or delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input into `(token, line)` pairs.
/// - Handles integer and string literals, identifiers, and keywords.
/// - Reports unmatchable input as illegal-token errors without stopping.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt (operator-precedence) parser: every token kind may own a prefix
/// rule and an infix rule, and a small precedence table decides how far an
/// infix rule may extend the expression to its left.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces the precedence and associativity of every operator.
/// - Accumulates parse errors with line information instead of failing
///   fast.
pub mod parser;

/// The evaluator module executes AST nodes and computes results.
///
/// A recursive tree walker: it reduces the AST to runtime values under a
/// lexically scoped environment, with closures, higher-order functions, and
/// a small set of built-ins.
///
/// # Responsibilities
/// - Evaluates AST nodes strictly, left to right, depth first.
/// - Propagates `return` values through nested blocks and runtime errors
///   out of every scope.
/// - Resolves identifiers through the environment chain, then built-ins.
pub mod evaluator;

/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during execution together with display
/// forms, truthiness, identity comparison, and the hash-key protocol that
/// decides which values may serve as hash map keys.
pub mod value;

/// Lexical environments.
///
/// A chain of name→value scopes shared behind `Rc<RefCell<_>>`; closures
/// keep their defining environment alive by holding one of these links.
pub mod environment;
