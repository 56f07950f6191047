use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression forms in the language, from literals and
/// identifiers to conditionals, function literals, calls, and collection
/// literals. Most of the language is expressions; statements only bind
/// values, return them, or wrap an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal. The value holds the raw bytes between the quotes.
    StringLiteral {
        /// The literal contents, without quotes.
        value: String,
    },
    /// A prefix operation, `!x` or `-x`.
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
    },
    /// A binary operation such as `a + b` or `a < b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A conditional expression. The alternative is optional; a false
    /// condition without one evaluates to null.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal, `fn(x, y) { ... }`. Evaluating it captures the
    /// current environment, which is what makes closures work.
    FunctionLiteral {
        /// Parameter names. Only plain identifiers can appear here.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call expression. The callee is an arbitrary expression so both
    /// `add(1, 2)` and `fn(x) { x }(1)` parse.
    Call {
        /// Expression producing the function to call.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// An array literal, `[1, 2, 3]`.
    ArrayLiteral {
        /// Element expressions, evaluated left to right.
        elements: Vec<Self>,
    },
    /// An index expression, `xs[0]` or `h["key"]`.
    Index {
        /// The indexed expression.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// A hash literal, `{"a": 1, 2: "b"}`. Keys are arbitrary expressions
    /// evaluated at runtime. Pairs keep their source order so evaluation is
    /// deterministic.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Self, Self)>,
    },
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding, `let x = <expr>;`. The statement's value is the bound
    /// value.
    Let {
        /// The bound name.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// A return statement, `return <expr>;`. The produced value propagates
    /// through enclosing blocks until a function boundary (or the program)
    /// unwraps it.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// An expression used as a statement.
    Expression {
        /// The wrapped expression.
        expr: Expr,
    },
}

/// A brace-delimited sequence of statements, used for function bodies and
/// the arms of `if` expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A complete parsed program: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes a `, `-separated list of displayable items.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// The rendering below always produces parseable source: operator
// expressions come out fully parenthesized, string literals re-quoted, and
// `if`/`fn` with their braces. Parsing a rendered expression yields a
// structurally equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                write_joined(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
