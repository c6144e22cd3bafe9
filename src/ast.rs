/// Represents a prefix (unary) operator.
///
/// Prefix operators bind tighter than every infix operator and are applied
/// to the single expression that follows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Identity on integers: `+x`.
    Plus,
    /// Integer negation: `-x`.
    Minus,
    /// Boolean negation: `!x`.
    Not,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Represents an infix (binary) operator.
///
/// The parser resolves precedence and associativity, so by the time an
/// `Expr::Infix` node exists its operand grouping is already fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// `+`: integer addition or string concatenation.
    Plus,
    /// `-`: integer subtraction.
    Minus,
    /// `*`: integer multiplication.
    Multiply,
    /// `/`: integer division.
    Divide,
    /// `==`: equality on integers, booleans, and strings.
    Equal,
    /// `!=`: inequality on integers, booleans, and strings.
    NotEqual,
    /// `<`: integer less-than.
    LessThan,
    /// `<=`: integer less-than-or-equal.
    LessThanEqual,
    /// `>`: integer greater-than.
    GreaterThan,
    /// `>=`: integer greater-than-or-equal.
    GreaterThanEqual,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::LessThan => write!(f, "<"),
            Self::LessThanEqual => write!(f, "<="),
            Self::GreaterThan => write!(f, ">"),
            Self::GreaterThanEqual => write!(f, ">="),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form the grammar admits, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls, and collection literals. Each variant carries the source line it
/// started on for error reporting.
///
/// Every node is well-typed by its variant tag alone: the parser only
/// constructs variants whose payloads match the tag, so the evaluator can
/// match exhaustively without re-validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Ident {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A double-quoted string literal.
    StringLiteral {
        /// The string contents, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BoolLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// The element expressions, in source order.
        elements: Vec<Expr>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A hash literal: `{k1: v1, k2: v2, ...}`.
    ///
    /// Keys and values are arbitrary expressions at parse time; keys must
    /// evaluate to a hashable value (integer, string, or boolean).
    HashLiteral {
        /// The key/value expression pairs, in source order.
        pairs: Vec<(Expr, Expr)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operator applied to one operand.
    Prefix {
        /// The operator.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Expr>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An infix operator applied to two operands.
    Infix {
        /// The operator.
        op:    InfixOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An indexing expression: `left[index]`.
    Index {
        /// The expression being indexed (array or hash at runtime).
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional expression: `if (cond) { ... } else { ... }`.
    ///
    /// The `else` branch is optional; without it, a false condition yields
    /// `null`.
    If {
        /// The condition, which must evaluate to a boolean.
        cond:        Box<Expr>,
        /// Statements executed when the condition is `true`.
        consequence: Block,
        /// Statements executed when the condition is `false`, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal: `fn (p1, p2) { ... }`.
    Func {
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body.
        body:   Block,
        /// The name the function was bound to by `let`, if any.
        ///
        /// Purely informational; recursion works through ordinary
        /// identifier lookup at call time.
        name:   Option<String>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A call expression: `callee(arg1, arg2, ...)`.
    Call {
        /// The expression producing the function to call.
        callee: Box<Expr>,
        /// Argument expressions, in source order.
        args:   Vec<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Returns the source line the expression started on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Ident { line, .. }
            | Self::IntLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BoolLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::HashLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::Index { line, .. }
            | Self::If { line, .. }
            | Self::Func { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A no-op statement produced by a run of blank lines in the source.
    ///
    /// Preserved as a grammar quirk rather than an error: block evaluation
    /// skips it entirely.
    Blank,
    /// A binding statement: `let <name> = <expr> [;]`.
    Let {
        /// The name being bound.
        name: String,
        /// The initializer expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A return statement: `return <expr> [;]`.
    Return {
        /// The expression whose value is returned.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An expression used as a statement.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An import statement: `import "<name>" [;]`.
    ///
    /// The grammar recognizes the node shape, but no resolution semantics
    /// exist; evaluating it is a runtime error.
    Import {
        /// The name of the module being imported.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

/// An ordered sequence of statements, as found between braces.
pub type Block = Vec<Stmt>;

/// A complete parsed program: the top-level block.
pub type Program = Block;
