use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, env::Env},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator gives the
/// required propagation behavior: the first error in left-to-right
/// evaluation order wins and no later sibling expression is evaluated.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the AST and executes it against an environment chain.
///
/// The evaluator holds the currently active environment. Two constructs
/// change it: a `let` statement layers a new scope holding the binding on
/// top of the active chain, and a function call swaps in a fresh scope
/// parented to the callee's captured environment, restoring the caller's
/// scope afterwards.
///
/// ## Usage
///
/// An `Evaluator` is created once per program run. Independent program
/// evaluations must not share one: each run gets its own environment
/// chain.
pub struct Evaluator {
    pub(crate) env: Rc<RefCell<Env>>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator with a fresh, empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Rc::new(RefCell::new(Env::new())) }
    }

    /// Creates an evaluator over an existing environment.
    ///
    /// Useful for embedders that want bindings to persist across several
    /// program evaluations (a REPL-style host).
    #[must_use]
    pub const fn with_env(env: Rc<RefCell<Env>>) -> Self {
        Self { env }
    }

    /// Evaluates a complete program.
    ///
    /// Statements run in order; `Blank` statements are skipped. The result
    /// is the value of the last statement that produced one, or `null` for
    /// an empty program. A `return` at the top level terminates the
    /// program immediately with the returned value: the program boundary
    /// absorbs the return signal the same way a call boundary does.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// The program's final value.
    ///
    /// # Errors
    /// The first runtime error encountered, with all later statements left
    /// unevaluated.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let mut result = Value::Null;

        for stmt in program {
            match self.eval_stmt(stmt)? {
                Some(Value::Return(value)) => return Ok(*value),
                Some(value) => result = value,
                None => {},
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// Identical to program evaluation except that a return signal is
    /// passed through still wrapped: it must keep propagating through
    /// enclosing blocks until a function-call boundary unwraps it.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult<Value> {
        let mut result = Value::Null;

        for stmt in block {
            match self.eval_stmt(stmt)? {
                Some(value @ Value::Return(_)) => return Ok(value),
                Some(value) => result = value,
                None => {},
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// - `Some(value)` for statements that contribute a value to their
    ///   block: expressions, `return` (wrapped in a return signal), and
    ///   `let` (which contributes `null`, or the unbound return signal
    ///   when its initializer fired one).
    /// - `None` for `Blank`, which blocks skip entirely.
    ///
    /// # Errors
    /// Propagates the first error from the statement's expression; a `let`
    /// whose initializer fails does not bind anything. Evaluating an
    /// `import` statement is always an error: the grammar recognizes the
    /// node, but no resolution semantics exist.
    fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult<Option<Value>> {
        match stmt {
            Stmt::Blank => Ok(None),
            Stmt::Let { name, expr, .. } => {
                let value = self.eval_expr(expr)?;

                // A return signal fired inside the initializer exits the
                // enclosing function; it must never be bound.
                if value.is_return() {
                    return Ok(Some(value));
                }

                // Each binding gets its own scope layer on top of the
                // active environment. Closures created before this point
                // keep seeing the chain as it was, so re-binding a name
                // never reaches into an earlier capture.
                let mut scope = Env::enclosed(Rc::clone(&self.env));
                scope.set(name.clone(), value);
                self.env = Rc::new(RefCell::new(scope));

                Ok(Some(Value::Null))
            },
            Stmt::Return { expr, .. } => {
                let value = self.eval_expr(expr)?;
                Ok(Some(Value::Return(Box::new(value))))
            },
            Stmt::Expression { expr, .. } => Ok(Some(self.eval_expr(expr)?)),
            Stmt::Import { name, line } => {
                Err(RuntimeError::ImportUnsupported { name: name.clone(),
                                                      line: *line })
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the central dispatch: literals construct their value
    /// directly, identifiers resolve through the environment chain, and
    /// the remaining node kinds delegate to their semantic modules. The
    /// match is exhaustive over `Expr`, so an unhandled node kind is a
    /// compile error rather than a silent fallthrough.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Ident { name, line } => self.eval_ident(name, *line),
            Expr::IntLiteral { value, .. } => Ok(Value::Int(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expr::BoolLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs),
            Expr::Prefix { op, operand, line } => self.eval_prefix(*op, operand, *line),
            Expr::Infix { op, left, right, line } => self.eval_infix(*op, left, right, *line),
            Expr::Index { left, index, line } => self.eval_index(left, index, *line),
            Expr::If { cond,
                       consequence,
                       alternative,
                       line, } => {
                self.eval_if(cond, consequence, alternative.as_ref(), *line)
            },
            Expr::Func { params, body, name, .. } => {
                Ok(Value::Func { params: params.clone(),
                                 body:   body.clone(),
                                 env:    Rc::clone(&self.env),
                                 name:   name.clone(), })
            },
            Expr::Call { callee, args, line } => self.eval_call(callee, args, *line),
        }
    }

    /// Resolves an identifier.
    ///
    /// The environment chain is consulted first, then the builtin table,
    /// so `let` bindings shadow builtins. A name found in neither is an
    /// identifier-not-found error.
    fn eval_ident(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.env.borrow().get(name) {
            return Ok(value);
        }

        if let Some(builtin) = builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }

        Err(RuntimeError::UnknownIdentifier { name: name.to_string(),
                                              line })
    }

    /// Evaluates a conditional expression.
    ///
    /// The condition must evaluate to a boolean; there is no truthiness
    /// coercion of integers, strings, or collections. `true` selects the
    /// consequence block, `false` the alternative block if present, and
    /// `null` otherwise.
    fn eval_if(&mut self,
               cond: &Expr,
               consequence: &Block,
               alternative: Option<&Block>,
               line: usize)
               -> EvalResult<Value> {
        match self.eval_expr(cond)? {
            Value::Bool(true) => self.eval_block(consequence),
            Value::Bool(false) => match alternative {
                Some(block) => self.eval_block(block),
                None => Ok(Value::Null),
            },
            signal @ Value::Return(_) => Ok(signal),
            other => Err(RuntimeError::NonBoolCondition { found: other.type_name().to_string(),
                                                          line }),
        }
    }
}
