use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::{EvalResult, Evaluator}, env::Env},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must yield a function or a
    /// builtin; a non-callable callee is rejected before any argument is
    /// evaluated. Arguments are then evaluated left to right, fail-fast.
    /// Builtins check their own arity and run natively; user functions are
    /// applied through [`apply_function`].
    ///
    /// [`apply_function`]: Evaluator::apply_function
    ///
    /// # Parameters
    /// - `callee`: Expression producing the value to call.
    /// - `args`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call's result value.
    ///
    /// # Errors
    /// - Any error from evaluating the callee or an argument.
    /// - `NotCallable` when the callee is neither function nor builtin.
    /// - `WrongNumberOfArguments` on arity mismatch.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            args: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.eval_expr(callee)?;
        if callee.is_return() {
            return Ok(callee);
        }

        if !matches!(callee, Value::Func { .. } | Value::Builtin(_)) {
            return Err(RuntimeError::NotCallable { found: callee.type_name().to_string(),
                                                   line });
        }

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval_expr(arg)?;
            if value.is_return() {
                return Ok(value);
            }
            arg_values.push(value);
        }

        match &callee {
            Value::Func { .. } => self.apply_function(&callee, arg_values, line),
            Value::Builtin(builtin) => builtin.call(&arg_values, line),
            // The callable check above rules everything else out.
            _ => unreachable!(),
        }
    }

    /// Applies a user-defined function to evaluated arguments.
    ///
    /// The argument count must match the parameter count exactly; no
    /// parameter is ever left unbound or null-filled. A fresh scope is
    /// created whose outer environment is the function's *captured*
    /// environment (the definition site, not the call site), the
    /// parameters are bound into it, and the body runs in that scope. The
    /// caller's scope is restored afterwards.
    ///
    /// A function that was bound by `let` is also rebound under its own
    /// name in the invocation scope. Recursion resolves through that
    /// binding at call time, so no environment ever holds a reference
    /// cycle back to itself.
    ///
    /// A return signal produced by the body is absorbed here: the call's
    /// result is the unwrapped value. Otherwise the result is the body's
    /// last-statement value, or `null` for an empty body.
    fn apply_function(&mut self, func: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        let Value::Func { params, body, env, name } = func else {
            // eval_call only dispatches function values here.
            unreachable!()
        };

        if args.len() != params.len() {
            return Err(RuntimeError::WrongNumberOfArguments { expected: params.len(),
                                                              found:    args.len(),
                                                              line });
        }

        let mut scope = Env::enclosed(Rc::clone(env));
        if let Some(name) = name {
            scope.set(name.clone(), func.clone());
        }
        for (param, arg) in params.iter().zip(args) {
            scope.set(param.clone(), arg);
        }

        let saved = std::mem::replace(&mut self.env, Rc::new(RefCell::new(scope)));
        let result = self.eval_block(body);
        self.env = saved;

        match result? {
            Value::Return(value) => Ok(*value),
            value => Ok(value),
        }
    }
}
