use crate::{
    ast::{Expr, PrefixOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::{EvalResult, Evaluator}, value::core::Value},
};

impl Evaluator {
    /// Evaluates a prefix operator applied to one operand.
    ///
    /// - `!` requires a boolean operand and yields its negation; no other
    ///   type is coerced.
    /// - `-` requires an integer operand and yields its negation; negating
    ///   the minimum 64-bit integer is an overflow error.
    /// - `+` requires an integer operand and is the identity on it.
    ///
    /// # Parameters
    /// - `op`: The prefix operator.
    /// - `operand`: The operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Errors
    /// A type mismatch naming the operator and the operand type, or any
    /// error from evaluating the operand itself.
    pub(crate) fn eval_prefix(&mut self,
                              op: PrefixOperator,
                              operand: &Expr,
                              line: usize)
                              -> EvalResult<Value> {
        let value = self.eval_expr(operand)?;
        if value.is_return() {
            return Ok(value);
        }

        match (op, &value) {
            (PrefixOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (PrefixOperator::Minus, Value::Int(n)) => {
                n.checked_neg()
                 .map(Value::Int)
                 .ok_or(RuntimeError::ArithmeticOverflow { line })
            },
            (PrefixOperator::Plus, Value::Int(n)) => Ok(Value::Int(*n)),
            _ => {
                Err(RuntimeError::PrefixTypeMismatch { op:      op.to_string(),
                                                       operand: value.type_name().to_string(),
                                                       line })
            },
        }
    }
}
