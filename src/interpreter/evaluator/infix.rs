use crate::{
    ast::{Expr, InfixOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::{EvalResult, Evaluator}, value::core::Value},
};

impl Evaluator {
    /// Evaluates an infix operator application.
    ///
    /// The left operand is evaluated before the right one; an error or
    /// return signal in the left operand leaves the right one unevaluated.
    pub(crate) fn eval_infix(&mut self,
                             op: InfixOperator,
                             left: &Expr,
                             right: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let left = self.eval_expr(left)?;
        if left.is_return() {
            return Ok(left);
        }

        let right = self.eval_expr(right)?;
        if right.is_return() {
            return Ok(right);
        }

        Self::apply_infix(op, &left, &right, line)
    }

    /// Applies an infix operator to two already-evaluated operands.
    ///
    /// Supported combinations:
    /// - two integers: all arithmetic and comparison operators. Arithmetic
    ///   is checked: division by zero and any result outside the 64-bit
    ///   range are runtime errors, never wrapping or a crash;
    /// - two strings: `+` (concatenation), `==`, and `!=`;
    /// - two booleans: `==` and `!=`.
    ///
    /// Every other combination, including mixed-type equality, is a typed
    /// error naming the operator and both operand types.
    ///
    /// # Parameters
    /// - `op`: The infix operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let left = Value::Int(2);
    /// let right = Value::Int(3);
    /// let line = 1;
    ///
    /// let result = Evaluator::apply_infix(InfixOperator::Multiply, &left, &right, line).unwrap();
    /// assert_eq!(result, Value::Int(6));
    /// ```
    pub fn apply_infix(op: InfixOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use InfixOperator::{
            Divide, Equal, GreaterThan, GreaterThanEqual, LessThan, LessThanEqual, Minus,
            Multiply, NotEqual, Plus,
        };

        match (left, right) {
            (Value::Int(a), Value::Int(b)) => match op {
                Plus => a.checked_add(*b)
                         .map(Value::Int)
                         .ok_or(RuntimeError::ArithmeticOverflow { line }),
                Minus => a.checked_sub(*b)
                          .map(Value::Int)
                          .ok_or(RuntimeError::ArithmeticOverflow { line }),
                Multiply => a.checked_mul(*b)
                             .map(Value::Int)
                             .ok_or(RuntimeError::ArithmeticOverflow { line }),
                Divide => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        // i64::MIN / -1 is the one overflowing division.
                        a.checked_div(*b)
                         .map(Value::Int)
                         .ok_or(RuntimeError::ArithmeticOverflow { line })
                    }
                },
                Equal => Ok(Value::Bool(a == b)),
                NotEqual => Ok(Value::Bool(a != b)),
                LessThan => Ok(Value::Bool(a < b)),
                LessThanEqual => Ok(Value::Bool(a <= b)),
                GreaterThan => Ok(Value::Bool(a > b)),
                GreaterThanEqual => Ok(Value::Bool(a >= b)),
            },
            (Value::Str(a), Value::Str(b)) => match op {
                Plus => Ok(Value::Str(format!("{a}{b}"))),
                Equal => Ok(Value::Bool(a == b)),
                NotEqual => Ok(Value::Bool(a != b)),
                _ => Err(Self::infix_mismatch(op, left, right, line)),
            },
            (Value::Bool(a), Value::Bool(b)) => match op {
                Equal => Ok(Value::Bool(a == b)),
                NotEqual => Ok(Value::Bool(a != b)),
                _ => Err(Self::infix_mismatch(op, left, right, line)),
            },
            _ => Err(Self::infix_mismatch(op, left, right, line)),
        }
    }

    fn infix_mismatch(op: InfixOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> RuntimeError {
        RuntimeError::InfixTypeMismatch { op: op.to_string(),
                                          left: left.type_name().to_string(),
                                          right: right.type_name().to_string(),
                                          line }
    }
}
