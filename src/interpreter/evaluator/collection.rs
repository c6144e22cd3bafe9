use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::core::{EvalResult, Evaluator}, value::core::Value},
};

impl Evaluator {
    /// Evaluates an array literal.
    ///
    /// Elements are evaluated left to right. The first element to fail
    /// makes the whole array expression fail, and a return signal fired by
    /// an element becomes the expression's own result; later elements stay
    /// unevaluated either way.
    pub(crate) fn eval_array_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            let value = self.eval_expr(element)?;
            if value.is_return() {
                return Ok(value);
            }
            values.push(value);
        }

        Ok(Value::Array(Rc::new(values)))
    }

    /// Evaluates a hash literal.
    ///
    /// For each pair, the key is evaluated before its value, pairs in
    /// source order, fail-fast. Keys must be hashable (integer, string, or
    /// boolean); a later duplicate key overwrites the earlier entry, as in
    /// any map.
    pub(crate) fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)]) -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr)?;
            if key.is_return() {
                return Ok(key);
            }
            let key = key.hash_key(key_expr.line())?;

            let value = self.eval_expr(value_expr)?;
            if value.is_return() {
                return Ok(value);
            }

            map.insert(key, value);
        }

        Ok(Value::Hash(Rc::new(map)))
    }

    /// Evaluates an index expression `left[index]`.
    ///
    /// - Array with an integer index: the element, or `null` when the
    ///   index is negative or past the end. An out-of-range read is
    ///   defined as absent, not as an error.
    /// - Array with any other index type: a typed error.
    /// - Hash with a hashable index: the mapped value, or `null` when the
    ///   key is absent.
    /// - Hash with a non-hashable index: an unusable-as-key error.
    /// - Any other target type: a typed error naming both types.
    pub(crate) fn eval_index(&mut self,
                             left: &Expr,
                             index: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let target = self.eval_expr(left)?;
        if target.is_return() {
            return Ok(target);
        }

        let index = self.eval_expr(index)?;
        if index.is_return() {
            return Ok(index);
        }

        match (&target, &index) {
            (Value::Array(elements), Value::Int(i)) => {
                let value = usize::try_from(*i).ok()
                                               .and_then(|i| elements.get(i))
                                               .cloned();
                Ok(value.unwrap_or(Value::Null))
            },
            (Value::Hash(pairs), key) => {
                let key = key.hash_key(line)?;
                Ok(pairs.get(&key).cloned().unwrap_or(Value::Null))
            },
            _ => {
                Err(RuntimeError::IndexTypeMismatch { target: target.type_name().to_string(),
                                                      index:  index.type_name().to_string(),
                                                      line })
            },
        }
    }
}
