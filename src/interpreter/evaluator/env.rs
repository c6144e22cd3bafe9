use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single lexical scope: an owned name-to-value store plus an optional
/// reference to the enclosing scope.
///
/// A scope exists for the program root, for each function invocation, and
/// for each `let` binding, which layers its name on top of the chain that
/// was active before it. Function values share the chain that was active
/// at their definition site, which is what makes closures capture
/// lexically: a later re-binding of a name layers a new scope the closure
/// never sees. There is no deletion operation.
pub struct Env {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Env>>>,
}

#[allow(clippy::new_without_default)]
impl Env {
    /// Creates an empty top-level scope with no enclosing environment.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None }
    }

    /// Creates an empty scope enclosed by `outer`.
    ///
    /// For a function invocation the outer reference points at the
    /// function's captured environment, not at the caller's scope; for a
    /// `let` binding it points at the chain active before the binding.
    #[must_use]
    pub fn enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer) }
    }

    /// Looks up a name, walking the scope chain outward.
    ///
    /// Absence is a normal result, not an error; the evaluator turns it
    /// into an identifier-not-found error where that is appropriate.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// The bound value from the innermost scope that defines the name, or
    /// `None` if no scope in the chain does.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope, inserting or overwriting.
    ///
    /// Only the local scope is ever written: an outer binding of the same
    /// name is shadowed, never mutated.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

// Bindings can hold closures that capture this same environment, so the
// derived Debug would recurse forever. Print the bound names only.
impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.store.keys().collect();
        names.sort();

        f.debug_struct("Env")
         .field("names", &names)
         .field("has_outer", &self.outer.is_some())
         .finish()
    }
}
