//! Environments: the name → value chains that back Lox's lexical scoping.
//!
//! An [`Environment`] is a flat map from identifier to [`Value`], optionally
//! linked to an enclosing one. One is created per block and per function
//! activation; the global environment lives as long as the [`super::Interpreter`].
//!
//! Ownership is shared (`Rc<RefCell<_>>`) rather than exclusive, because a
//! closure retains the environment captured at its declaration site even
//! after that block has finished executing, and more than one closure may
//! share an ancestor. A closure stored into its own enclosing environment
//! (a recursive local `fun`) creates a reference cycle; this is accepted as
//! a bounded, process-lifetime leak rather than reason to bring in a
//! tracing collector (see `DESIGN.md`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

/// Shared handle to an [`Environment`]. Cloning an `Env` clones the handle,
/// not the bindings.
pub type Env = Rc<RefCell<Environment>>;

/// One scope's worth of bindings, plus a link to the scope it's nested in.
#[derive(Debug)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Env>,
}

impl Environment {
    /// Creates the top-level environment. Has no parent.
    pub fn new_global() -> Env {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: None,
        }))
    }

    /// Creates a fresh environment nested inside `parent`.
    pub fn new_enclosing(parent: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Binds `name` to `value` in this environment, shadowing any existing
    /// binding of the same name in this same scope.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up `name` in this environment only (no parent walk). Used for
    /// global lookups, which always address the global environment directly.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    /// Assigns to an existing binding of `name` in this environment only.
    /// Returns `false` if `name` is not already bound here.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            true
        } else {
            false
        }
    }
}

/// Walks `distance` parent links up from `env`.
///
/// # Panics
///
/// Panics if the chain runs out before `distance` links are traversed. The
/// resolver's invariant guarantees this never happens for a distance it
/// produced itself: every node in the scope-distance map is only ever
/// evaluated in an environment chain shaped the same way the resolver saw it.
fn ancestor(env: &Env, distance: usize) -> Env {
    let mut current = Rc::clone(env);
    for _ in 0..distance {
        let parent = current
            .borrow()
            .parent
            .clone()
            .expect("resolver-reported scope distance exceeds the live environment chain");
        current = parent;
    }
    current
}

/// Reads `name` from the environment `distance` scopes up from `env`.
pub fn get_at(env: &Env, distance: usize, name: &str) -> Option<Value> {
    ancestor(env, distance).borrow().get(name)
}

/// Writes `name` in the environment `distance` scopes up from `env`.
///
/// The binding is assumed to already exist there (the resolver only records
/// a distance for a name it found declared in that exact scope).
pub fn assign_at(env: &Env, distance: usize, name: &str, value: Value) {
    ancestor(env, distance).borrow_mut().define(name.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get_in_same_scope() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Number(1.0));
        assert!(matches!(global.borrow().get("x"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn test_get_missing_name_is_none() {
        let global = Environment::new_global();
        assert!(global.borrow().get("missing").is_none());
    }

    #[test]
    fn test_assign_existing_binding_succeeds() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Number(1.0));
        assert!(global.borrow_mut().assign("x", Value::Number(2.0)));
        assert!(matches!(global.borrow().get("x"), Some(Value::Number(n)) if n == 2.0));
    }

    #[test]
    fn test_assign_missing_binding_fails() {
        let global = Environment::new_global();
        assert!(!global.borrow_mut().assign("x", Value::Number(2.0)));
    }

    #[test]
    fn test_get_at_walks_ancestor_chain() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::new_enclosing(&global);
        let grandchild = Environment::new_enclosing(&child);
        assert!(matches!(get_at(&grandchild, 2, "x"), Some(Value::Number(n)) if n == 1.0));
    }

    #[test]
    fn test_assign_at_writes_to_correct_ancestor() {
        let global = Environment::new_global();
        global.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::new_enclosing(&global);
        assign_at(&child, 1, "x", Value::Number(9.0));
        assert!(matches!(global.borrow().get("x"), Some(Value::Number(n)) if n == 9.0));
    }
}
