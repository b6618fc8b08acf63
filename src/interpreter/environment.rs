use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Index of a scope inside an [`Environment`].
pub type ScopeId = usize;

/// One level of the scope chain: its own bindings plus a link to the scope
/// that encloses it.
#[derive(Debug, Default)]
struct Scope {
    values: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Stores variable bindings as a chain of nested scopes.
///
/// Scopes live in an arena and refer to their parent by index. Scope `0` is
/// the global scope and is never removed. Blocks push a child of the current
/// scope on entry and pop it on exit, so the arena always holds exactly the
/// chain from the global scope to the current one.
///
/// Lookup and assignment start at the current scope and walk towards the
/// global scope, stopping at the first scope that binds the name.
#[derive(Debug)]
pub struct Environment {
    scopes:  Vec<Scope>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope::default()],
               current: 0, }
    }

    /// The scope new declarations go into.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of scopes on the chain from the current scope to the global
    /// one. `1` when only the global scope is active.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Adds a fresh child of the current scope and makes it current.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    /// let child = environment.push_scope();
    ///
    /// assert_eq!(environment.current(), child);
    /// assert_eq!(environment.depth(), 2);
    ///
    /// environment.pop_scope();
    /// assert_eq!(environment.depth(), 1);
    /// ```
    pub fn push_scope(&mut self) -> ScopeId {
        let id = self.scopes.len();
        self.scopes.push(Scope { values: HashMap::new(),
                                 parent: Some(self.current), });
        self.current = id;
        id
    }

    /// Discards the current scope and makes its parent current again.
    /// The global scope is never discarded.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.scopes.truncate(self.current);
            self.current = parent;
        }
    }

    /// Binds `name` in the current scope, replacing any binding of the same
    /// name in that scope. Enclosing scopes are not touched.
    pub fn define(&mut self, name: &str, value: Value) {
        self.scopes[self.current].values
                                 .insert(name.to_string(), value);
    }

    /// Looks `name` up from the current scope outwards.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.chain()
            .find_map(|id| self.scopes[id].values.get(name))
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Returns `false`, leaving every scope untouched, when no scope on the
    /// chain binds `name`.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.define("a", Value::Number(1.0));
    /// environment.push_scope();
    ///
    /// assert!(environment.assign("a", Value::Number(2.0)));
    /// assert!(!environment.assign("b", Value::Nil));
    ///
    /// environment.pop_scope();
    /// assert_eq!(environment.get("a"), Some(&Value::Number(2.0)));
    /// ```
    #[must_use]
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        let Some(id) = self.chain()
                           .find(|&id| self.scopes[id].values.contains_key(name))
        else {
            return false;
        };
        self.scopes[id].values.insert(name.to_string(), value);
        true
    }

    /// Scope ids from the current scope up to the global scope.
    fn chain(&self) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(self.current), |&id| self.scopes[id].parent)
    }
}
