use super::error::{ConstAssignError, NameError, RuntimeError};
use crate::value::Value;
use compact_str::CompactString;
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::{Rc, Weak},
};

/// A handle to one lexical scope.
///
/// Cloning the handle shares the scope. A child only holds a weak link to
/// its parent: the caller that created the parent keeps it alive, and once
/// the parent is dropped the chain simply ends at the child.
#[derive(Debug, Clone)]
pub struct Environment {
    inner: Rc<RefCell<EnvironmentImpl>>,
}

#[derive(Debug, Default)]
struct EnvironmentImpl {
    values: HashMap<CompactString, Value>,
    constants: HashSet<CompactString>,
    parent: Option<Weak<RefCell<EnvironmentImpl>>>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EnvironmentImpl::default())),
        }
    }

    /// A root scope holding the `true`, `false` and `null` constants.
    pub fn global() -> Self {
        let mut globals = Self::new();

        for (name, value) in [
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("null", Value::Null),
        ] {
            globals
                .declare_var(name, value, true)
                .expect("A fresh scope has no bindings.");
        }

        globals
    }

    pub fn new_scope(&self) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EnvironmentImpl {
                parent: Some(Rc::downgrade(&self.inner)),
                ..Default::default()
            })),
        }
    }

    pub fn is_same_scope(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Only this scope is checked for an existing binding, so a child may
    /// shadow any name of its ancestors.
    pub fn declare_var(
        &mut self,
        name: &str,
        value: Value,
        constant: bool,
    ) -> Result<Value, NameError> {
        let mut inner = self.inner.borrow_mut();
        if inner.values.contains_key(name) {
            return Err(NameError::Redeclared(name.into()));
        }

        inner.values.insert(name.into(), value);
        if constant {
            inner.constants.insert(name.into());
        }
        Ok(value)
    }

    pub fn assign_var(&mut self, name: &str, value: Value) -> Result<Value, RuntimeError> {
        let scope = self.resolve(name)?;
        let mut inner = scope.inner.borrow_mut();
        if inner.constants.contains(name) {
            return Err(ConstAssignError { name: name.into() }.into());
        }

        inner.values.insert(name.into(), value);
        Ok(value)
    }

    pub fn lookup_var(&self, name: &str) -> Result<Value, NameError> {
        let scope = self.resolve(name)?;
        let value = scope.inner.borrow().values.get(name).copied();
        value.ok_or_else(|| NameError::Undefined(name.into()))
    }

    /// Finds the innermost scope, starting from this one, that declares `name`.
    pub fn resolve(&self, name: &str) -> Result<Environment, NameError> {
        let mut current = Rc::clone(&self.inner);
        loop {
            let declared = current.borrow().values.contains_key(name);
            if declared {
                return Ok(Self { inner: current });
            }

            let parent = current.borrow().parent.as_ref().and_then(Weak::upgrade);
            match parent {
                Some(parent) => current = parent,
                None => return Err(NameError::Undefined(name.into())),
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeclaration_in_same_scope_fails() {
        let mut env = Environment::new();
        env.declare_var("x", Value::Number(1.0), false).unwrap();
        assert_eq!(
            env.declare_var("x", Value::Number(2.0), false),
            Err(NameError::Redeclared("x".into()))
        );
        assert_eq!(env.lookup_var("x"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn constant_is_not_reassigned() {
        let mut env = Environment::new();
        env.declare_var("x", Value::Number(1.0), true).unwrap();
        assert_eq!(
            env.assign_var("x", Value::Number(2.0)),
            Err(RuntimeError::ConstAssign(ConstAssignError { name: "x".into() }))
        );
        assert_eq!(env.lookup_var("x"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assignment_writes_to_resolving_scope() {
        let mut parent = Environment::new();
        parent.declare_var("x", Value::Number(1.0), false).unwrap();
        let mut child = parent.new_scope();
        child.assign_var("x", Value::Number(5.0)).unwrap();
        assert_eq!(parent.lookup_var("x"), Ok(Value::Number(5.0)));
        assert!(child.resolve("x").unwrap().is_same_scope(&parent));
    }

    #[test]
    fn shadowing_leaves_parent_untouched() {
        let mut parent = Environment::new();
        parent.declare_var("x", Value::Number(1.0), true).unwrap();
        let mut child = parent.new_scope();
        child.declare_var("x", Value::Number(2.0), false).unwrap();
        child.assign_var("x", Value::Number(3.0)).unwrap();
        assert_eq!(child.lookup_var("x"), Ok(Value::Number(3.0)));
        assert_eq!(parent.lookup_var("x"), Ok(Value::Number(1.0)));
        assert!(child.resolve("x").unwrap().is_same_scope(&child));
    }

    #[test]
    fn missing_names() {
        let mut env = Environment::new().new_scope();
        assert_eq!(env.lookup_var("y"), Err(NameError::Undefined("y".into())));
        assert_eq!(
            env.assign_var("y", Value::Null),
            Err(RuntimeError::Name(NameError::Undefined("y".into())))
        );
    }

    #[test]
    fn globals_are_constant() {
        let mut env = Environment::global();
        assert_eq!(env.lookup_var("true"), Ok(Value::Bool(true)));
        assert_eq!(env.lookup_var("null"), Ok(Value::Null));
        assert!(env.assign_var("false", Value::Bool(true)).is_err());
    }
}
