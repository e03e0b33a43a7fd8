//! Observable working values
//!
//! The host framework binds form inputs to callable getter/setter cells.
//! [`Observable`] is the explicit equivalent: a single value with `get`/`set`
//! operations behind interior mutability, so the owning form session can be
//! shared by reference while a save is in flight.

use std::cell::RefCell;

/// A single working value with explicit get/set access.
///
/// Single-threaded by design: the form session that owns these is only ever
/// touched from the UI event loop, so `RefCell` is sufficient and the type is
/// intentionally not `Sync`.
#[derive(Debug, Default)]
pub struct Observable<T> {
    value: RefCell<T>,
}

impl<T: Clone> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
        }
    }

    /// Get a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Overwrite the current value.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
    }

    /// Overwrite the current value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.value.replace(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let field = Observable::new("local".to_string());
        assert_eq!(field.get(), "local");
    }

    #[test]
    fn test_set_overwrites() {
        let field = Observable::new(String::new());
        field.set("imgur".to_string());
        assert_eq!(field.get(), "imgur");
    }

    #[test]
    fn test_replace_returns_previous() {
        let flag = Observable::new(false);
        assert!(!flag.replace(true));
        assert!(flag.get());
    }

    #[test]
    fn test_set_through_shared_reference() {
        let field = Observable::new(0u32);
        let alias = &field;
        alias.set(7);
        assert_eq!(field.get(), 7);
    }
}
