use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A shared, single-threaded uniform value.
///
/// Clones share the same storage cell, so the owner of a parameter and the
/// code that uploads it each frame always see the same value.
pub struct Uniform<T: Copy> {
    value: Rc<Cell<T>>,
}

impl<T: Copy> Uniform<T> {
    /// New cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        self.value.set(value);
    }

    /// Whether both handles point at the same cell.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: Copy> Clone for Uniform<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
        }
    }
}

impl<T: Copy + Default> Default for Uniform<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Uniform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uniform").field(&self.get()).finish()
    }
}
