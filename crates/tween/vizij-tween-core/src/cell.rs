//! Tweenable cells: indirect read/write handles on host-owned values.
//!
//! A leaf tween only holds a handle. The value itself stays with the host, so
//! any number of leaves (in one tree or many) may target the same cell. No
//! arbitration happens between them: the last write in traversal order wins.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::interp::Lerp;

/// Accessor pair plus the type's interpolation rule.
pub trait Tweenable {
    type Value: Clone;

    fn get(&self) -> Self::Value;
    fn set(&self, value: Self::Value);
    fn lerp(&self, start: &Self::Value, end: &Self::Value, percent: f32) -> Self::Value;
}

impl<T: Lerp> Tweenable for Rc<RefCell<T>> {
    type Value = T;

    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.borrow_mut() = value;
    }

    fn lerp(&self, start: &T, end: &T, percent: f32) -> T {
        T::lerp(start, end, percent)
    }
}

impl<T: Lerp + Copy> Tweenable for Rc<Cell<T>> {
    type Value = T;

    fn get(&self) -> T {
        Cell::get(&**self)
    }

    fn set(&self, value: T) {
        Cell::set(&**self, value);
    }

    fn lerp(&self, start: &T, end: &T, percent: f32) -> T {
        T::lerp(start, end, percent)
    }
}

/// Cell built from arbitrary get/set closures, for values that live behind
/// a host API rather than in a shared `Rc`.
pub struct Accessor<T> {
    getter: Rc<dyn Fn() -> T>,
    setter: Rc<dyn Fn(T)>,
    lerp: fn(&T, &T, f32) -> T,
}

impl<T: Lerp + 'static> Accessor<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self::with_lerp(get, set, T::lerp)
    }
}

impl<T: 'static> Accessor<T> {
    /// Accessor with a custom interpolation rule (e.g. for a type without a
    /// [`Lerp`] impl, or to override the default one).
    pub fn with_lerp(
        get: impl Fn() -> T + 'static,
        set: impl Fn(T) + 'static,
        lerp: fn(&T, &T, f32) -> T,
    ) -> Self {
        Self {
            getter: Rc::new(get),
            setter: Rc::new(set),
            lerp,
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            getter: Rc::clone(&self.getter),
            setter: Rc::clone(&self.setter),
            lerp: self.lerp,
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").finish_non_exhaustive()
    }
}

impl<T: Clone> Tweenable for Accessor<T> {
    type Value = T;

    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&self, value: T) {
        (self.setter)(value)
    }

    fn lerp(&self, start: &T, end: &T, percent: f32) -> T {
        (self.lerp)(start, end, percent)
    }
}
