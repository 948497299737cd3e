//! Construction helpers.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use vizij_tween_core::{builder::*, ease, Tween};
//!
//! let x = Rc::new(RefCell::new(0.0f32));
//! let mut root = sequence()
//!     .add(tween(x.clone(), 10.0, 1.0, ease::linear))
//!     .add(wait(0.5))
//!     .add(parallel().add_channel(tween(x.clone(), 0.0, 1.0, ease::quad_out)));
//! root.advance(1.0);
//! assert_eq!(*x.borrow(), 10.0);
//! ```

use crate::cell::Tweenable;
use crate::dynamic::Dynamic;
use crate::leaf::Leaf;
use crate::parallel::Parallel;
use crate::sequence::Sequence;
use crate::tween::Tween;
use crate::wait::{Callback, Wait};

pub fn sequence() -> Sequence {
    Sequence::new()
}

pub fn parallel() -> Parallel {
    Parallel::new()
}

/// Leaf tween driving `cell` to `target` over `duration` seconds.
pub fn tween<C, E>(cell: C, target: C::Value, duration: f32, ease: E) -> Leaf<C, E>
where
    C: Tweenable,
    E: Fn(f32) -> f32,
{
    Leaf::new(cell, target, duration, ease)
}

pub fn wait(duration: f32) -> Wait {
    Wait::new(duration)
}

pub fn callback<F: FnMut()>(action: F) -> Callback<F> {
    Callback::new(action)
}

pub fn dynamic<N, F>(generator: F) -> Dynamic
where
    N: Tween + 'static,
    F: FnOnce() -> N + 'static,
{
    Dynamic::new(generator)
}
