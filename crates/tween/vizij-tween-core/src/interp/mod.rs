//! Per-type interpolation rules.
//!
//! [`Lerp`] is the type-specific half of a Tweenable cell: it maps a start
//! value, an end value and an (eased) percent to an in-between value.

pub mod functions;

use crate::value::Value;
use functions::{lerp_f32, lerp_f64, lerp_vec2, lerp_vec3, lerp_vec4, linear_value};

/// Linear interpolation between two values of the same type.
///
/// `t` is not clamped: ease curves that overshoot pass values outside `[0, 1]`.
pub trait Lerp: Clone {
    fn lerp(start: &Self, end: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        lerp_f32(*start, *end, t)
    }
}

impl Lerp for f64 {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        lerp_f64(*start, *end, t)
    }
}

impl Lerp for [f32; 2] {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        lerp_vec2(*start, *end, t)
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        lerp_vec3(*start, *end, t)
    }
}

impl Lerp for [f32; 4] {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        lerp_vec4(*start, *end, t)
    }
}

impl Lerp for Value {
    #[inline]
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        linear_value(start, end, t)
    }
}
