//! A handful of ease curves. Any `Fn(f32) -> f32` works as an ease; these
//! cover the common cases and the CSS-style cubic bezier.

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

#[inline]
pub fn quad_in(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn quad_out(t: f32) -> f32 {
    t * (2.0 - t)
}

#[inline]
pub fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub fn cubic_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

/// Overshoots past 1 before settling.
#[inline]
pub fn back_out(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier_basis(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier_basis(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier_basis(0.0, y1, y2, 1.0, mid)
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> impl Fn(f32) -> f32 + Clone {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    move |t| bezier_ease_t(t, x1, y1, x2, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn curves_hit_endpoints() {
        let curves: [fn(f32) -> f32; 8] = [
            linear,
            quad_in,
            quad_out,
            quad_in_out,
            cubic_in,
            cubic_out,
            cubic_in_out,
            back_out,
        ];
        for ease in curves {
            approx(ease(0.0), 0.0, 1e-6);
            approx(ease(1.0), 1.0, 1e-6);
        }
    }

    #[test]
    fn back_out_overshoots() {
        assert!(back_out(0.7) > 1.0);
    }

    #[test]
    fn bezier_linear_fast_path_and_ease() {
        let lin = cubic_bezier(0.0, 0.0, 1.0, 1.0);
        assert_eq!(lin(0.3), 0.3);
        let ease = cubic_bezier(0.42, 0.0, 0.58, 1.0);
        approx(ease(0.5), 0.5, 1e-3);
        assert!(ease(0.2) < 0.2);
        approx(ease(1.0), 1.0, 1e-5);
    }
}
