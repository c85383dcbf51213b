//! Curve shape between control points.
//!
//! Each segment is a parabola through three points: the segment's start,
//! its midpoint handle and its end. The handle sits halfway along x and is
//! raised or lowered between the two endpoint heights by the start point's
//! interpolation factor:
//!
//! ```text
//! mid.x = (a.x + b.x) / 2
//! mid.y = low + factor × (high − low)      low/high = min/max(a.y, b.y)
//! ```
//!
//! The parabola is evaluated with 3-point Lagrange interpolation and clamped
//! to `[low, high]` so it never overshoots the endpoints. A factor of 0.5
//! puts the handle on the chord and yields a straight line.
//!
//! All helpers work in any affine space (percent or pixels): the mapping
//! between the two preserves both the interpolant and the clamp range.

use glam::DVec2;

use super::point::ControlPoint;

/// Segments narrower than this are treated as vertical jumps.
const MIN_SEGMENT_WIDTH: f64 = 1e-9;

/// 3-point Lagrange interpolation through `p0`, `p1`, `p2` evaluated at `x`.
///
/// ```text
/// L(x) = y0·(x−x1)(x−x2)/((x0−x1)(x0−x2))
///      + y1·(x−x0)(x−x2)/((x1−x0)(x1−x2))
///      + y2·(x−x0)(x−x1)/((x2−x0)(x2−x1))
/// ```
///
/// The three x values must be distinct.
pub fn lagrange3(p0: DVec2, p1: DVec2, p2: DVec2, x: f64) -> f64 {
    let l0 = (x - p1.x) * (x - p2.x) / ((p0.x - p1.x) * (p0.x - p2.x));
    let l1 = (x - p0.x) * (x - p2.x) / ((p1.x - p0.x) * (p1.x - p2.x));
    let l2 = (x - p0.x) * (x - p1.x) / ((p2.x - p0.x) * (p2.x - p1.x));
    p0.y * l0 + p1.y * l1 + p2.y * l2
}

/// Midpoint handle position between `a` and `b`, in percent.
pub fn midpoint(a: &ControlPoint, b: &ControlPoint) -> DVec2 {
    let low = a.y.min(b.y);
    let high = a.y.max(b.y);
    DVec2::new(
        0.5 * (a.x + b.x),
        low + a.interpolation_factor * (high - low),
    )
}

/// Interpolation factor that places the handle of segment `a → b` at height
/// `y` (percent). Flat segments have no meaningful factor and return `None`.
pub fn factor_for_height(a: &ControlPoint, b: &ControlPoint, y: f64) -> Option<f64> {
    let low = a.y.min(b.y);
    let high = a.y.max(b.y);
    if high - low < MIN_SEGMENT_WIDTH {
        return None;
    }
    Some(((y - low) / (high - low)).clamp(0.0, 1.0))
}

/// Curve height at `x` on the segment `start → mid → end`.
///
/// Works in both percent space (y up) and pixel space (y down).
pub fn segment_value(start: DVec2, mid: DVec2, end: DVec2, x: f64) -> f64 {
    if (end.x - start.x).abs() < MIN_SEGMENT_WIDTH {
        return end.y;
    }
    let low = start.y.min(end.y);
    let high = start.y.max(end.y);
    lagrange3(start, mid, end, x).clamp(low, high)
}

/// Appends samples of one segment to `out`, excluding `start` and ending
/// exactly on `end`.
pub fn sample_segment(start: DVec2, mid: DVec2, end: DVec2, step: f64, out: &mut Vec<DVec2>) {
    if step > 0.0 {
        let mut k = 1_u32;
        loop {
            let x = start.x + f64::from(k) * step;
            if x >= end.x {
                break;
            }
            out.push(DVec2::new(x, segment_value(start, mid, end, x)));
            k += 1;
        }
    }
    out.push(end);
}

/// Curve height at `x` (percent) over a sorted point set.
///
/// `x` outside the point range is clamped to it.
pub fn evaluate(points: &[ControlPoint], x: f64) -> f64 {
    match points {
        [] => 0.0,
        [only] => only.y,
        [first, .., last] => {
            if x <= first.x {
                return first.y;
            }
            if x >= last.x {
                return last.y;
            }
            // First point strictly right of x; always >= 1 here.
            let hi = points.partition_point(|p| p.x <= x);
            let a = &points[hi - 1];
            let b = &points[hi];
            segment_value(a.position(), midpoint(a, b), b.position(), x)
        }
    }
}
