//! Parametric curve evaluation: cubic/quadratic Bezier and Catmull-Rom.
//!
//! Everything here is a pure function of its arguments. The scalar forms
//! mirror the classic Processing signatures (call once per coordinate); the
//! [`Point3`] forms evaluate all three components at once and are what the
//! flattener uses. `t` is not clamped — values outside `[0, 1]` extrapolate
//! the curve rather than erroring.

use crate::Point3;

/// Sampling configuration for the curve flattener.
///
/// One value of this is typically owned by the sketch runner and shared by
/// reference with every shape finalized during a frame; the pipeline never
/// mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Segments per cubic/quadratic Bezier piece.
    pub bezier_resolution: u32,
    /// Segments per Catmull-Rom span.
    pub curve_resolution: u32,
    /// Catmull-Rom tightness: 0.0 is the standard spline, 1.0 connects the
    /// control points with straight (eased) segments.
    pub curve_tightness: f32,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            bezier_resolution: 20,
            curve_resolution: 20,
            curve_tightness: 0.0,
        }
    }
}

impl CurveSettings {
    /// Resolutions below 1 make `t = i / resolution` meaningless, so the
    /// setters floor at 1.
    #[inline]
    pub fn with_bezier_resolution(mut self, resolution: u32) -> Self {
        self.bezier_resolution = resolution.max(1);
        self
    }

    #[inline]
    pub fn with_curve_resolution(mut self, resolution: u32) -> Self {
        self.curve_resolution = resolution.max(1);
        self
    }

    #[inline]
    pub fn with_curve_tightness(mut self, tightness: f32) -> Self {
        self.curve_tightness = tightness;
        self
    }
}

/// Cubic Bernstein blend of one coordinate.
#[inline]
pub fn bezier_point(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    a * u * u * u + 3.0 * b * u * u * t + 3.0 * c * u * t * t + d * t * t * t
}

/// Derivative of [`bezier_point`] with respect to `t`.
#[inline]
pub fn bezier_tangent(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * (b - a) + 6.0 * u * t * (c - b) + 3.0 * t * t * (d - c)
}

/// Quadratic Bernstein blend of one coordinate.
#[inline]
pub fn quadratic_point(a: f32, b: f32, c: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    a * u * u + 2.0 * b * u * t + c * t * t
}

/// Catmull-Rom blend of one coordinate. The span runs from `b` (t = 0) to
/// `c` (t = 1); `a` and `d` act as tangent guides. At `tightness = 0` the
/// basis is the fixed Processing curve matrix.
#[inline]
pub fn curve_point(a: f32, b: f32, c: f32, d: f32, t: f32, tightness: f32) -> f32 {
    let s = (1.0 - tightness) * 0.5;
    let t2 = t * t;
    let t3 = t2 * t;
    let f1 = -s * t3 + 2.0 * s * t2 - s * t;
    let f2 = (2.0 - s) * t3 + (s - 3.0) * t2 + 1.0;
    let f3 = (s - 2.0) * t3 + (3.0 - 2.0 * s) * t2 + s * t;
    let f4 = s * t3 - s * t2;
    a * f1 + b * f2 + c * f3 + d * f4
}

/// Derivative of [`curve_point`] with respect to `t`.
#[inline]
pub fn curve_tangent(a: f32, b: f32, c: f32, d: f32, t: f32, tightness: f32) -> f32 {
    let s = (1.0 - tightness) * 0.5;
    let t2 = t * t;
    let f1 = -3.0 * s * t2 + 4.0 * s * t - s;
    let f2 = 3.0 * (2.0 - s) * t2 + 2.0 * (s - 3.0) * t;
    let f3 = 3.0 * (s - 2.0) * t2 + 2.0 * (3.0 - 2.0 * s) * t + s;
    let f4 = 3.0 * s * t2 - 2.0 * s * t;
    a * f1 + b * f2 + c * f3 + d * f4
}

/// [`bezier_point`] applied per component.
#[inline]
pub fn bezier_point3(a: Point3, b: Point3, c: Point3, d: Point3, t: f32) -> Point3 {
    Point3::new(
        bezier_point(a.x, b.x, c.x, d.x, t),
        bezier_point(a.y, b.y, c.y, d.y, t),
        bezier_point(a.z, b.z, c.z, d.z, t),
    )
}

/// [`bezier_tangent`] applied per component.
#[inline]
pub fn bezier_tangent3(a: Point3, b: Point3, c: Point3, d: Point3, t: f32) -> Point3 {
    Point3::new(
        bezier_tangent(a.x, b.x, c.x, d.x, t),
        bezier_tangent(a.y, b.y, c.y, d.y, t),
        bezier_tangent(a.z, b.z, c.z, d.z, t),
    )
}

/// [`quadratic_point`] applied per component.
#[inline]
pub fn quadratic_point3(a: Point3, b: Point3, c: Point3, t: f32) -> Point3 {
    Point3::new(
        quadratic_point(a.x, b.x, c.x, t),
        quadratic_point(a.y, b.y, c.y, t),
        quadratic_point(a.z, b.z, c.z, t),
    )
}

/// [`curve_point`] applied per component.
#[inline]
pub fn curve_point3(a: Point3, b: Point3, c: Point3, d: Point3, t: f32, tightness: f32) -> Point3 {
    Point3::new(
        curve_point(a.x, b.x, c.x, d.x, t, tightness),
        curve_point(a.y, b.y, c.y, d.y, t, tightness),
        curve_point(a.z, b.z, c.z, d.z, t, tightness),
    )
}

/// [`curve_tangent`] applied per component.
#[inline]
pub fn curve_tangent3(a: Point3, b: Point3, c: Point3, d: Point3, t: f32, tightness: f32) -> Point3 {
    Point3::new(
        curve_tangent(a.x, b.x, c.x, d.x, t, tightness),
        curve_tangent(a.y, b.y, c.y, d.y, t, tightness),
        curve_tangent(a.z, b.z, c.z, d.z, t, tightness),
    )
}
