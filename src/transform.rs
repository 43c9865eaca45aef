//! The 4x4 transform applied at emission time.
//!
//! The matrix-stack subsystem that produces these lives outside the
//! pipeline; this is the read-only slice the emitter consumes: build or
//! receive a matrix, multiply points through it, divide by w.

use euclid::{Angle, Transform3D, UnknownUnit};

use crate::Point3;

type Matrix = Transform3D<f32, UnknownUnit, UnknownUnit>;

/// A homogeneous 4x4 transform. `then_*` builders append in application
/// order: `Transform::identity().then_scale(2.0, 2.0).then_translate(5.0, 0.0, 0.0)`
/// scales first, then translates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix::identity(),
        }
    }

    pub fn then_translate(mut self, tx: f32, ty: f32, tz: f32) -> Self {
        self.matrix = self.matrix.then(&Matrix::translation(tx, ty, tz));
        self
    }

    /// Rotation around the z axis, in radians.
    pub fn then_rotate_z(mut self, radians: f32) -> Self {
        self.matrix = self
            .matrix
            .then(&Matrix::rotation(0.0, 0.0, 1.0, Angle::radians(radians)));
        self
    }

    pub fn then_scale(mut self, sx: f32, sy: f32) -> Self {
        self.matrix = self.matrix.then(&Matrix::scale(sx, sy, 1.0));
        self
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Homogeneous multiply followed by the divide by w. A w near zero is
    /// treated as 1 so a degenerate projective matrix cannot blow a point
    /// out to infinity.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let m = &self.matrix;
        let x = m.m11 * p.x + m.m21 * p.y + m.m31 * p.z + m.m41;
        let y = m.m12 * p.x + m.m22 * p.y + m.m32 * p.z + m.m42;
        let z = m.m13 * p.x + m.m23 * p.y + m.m33 * p.z + m.m43;
        let w = m.m14 * p.x + m.m24 * p.y + m.m34 * p.z + m.m44;
        let w = if w.abs() < 1e-6 { 1.0 } else { w };
        Point3::new(x / w, y / w, z / w)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix> for Transform {
    fn from(matrix: Matrix) -> Self {
        Self { matrix }
    }
}
