//! Canned shape records used across the integration tests and benches.
//!
//! Everything here goes through the public recording API, so the fixtures
//! double as smoke coverage for the recorder itself.

use trazo::{
    CloseMode, CurveSettings, ShapeError, ShapeRecord, ShapeRecorder, Style, TopologyKind,
};

/// An axis-aligned square recorded as a closed `Poly`.
pub fn square_poly(x: f32, y: f32, side: f32, style: Style) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Poly)?;
    rec.vertex((x, y))?;
    rec.vertex((x + side, y))?;
    rec.vertex((x + side, y + side))?;
    rec.vertex((x, y + side))?;
    rec.end_shape(CloseMode::Close, style, &CurveSettings::default())
}

/// A 10x10 square with a 4x4 hole punched out of its middle.
///
/// The exterior runs counter-clockwise (y-down), the hole clockwise, so the
/// windings oppose as the tessellator's contract requires. Covered area is
/// 100 - 16 = 84.
pub fn square_with_hole(style: Style) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Poly)?;
    rec.vertex((0.0, 0.0))?;
    rec.vertex((10.0, 0.0))?;
    rec.vertex((10.0, 10.0))?;
    rec.vertex((0.0, 10.0))?;
    rec.begin_contour()?;
    rec.vertex((3.0, 3.0))?;
    rec.vertex((3.0, 7.0))?;
    rec.vertex((7.0, 7.0))?;
    rec.vertex((7.0, 3.0))?;
    rec.end_contour()?;
    rec.end_shape(CloseMode::Close, style, &CurveSettings::default())
}

/// A five-pointed star centered at `(cx, cy)`, recorded as a closed `Poly`.
pub fn star(cx: f32, cy: f32, outer: f32, inner: f32, style: Style) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Poly)?;
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = std::f32::consts::TAU * i as f32 / 10.0 - std::f32::consts::FRAC_PI_2;
        rec.vertex((cx + r * angle.cos(), cy + r * angle.sin()))?;
    }
    rec.end_shape(CloseMode::Close, style, &CurveSettings::default())
}

/// A zigzag ribbon: `pairs * 2` vertices alternating between two rails,
/// ready for `TriangleStrip` (or `QuadStrip`) classification.
pub fn ribbon(kind: TopologyKind, pairs: usize, style: Style) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(kind)?;
    for i in 0..pairs {
        let x = i as f32 * 10.0;
        rec.vertex((x, 0.0))?;
        rec.vertex((x, 10.0))?;
    }
    rec.end_shape(CloseMode::Open, style, &CurveSettings::default())
}

/// A row of independent unit quads spaced apart, for `Quads` classification.
pub fn quads_row(count: usize, style: Style) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Quads)?;
    for q in 0..count {
        let x = q as f32 * 3.0;
        rec.vertex((x, 0.0))?;
        rec.vertex((x + 1.0, 0.0))?;
        rec.vertex((x + 1.0, 1.0))?;
        rec.vertex((x, 1.0))?;
    }
    rec.end_shape(CloseMode::Open, style, &CurveSettings::default())
}

/// A leaf-like closed outline built from two cubic bezier segments.
pub fn bezier_leaf(style: Style, settings: &CurveSettings) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Poly)?;
    rec.vertex((0.0, 0.0))?;
    rec.bezier_vertex((20.0, -30.0), (60.0, -30.0), (80.0, 0.0))?;
    rec.bezier_vertex((60.0, 30.0), (20.0, 30.0), (0.0, 0.0))?;
    rec.end_shape(CloseMode::Open, style, settings)
}

/// An open Catmull-Rom wave through six control points.
pub fn curve_wave(style: Style, settings: &CurveSettings) -> Result<ShapeRecord, ShapeError> {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::LineStrip)?;
    rec.vertex((0.0, 0.0))?;
    for (x, y) in [(20.0, 30.0), (40.0, -30.0), (60.0, 30.0), (80.0, -30.0), (100.0, 0.0)] {
        rec.curve_vertex((x, y))?;
    }
    rec.end_shape(CloseMode::Open, style, settings)
}
