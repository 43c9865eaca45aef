//! Frozen shape records and the stock primitive constructors.
//!
//! A [`ShapeRecord`] is what a [`crate::ShapeRecorder`] produces at
//! `end_shape`: the main vertex run already flattened to plain points, any
//! contours still tagged (they flatten when the shape is classified), the
//! declared topology and a value snapshot of the style. Records are
//! immutable; hand them to [`crate::Emitter::emit`] as often as you like.

use std::f32::consts::TAU;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::style::Style;
use crate::topology::{ArcMode, TopologyKind};
use crate::vertex::TaggedVertex;
use crate::Point3;

/// Rim samples for a full turn; partial arcs get a proportional share.
const SEGMENTS_PER_TURN: f32 = 64.0;

/// A recorded sub-path, kept in tagged form until classification.
///
/// Contours close implicitly: `end_contour` re-appends the first vertex, and
/// the tessellator closes each sub-path it feeds to the fill pass. Winding
/// matters — a hole must wind opposite to the ring that contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    vertices: Vec<TaggedVertex>,
}

impl Contour {
    pub(crate) fn new(vertices: Vec<TaggedVertex>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[TaggedVertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A finished shape, frozen at `end_shape`.
///
/// # Examples
///
/// ```
/// use trazo::{ShapeRecord, Style, Color};
///
/// let rect = ShapeRecord::rect(10.0, 10.0, 80.0, 40.0, Style::fill(Color::WHITE));
/// assert_eq!(rect.vertices().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    vertices: Vec<Point3>,
    contours: Vec<Contour>,
    kind: TopologyKind,
    style: Style,
}

impl ShapeRecord {
    pub(crate) fn from_parts(
        vertices: Vec<Point3>,
        contours: Vec<Contour>,
        kind: TopologyKind,
        style: Style,
    ) -> Self {
        Self {
            vertices,
            contours,
            kind,
            style,
        }
    }

    /// The flattened main vertex run.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Recorded contours, still in tagged form.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    #[inline]
    pub fn kind(&self) -> TopologyKind {
        self.kind
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Hashes the geometry (kind, vertices, contours) into a cache key for
    /// [`crate::Emitter::emit_cached`]. Style is excluded: the cache stores
    /// meshes, and paint is applied at emission.
    ///
    /// Stable within a process, not across runs.
    pub fn geometry_hash(&self) -> u64 {
        let mut h = hash_state().build_hasher();
        self.kind.hash(&mut h);
        h.write_usize(self.vertices.len());
        for p in &self.vertices {
            hash_point(&mut h, *p);
        }
        h.write_usize(self.contours.len());
        for contour in &self.contours {
            h.write_usize(contour.len());
            for v in contour.vertices() {
                hash_tagged(&mut h, v);
            }
        }
        h.finish()
    }

    /// A two-point line segment.
    pub fn line(a: impl Into<Point3>, b: impl Into<Point3>, style: Style) -> Self {
        Self::from_parts(
            vec![a.into(), b.into()],
            Vec::new(),
            TopologyKind::Lines,
            style,
        )
    }

    /// A single triangle.
    pub fn triangle(
        a: impl Into<Point3>,
        b: impl Into<Point3>,
        c: impl Into<Point3>,
        style: Style,
    ) -> Self {
        Self::from_parts(
            vec![a.into(), b.into(), c.into()],
            Vec::new(),
            TopologyKind::Triangles,
            style,
        )
    }

    /// A single quad, corners in perimeter order.
    pub fn quad(
        a: impl Into<Point3>,
        b: impl Into<Point3>,
        c: impl Into<Point3>,
        d: impl Into<Point3>,
        style: Style,
    ) -> Self {
        Self::from_parts(
            vec![a.into(), b.into(), c.into(), d.into()],
            Vec::new(),
            TopologyKind::Quads,
            style,
        )
    }

    /// An axis-aligned rectangle with its corner at `(x, y)`.
    pub fn rect(x: f32, y: f32, width: f32, height: f32, style: Style) -> Self {
        Self::quad(
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
            style,
        )
    }

    /// An axis-aligned ellipse centered at `(cx, cy)`.
    ///
    /// Built as a full-turn chord-mode arc whose rim closes exactly (the
    /// final sample is not repeated; the ring wraps).
    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, style: Style) -> Self {
        let segments = rim_segments(TAU);
        let mut vertices = Vec::with_capacity(segments + 1);
        vertices.push(Point3::new(cx, cy, 0.0));
        for i in 0..segments {
            let angle = TAU * i as f32 / segments as f32;
            vertices.push(Point3::new(
                cx + rx * angle.cos(),
                cy + ry * angle.sin(),
                0.0,
            ));
        }
        Self::from_parts(
            vertices,
            Vec::new(),
            TopologyKind::Arc(ArcMode::Chord),
            style,
        )
    }

    /// An elliptical arc from `start` to `stop` (radians, increasing
    /// clockwise in a y-down frame).
    ///
    /// `stop` is normalized above `start` by whole turns and the swept span
    /// is clamped to one full turn. The record's first vertex is the center;
    /// the rim samples follow, endpoints included.
    pub fn arc(
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        start: f32,
        stop: f32,
        mode: ArcMode,
        style: Style,
    ) -> Self {
        let mut stop = stop;
        if stop < start {
            // Closed-form: a += TAU loop stalls once |stop| is large enough
            // that an f32 ulp exceeds TAU.
            stop += ((start - stop) / TAU).ceil() * TAU;
        }
        let span = (stop - start).clamp(0.0, TAU);

        let segments = rim_segments(span);
        let mut vertices = Vec::with_capacity(segments + 2);
        vertices.push(Point3::new(cx, cy, 0.0));
        for i in 0..=segments {
            let angle = start + span * i as f32 / segments as f32;
            vertices.push(Point3::new(
                cx + rx * angle.cos(),
                cy + ry * angle.sin(),
                0.0,
            ));
        }
        Self::from_parts(vertices, Vec::new(), TopologyKind::Arc(mode), style)
    }
}

fn rim_segments(span: f32) -> usize {
    ((span.abs() / TAU) * SEGMENTS_PER_TURN).ceil().max(2.0) as usize
}

/// Fixed seeds so a record hashes the same every frame within a process.
fn hash_state() -> ahash::RandomState {
    ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

fn hash_point(h: &mut impl Hasher, p: Point3) {
    h.write_u32(p.x.to_bits());
    h.write_u32(p.y.to_bits());
    h.write_u32(p.z.to_bits());
}

fn hash_tagged(h: &mut impl Hasher, v: &TaggedVertex) {
    use crate::vertex::VertexKind;
    hash_point(h, v.position);
    match v.kind {
        VertexKind::Plain => h.write_u8(0),
        VertexKind::BezierControl { ctrl1, ctrl2 } => {
            h.write_u8(1);
            hash_point(h, ctrl1);
            hash_point(h, ctrl2);
        }
        VertexKind::QuadraticControl { ctrl } => {
            h.write_u8(2);
            hash_point(h, ctrl);
        }
        VertexKind::CurveControl => h.write_u8(3),
    }
}
