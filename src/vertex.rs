use crate::Point3;

/// What a recorded vertex means for the segment that ends at it.
///
/// Control payloads ride in the tag, so a vertex run is self-contained: no
/// side tables or flag dictionaries are needed to re-interpret it later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexKind {
    /// A line-to/move-to anchor.
    Plain,
    /// Endpoint of a cubic Bezier segment; `ctrl1`/`ctrl2` are the two
    /// off-curve control points between the previous anchor and here.
    BezierControl { ctrl1: Point3, ctrl2: Point3 },
    /// Endpoint of a quadratic Bezier segment with one control point.
    QuadraticControl { ctrl: Point3 },
    /// A Catmull-Rom spline control point (the point itself lies on or
    /// guides the spline; no extra payload).
    CurveControl,
}

/// The curve interpretation a control tag implies for the whole run.
/// A single shape must not mix families (each one re-interprets the
/// surrounding plain vertices differently).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    Bezier,
    Quadratic,
    Curve,
}

/// One recorded vertex: the segment endpoint plus its kind tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedVertex {
    pub position: Point3,
    pub kind: VertexKind,
}

impl TaggedVertex {
    #[inline]
    pub fn plain(position: impl Into<Point3>) -> Self {
        Self {
            position: position.into(),
            kind: VertexKind::Plain,
        }
    }

    #[inline]
    pub fn bezier(
        ctrl1: impl Into<Point3>,
        ctrl2: impl Into<Point3>,
        anchor: impl Into<Point3>,
    ) -> Self {
        Self {
            position: anchor.into(),
            kind: VertexKind::BezierControl {
                ctrl1: ctrl1.into(),
                ctrl2: ctrl2.into(),
            },
        }
    }

    #[inline]
    pub fn quadratic(ctrl: impl Into<Point3>, anchor: impl Into<Point3>) -> Self {
        Self {
            position: anchor.into(),
            kind: VertexKind::QuadraticControl { ctrl: ctrl.into() },
        }
    }

    #[inline]
    pub fn curve(position: impl Into<Point3>) -> Self {
        Self {
            position: position.into(),
            kind: VertexKind::CurveControl,
        }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, VertexKind::Plain)
    }

    /// The curve family this tag belongs to, if any.
    #[inline]
    pub fn curve_family(&self) -> Option<CurveFamily> {
        match self.kind {
            VertexKind::Plain => None,
            VertexKind::BezierControl { .. } => Some(CurveFamily::Bezier),
            VertexKind::QuadraticControl { .. } => Some(CurveFamily::Quadratic),
            VertexKind::CurveControl => Some(CurveFamily::Curve),
        }
    }
}
