//! Shape recording between `begin_shape` and `end_shape`.
//!
//! A [`ShapeRecorder`] is an explicit, caller-owned object; nothing here is
//! global, so two recorders can build shapes independently. Sequencing
//! violations (double begin, end without begin, contour left open) surface
//! as [`ShapeError::InvalidState`] instead of being silently repaired.

use tracing::debug;

use crate::curves::CurveSettings;
use crate::error::ShapeError;
use crate::flatten::flatten;
use crate::shape::{Contour, ShapeRecord};
use crate::style::Style;
use crate::topology::TopologyKind;
use crate::vertex::TaggedVertex;
use crate::Point3;

/// Whether `end_shape` closes the outline back to the first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseMode {
    #[default]
    Open,
    Close,
}

/// Accumulates one shape's vertices and contours, then freezes them into a
/// [`ShapeRecord`].
///
/// # Examples
///
/// ```
/// use trazo::{ShapeRecorder, TopologyKind, CloseMode, CurveSettings, Style};
///
/// let mut rec = ShapeRecorder::new();
/// rec.begin_shape(TopologyKind::Poly)?;
/// rec.vertex((10.0, 10.0))?;
/// rec.vertex((100.0, 10.0))?;
/// rec.vertex((55.0, 90.0))?;
/// let record = rec.end_shape(CloseMode::Close, Style::default(), &CurveSettings::default())?;
/// assert_eq!(record.vertices().len(), 4);
/// # Ok::<(), trazo::ShapeError>(())
/// ```
#[derive(Debug, Default)]
pub struct ShapeRecorder {
    kind: Option<TopologyKind>,
    vertices: Vec<TaggedVertex>,
    contours: Vec<Contour>,
    active_contour: Option<Vec<TaggedVertex>>,
}

impl ShapeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a shape of the given kind, resetting any leftover buffers.
    pub fn begin_shape(&mut self, kind: TopologyKind) -> Result<(), ShapeError> {
        if self.kind.is_some() {
            return Err(ShapeError::InvalidState(
                "begin_shape while a shape is already open",
            ));
        }
        self.kind = Some(kind);
        self.vertices.clear();
        self.contours.clear();
        self.active_contour = None;
        Ok(())
    }

    /// Appends a plain vertex to the shape, or to the open contour if one is
    /// in progress.
    pub fn vertex(&mut self, p: impl Into<Point3>) -> Result<(), ShapeError> {
        let v = TaggedVertex::plain(p.into());
        self.push(v)
    }

    /// Appends a cubic bezier segment ending at `anchor`.
    pub fn bezier_vertex(
        &mut self,
        ctrl1: impl Into<Point3>,
        ctrl2: impl Into<Point3>,
        anchor: impl Into<Point3>,
    ) -> Result<(), ShapeError> {
        let v = TaggedVertex::bezier(ctrl1.into(), ctrl2.into(), anchor.into());
        self.push_control(v)
    }

    /// Appends a quadratic bezier segment ending at `anchor`.
    pub fn quadratic_vertex(
        &mut self,
        ctrl: impl Into<Point3>,
        anchor: impl Into<Point3>,
    ) -> Result<(), ShapeError> {
        let v = TaggedVertex::quadratic(ctrl.into(), anchor.into());
        self.push_control(v)
    }

    /// Appends a Catmull-Rom control point.
    pub fn curve_vertex(&mut self, p: impl Into<Point3>) -> Result<(), ShapeError> {
        let v = TaggedVertex::curve(p.into());
        self.push_control(v)
    }

    /// Opens a contour (hole). Contours do not nest.
    pub fn begin_contour(&mut self) -> Result<(), ShapeError> {
        if self.kind.is_none() {
            return Err(ShapeError::InvalidState("begin_contour without an open shape"));
        }
        if self.active_contour.is_some() {
            return Err(ShapeError::InvalidState(
                "begin_contour while a contour is already open",
            ));
        }
        self.active_contour = Some(Vec::new());
        Ok(())
    }

    /// Closes the open contour, re-appending its first vertex so the
    /// sub-path is explicitly closed. An empty contour is stored empty.
    pub fn end_contour(&mut self) -> Result<(), ShapeError> {
        let Some(mut contour) = self.active_contour.take() else {
            return Err(ShapeError::InvalidState("end_contour without an open contour"));
        };
        if let Some(first) = contour.first().cloned() {
            contour.push(first);
        }
        self.contours.push(Contour::new(contour));
        Ok(())
    }

    /// Freezes the shape into a [`ShapeRecord`] and returns the recorder to
    /// the idle state.
    ///
    /// `CloseMode::Close` re-appends the first vertex (tag and all) before
    /// flattening. An unterminated contour is an error, not an implicit
    /// close.
    pub fn end_shape(
        &mut self,
        mode: CloseMode,
        style: Style,
        settings: &CurveSettings,
    ) -> Result<ShapeRecord, ShapeError> {
        let Some(kind) = self.kind else {
            return Err(ShapeError::InvalidState("end_shape without an open shape"));
        };
        if self.active_contour.is_some() {
            return Err(ShapeError::InvalidState(
                "end_shape while a contour is still open",
            ));
        }

        if mode == CloseMode::Close {
            if let Some(first) = self.vertices.first().cloned() {
                self.vertices.push(first);
            }
        }

        let tagged = std::mem::take(&mut self.vertices);
        let contours = std::mem::take(&mut self.contours);
        self.kind = None;

        let flat = flatten(&tagged, settings)?;
        if flat.is_empty() {
            debug!("Shape finalized with no drawable vertices.");
        }
        Ok(ShapeRecord::from_parts(flat, contours, kind, style))
    }

    /// True between `begin_shape` and `end_shape`.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    /// True between `begin_contour` and `end_contour`.
    #[inline]
    pub fn is_contour_open(&self) -> bool {
        self.active_contour.is_some()
    }

    fn push(&mut self, v: TaggedVertex) -> Result<(), ShapeError> {
        if self.kind.is_none() {
            return Err(ShapeError::InvalidState("vertex without an open shape"));
        }
        self.active_run().push(v);
        Ok(())
    }

    fn push_control(&mut self, v: TaggedVertex) -> Result<(), ShapeError> {
        if self.kind.is_none() {
            return Err(ShapeError::InvalidState("vertex without an open shape"));
        }
        if self.active_run().is_empty() {
            return Err(ShapeError::InvalidState(
                "a shape or contour must start with a plain vertex",
            ));
        }
        self.active_run().push(v);
        Ok(())
    }

    fn active_run(&mut self) -> &mut Vec<TaggedVertex> {
        self.active_contour.as_mut().unwrap_or(&mut self.vertices)
    }
}
