//! Renderer-agnostic draw primitives and the sink boundary.
//!
//! A [`RenderPrimitive`] is the hand-off unit: vertices already in world
//! space, an index list, a GL-style topology tag and the paint to apply.
//! The consumer is anything implementing [`GpuSink`]; the pipeline is
//! generic over it and never branches on backend identity.

use crate::color::Color;
use crate::stroke::Stroke;
use crate::Point3;

/// GL-style primitive topology. `name()` gives the stable string a
/// backend-facing sink can key its own pipeline state on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    LineLoop,
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveTopology {
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveTopology::PointList => "point-list",
            PrimitiveTopology::LineList => "line-list",
            PrimitiveTopology::LineStrip => "line-strip",
            PrimitiveTopology::LineLoop => "line-loop",
            PrimitiveTopology::TriangleList => "triangle-list",
            PrimitiveTopology::TriangleStrip => "triangle-strip",
            PrimitiveTopology::TriangleFan => "triangle-fan",
        }
    }
}

/// What the primitive is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke(Stroke),
}

impl Paint {
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, Paint::Fill(_))
    }

    /// The paint's color, whichever side it is.
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Paint::Fill(color) => *color,
            Paint::Stroke(stroke) => stroke.color,
        }
    }
}

/// One drawable unit. Produced by the emitter, consumed once by the sink,
/// then dropped; nothing in the pipeline retains it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive {
    pub topology: PrimitiveTopology,
    pub vertices: Vec<Point3>,
    pub indices: Vec<u32>,
    pub paint: Paint,
}

/// What the sink can draw natively. The classifier expands strips, fans and
/// loops itself when the sink lacks them, so a sink never sees a topology it
/// reported unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkCapabilities {
    pub triangle_strips: bool,
    pub triangle_fans: bool,
    pub line_loops: bool,
}

impl Default for SinkCapabilities {
    fn default() -> Self {
        Self {
            triangle_strips: true,
            triangle_fans: true,
            line_loops: true,
        }
    }
}

impl SinkCapabilities {
    /// A sink that only draws plain lists (no strips, fans or loops).
    pub const fn lists_only() -> Self {
        Self {
            triangle_strips: false,
            triangle_fans: false,
            line_loops: false,
        }
    }
}

/// The GPU boundary. Implementations receive primitives in painter's order:
/// fill before border within a shape, shapes in call order.
pub trait GpuSink {
    fn draw(&mut self, primitive: RenderPrimitive);

    fn capabilities(&self) -> SinkCapabilities {
        SinkCapabilities::default()
    }
}
