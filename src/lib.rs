//! Shape recording, curve flattening and polygon tessellation for
//! creative-coding renderers.
//!
//! The pipeline is the classic sketch one: record vertices between
//! `begin_shape` and `end_shape` (plain, bezier, quadratic or Catmull-Rom,
//! with optional contours for holes), flatten the curves, classify the
//! declared topology into fill and border primitives, tessellate the
//! general polygon case, and emit transformed, paint-tagged
//! [`RenderPrimitive`]s to whatever [`GpuSink`] you plug in. Windowing,
//! text, images and the actual draw calls live outside this crate.
//!
//! ```
//! use trazo::{
//!     CloseMode, CurveSettings, Emitter, RecordingSink, ShapeRecorder, Style, TopologyKind,
//!     Transform,
//! };
//!
//! let settings = CurveSettings::default();
//! let mut recorder = ShapeRecorder::new();
//! recorder.begin_shape(TopologyKind::Poly)?;
//! recorder.vertex((10.0, 10.0))?;
//! recorder.vertex((10.0, 100.0))?;
//! recorder.vertex((100.0, 100.0))?;
//! recorder.vertex((100.0, 10.0))?;
//! let shape = recorder.end_shape(CloseMode::Close, Style::default(), &settings)?;
//!
//! let mut emitter = Emitter::new(RecordingSink::new());
//! emitter.emit(&shape, &Transform::identity(), &settings)?;
//!
//! let sink = emitter.into_sink();
//! assert_eq!(sink.primitives.len(), 2); // fill mesh, then the border
//! # Ok::<(), trazo::ShapeError>(())
//! ```

pub use lyon;

mod cache;
mod color;
mod curves;
mod debug_tools;
mod emitter;
mod error;
mod flatten;
mod point;
mod primitive;
mod recorder;
mod shape;
mod stroke;
mod style;
mod tessellate;
mod topology;
mod transform;
mod vertex;

pub use color::Color;
pub use curves::{
    bezier_point, bezier_point3, bezier_tangent, bezier_tangent3, curve_point, curve_point3,
    curve_tangent, curve_tangent3, quadratic_point, quadratic_point3, CurveSettings,
};
pub use debug_tools::RecordingSink;
pub use emitter::Emitter;
pub use error::ShapeError;
pub use flatten::{flatten, flatten_contour};
pub use point::Point3;
pub use primitive::{GpuSink, Paint, PrimitiveTopology, RenderPrimitive, SinkCapabilities};
pub use recorder::{CloseMode, ShapeRecorder};
pub use shape::{Contour, ShapeRecord};
pub use stroke::{LineCap, LineJoin, Stroke};
pub use style::Style;
pub use tessellate::{Tessellator, TriangleMesh};
pub use topology::{classify, ArcMode, PrimitiveBatch, RawPrimitive, Role, TopologyKind};
pub use transform::Transform;
pub use vertex::{CurveFamily, TaggedVertex, VertexKind};
