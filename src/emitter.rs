//! Drives finished shapes through classification and hands the results to
//! the sink.
//!
//! The emitter owns the pieces that are worth reusing across shapes: the
//! fill tessellator and the LRU mesh cache. The sink is injected once at
//! construction and everything downstream is generic over it.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::cache::TessellationCache;
use crate::curves::CurveSettings;
use crate::error::ShapeError;
use crate::primitive::{GpuSink, Paint, PrimitiveTopology, RenderPrimitive};
use crate::shape::ShapeRecord;
use crate::tessellate::{Tessellator, TriangleMesh};
use crate::topology::{classify, ArcMode, PrimitiveBatch, RawPrimitive, Role, TopologyKind};
use crate::transform::Transform;

const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Emits [`RenderPrimitive`]s for [`ShapeRecord`]s, in painter's order:
/// fill before border within a shape, shapes in call order. No depth
/// sorting happens here; if the sink wants depth it has z on every vertex.
///
/// # Examples
///
/// ```
/// use trazo::{Emitter, RecordingSink, ShapeRecord, Style, Color, Transform, CurveSettings};
///
/// let mut emitter = Emitter::new(RecordingSink::new());
/// let shape = ShapeRecord::rect(0.0, 0.0, 50.0, 50.0, Style::fill(Color::WHITE));
/// emitter.emit(&shape, &Transform::identity(), &CurveSettings::default())?;
/// assert_eq!(emitter.sink().primitives.len(), 1);
/// # Ok::<(), trazo::ShapeError>(())
/// ```
pub struct Emitter<S: GpuSink> {
    sink: S,
    tessellator: Tessellator,
    cache: TessellationCache,
}

impl<S: GpuSink> Emitter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_cache_capacity(
            sink,
            NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).expect("Cache size to be greater than 0"),
        )
    }

    pub fn with_cache_capacity(sink: S, capacity: NonZeroUsize) -> Self {
        Self {
            sink,
            tessellator: Tessellator::new(),
            cache: TessellationCache::new(capacity),
        }
    }

    /// Classifies and draws one shape under the given transform.
    ///
    /// Shapes with neither fill nor stroke enabled emit nothing and do no
    /// classification work; fill-disabled shapes skip tessellation.
    pub fn emit(
        &mut self,
        record: &ShapeRecord,
        transform: &Transform,
        settings: &CurveSettings,
    ) -> Result<(), ShapeError> {
        let Some((want_fill, want_border)) = checked_wants(record) else {
            return Ok(());
        };
        let caps = self.sink.capabilities();
        let batch = classify(
            record.kind(),
            record.vertices(),
            record.contours(),
            want_fill,
            want_border,
            &mut self.tessellator,
            caps,
            settings,
        )?;
        self.dispatch(batch, record, transform);
        Ok(())
    }

    /// Like [`emit`](Self::emit), but reuses the tessellated fill mesh for
    /// `cache_key` when one is cached.
    ///
    /// Only tessellator-backed fills are cached (`Poly`/`Tess` and
    /// chord-region arcs); fan fills are index arithmetic and not worth a
    /// cache slot. Cached meshes are pre-transform, so the same key is valid
    /// under any transform. [`ShapeRecord::geometry_hash`] is a ready-made
    /// key.
    pub fn emit_cached(
        &mut self,
        record: &ShapeRecord,
        cache_key: u64,
        transform: &Transform,
        settings: &CurveSettings,
    ) -> Result<(), ShapeError> {
        let Some((want_fill, want_border)) = checked_wants(record) else {
            return Ok(());
        };
        if !(want_fill && mesh_is_cacheable(record.kind())) {
            return self.emit(record, transform, settings);
        }

        if let Some(mesh) = self.cache.get_mesh(&cache_key) {
            self.send(
                RawPrimitive {
                    role: Role::Fill,
                    topology: PrimitiveTopology::TriangleList,
                    vertices: mesh.vertices,
                    indices: mesh.indices,
                },
                record,
                transform,
            );
            if want_border {
                let batch = classify(
                    record.kind(),
                    record.vertices(),
                    record.contours(),
                    false,
                    true,
                    &mut self.tessellator,
                    self.sink.capabilities(),
                    settings,
                )?;
                self.dispatch(batch, record, transform);
            }
            return Ok(());
        }

        let batch = classify(
            record.kind(),
            record.vertices(),
            record.contours(),
            want_fill,
            want_border,
            &mut self.tessellator,
            self.sink.capabilities(),
            settings,
        )?;
        if let Some(fill) = batch
            .iter()
            .find(|p| p.role == Role::Fill && p.topology == PrimitiveTopology::TriangleList)
        {
            self.cache.insert_mesh(
                cache_key,
                TriangleMesh {
                    vertices: fill.vertices.clone(),
                    indices: fill.indices.clone(),
                },
            );
        }
        self.dispatch(batch, record, transform);
        Ok(())
    }

    /// Fills actually tessellated so far (cache hits do not count).
    #[inline]
    pub fn tessellation_count(&self) -> u64 {
        self.tessellator.fill_count()
    }

    /// Meshes currently held by the cache.
    #[inline]
    pub fn cached_mesh_count(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Fill primitives go out before border primitives regardless of batch
    /// order; relative order within a role is preserved.
    fn dispatch(&mut self, batch: PrimitiveBatch, record: &ShapeRecord, transform: &Transform) {
        let (fills, borders): (Vec<RawPrimitive>, Vec<RawPrimitive>) =
            batch.into_iter().partition(|p| p.role == Role::Fill);
        for prim in fills.into_iter().chain(borders) {
            self.send(prim, record, transform);
        }
    }

    fn send(&mut self, prim: RawPrimitive, record: &ShapeRecord, transform: &Transform) {
        let paint = match prim.role {
            Role::Fill => match record.style().fill {
                Some(color) => Paint::Fill(color),
                None => return,
            },
            Role::Border => match record.style().stroke {
                Some(stroke) => Paint::Stroke(stroke),
                None => return,
            },
        };
        let vertices = prim
            .vertices
            .iter()
            .map(|&p| transform.transform_point(p))
            .collect();
        self.sink.draw(RenderPrimitive {
            topology: prim.topology,
            vertices,
            indices: prim.indices,
            paint,
        });
    }
}

fn checked_wants(record: &ShapeRecord) -> Option<(bool, bool)> {
    let style = record.style();
    let want_fill = style.fill_enabled();
    let want_border = style.stroke_enabled();
    if !want_fill && !want_border {
        debug!("Shape has neither fill nor stroke enabled; nothing to emit.");
        return None;
    }
    Some((want_fill, want_border))
}

fn mesh_is_cacheable(kind: TopologyKind) -> bool {
    matches!(
        kind,
        TopologyKind::Poly
            | TopologyKind::Tess
            | TopologyKind::Arc(ArcMode::Chord)
            | TopologyKind::Arc(ArcMode::Open)
    )
}
