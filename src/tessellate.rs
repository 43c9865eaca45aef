//! Filled-polygon tessellation for the general `Poly`/`Tess` case.
//!
//! Wraps lyon's monotone-sweep [`FillTessellator`]: one sub-path per
//! contour, non-zero fill rule. Under non-zero winding a hole is carved by
//! winding it opposite to its enclosing ring, which is the caller's
//! contract — an equal-winding "hole" fills solid instead. That contract is
//! documented, not runtime-checked.

use ahash::AHashMap;
use lyon::lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};
use lyon::tessellation::FillVertexConstructor;
use tracing::debug;

use crate::error::ShapeError;
use crate::Point3;

/// A tessellated fill: plain triangle-list geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Restores z on tessellator output. Tessellation itself is planar; output
/// vertices that coincide bit-exactly with an input point get that point's
/// z back, synthesized vertices (self-intersection splits) get z = 0.
struct DepthLookup<'a> {
    z_by_xy: &'a AHashMap<(u32, u32), f32>,
}

impl FillVertexConstructor<Point3> for DepthLookup<'_> {
    fn new_vertex(&mut self, vertex: FillVertex) -> Point3 {
        let p = vertex.position();
        let z = self
            .z_by_xy
            .get(&(p.x.to_bits(), p.y.to_bits()))
            .copied()
            .unwrap_or(0.0);
        Point3::new(p.x, p.y, z)
    }
}

/// Reusable wrapper around lyon's fill tessellator.
///
/// Guarantees: a simple exterior with non-intersecting, oppositely-wound
/// holes tessellates to a covering triangle list. Self-intersecting input is
/// handled best-effort by lyon (intersection vertices are inserted rather
/// than erroring); anything lyon itself rejects surfaces as
/// [`ShapeError::Tessellation`].
pub struct Tessellator {
    inner: FillTessellator,
    fills_run: u64,
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            inner: FillTessellator::new(),
            fills_run: 0,
        }
    }

    /// How many fills actually ran (degenerate skips excluded). Lets a
    /// caller verify that cached emissions do no tessellation work.
    #[inline]
    pub fn fill_count(&self) -> u64 {
        self.fills_run
    }

    /// Tessellates one exterior ring plus zero or more holes.
    ///
    /// Rings close implicitly; a trailing duplicate of the first point (the
    /// recorder's closure vertex) is dropped rather than fed to lyon as a
    /// zero-length edge. An exterior with fewer than 3 distinct points
    /// yields an empty mesh, not an error. When two input points share the
    /// same (x, y) but differ in z, the later point's z wins the restore
    /// lookup.
    pub fn fill(
        &mut self,
        exterior: &[Point3],
        holes: &[Vec<Point3>],
    ) -> Result<TriangleMesh, ShapeError> {
        let exterior = trim_closure(exterior);
        if exterior.len() < 3 {
            debug!(
                "Fill skipped: exterior ring has {} points, need at least 3.",
                exterior.len()
            );
            return Ok(TriangleMesh::empty());
        }

        let mut z_by_xy =
            AHashMap::with_capacity(exterior.len() + holes.iter().map(Vec::len).sum::<usize>());
        let mut path_builder = lyon::path::Path::builder();
        push_ring(&mut path_builder, exterior, &mut z_by_xy);
        for hole in holes {
            let ring = trim_closure(hole);
            if ring.len() < 3 {
                debug!("Hole with {} points ignored.", ring.len());
                continue;
            }
            push_ring(&mut path_builder, ring, &mut z_by_xy);
        }
        let path = path_builder.build();

        self.fills_run += 1;
        let mut buffers: VertexBuffers<Point3, u32> = VertexBuffers::new();
        let options = FillOptions::non_zero();
        self.inner.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, DepthLookup { z_by_xy: &z_by_xy }),
        )?;

        Ok(TriangleMesh {
            vertices: buffers.vertices,
            indices: buffers.indices,
        })
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops the explicit closure vertex if the ring carries one.
fn trim_closure(ring: &[Point3]) -> &[Point3] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

fn push_ring(
    builder: &mut lyon::path::Builder,
    ring: &[Point3],
    z_by_xy: &mut AHashMap<(u32, u32), f32>,
) {
    for p in ring {
        z_by_xy.insert((p.x.to_bits(), p.y.to_bits()), p.z);
    }
    builder.begin(ring[0].to_lyon());
    for p in &ring[1..] {
        builder.line_to(p.to_lyon());
    }
    builder.end(true);
}
