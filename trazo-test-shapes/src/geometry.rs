//! Geometric assertion helpers for pipeline output.

use trazo::{Point3, PrimitiveTopology, RenderPrimitive};

/// Sum of unsigned triangle areas in an indexed triangle list.
pub fn triangle_area_sum(vertices: &[Point3], indices: &[u32]) -> f32 {
    indices
        .chunks(3)
        .map(|t| {
            let a = vertices[t[0] as usize];
            let b = vertices[t[1] as usize];
            let c = vertices[t[2] as usize];
            ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() * 0.5
        })
        .sum()
}

/// Area covered by a fill primitive, whatever its triangle topology.
pub fn fill_area(prim: &RenderPrimitive) -> f32 {
    triangle_area_sum(&prim.vertices, &triangle_list_indices(prim))
}

/// The primitive's triangles as an explicit list, expanding strips and fans.
pub fn triangle_list_indices(prim: &RenderPrimitive) -> Vec<u32> {
    let idx = &prim.indices;
    match prim.topology {
        PrimitiveTopology::TriangleList => idx.clone(),
        PrimitiveTopology::TriangleStrip => {
            let mut out = Vec::new();
            for i in 0..idx.len().saturating_sub(2) {
                if i % 2 == 0 {
                    out.extend_from_slice(&[idx[i], idx[i + 1], idx[i + 2]]);
                } else {
                    out.extend_from_slice(&[idx[i + 1], idx[i], idx[i + 2]]);
                }
            }
            out
        }
        PrimitiveTopology::TriangleFan => {
            let mut out = Vec::new();
            for i in 1..idx.len().saturating_sub(1) {
                out.extend_from_slice(&[idx[0], idx[i], idx[i + 1]]);
            }
            out
        }
        _ => Vec::new(),
    }
}

/// Triangles drawn by the primitive, topology-independent.
pub fn triangle_count(prim: &RenderPrimitive) -> usize {
    triangle_list_indices(prim).len() / 3
}

/// Undirected edge pairs of a `LineList` primitive, endpoints ordered
/// low-to-high so sets compare regardless of direction.
pub fn undirected_edges(indices: &[u32]) -> Vec<(u32, u32)> {
    indices
        .chunks(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect()
}

/// The axis-aligned bounds of a vertex list as `(min, max)`.
pub fn bounds(vertices: &[Point3]) -> (Point3, Point3) {
    let mut min = Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    let mut max = Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
    for v in vertices {
        min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
        max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
    }
    (min, max)
}
