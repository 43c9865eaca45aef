//! Topology classification: from a flat vertex list to fill and border
//! primitives.
//!
//! Each [`TopologyKind`] has its own fan-out and edge-adjacency rules; the
//! index arithmetic here is the part of the pipeline where an off-by-one
//! silently corrupts geometry, so the arms stay small and each one is pinned
//! by a test. Counts below a kind's minimum classify to an empty batch
//! (nothing to draw yet); counts breaking a kind's multiple-of rule are an
//! error (truncating would mask caller bugs).

use smallvec::SmallVec;
use tracing::debug;

use crate::curves::CurveSettings;
use crate::error::ShapeError;
use crate::flatten::flatten_contour;
use crate::primitive::{PrimitiveTopology, SinkCapabilities};
use crate::shape::Contour;
use crate::tessellate::Tessellator;
use crate::Point3;

/// How an arc's rim relates to its center, Processing-style.
///
/// `Default` is the unnamed mode: the fill behaves like `Pie`, the border
/// like `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArcMode {
    #[default]
    Default,
    Open,
    Chord,
    Pie,
}

/// The shape kinds accepted by `begin_shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    /// Independent quads, corners in perimeter order per quad. The implied
    /// split diagonal runs corner 0 to corner 2.
    Quads,
    /// Alternating rail pairs, already in triangle-strip order. Note this is
    /// NOT the `Quads` corner order; the implied diagonals differ.
    QuadStrip,
    Poly,
    Tess,
    Arc(ArcMode),
}

/// Whether a primitive belongs to the fill or the border pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Fill,
    Border,
}

/// Classifier output, before transform and paint are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrimitive {
    pub role: Role,
    pub topology: PrimitiveTopology,
    pub vertices: Vec<Point3>,
    pub indices: Vec<u32>,
}

/// Per-shape primitive batch. Almost every shape classifies to at most a
/// fill and a border, plus one border per contour.
pub type PrimitiveBatch = SmallVec<[RawPrimitive; 4]>;

/// Maps a shape's kind and flattened vertices to the primitives to emit.
///
/// `contours` participate only in `Poly`/`Tess` fills and borders; they are
/// flattened here, each on its own curve-kind scope. Strips, fans and loops
/// are expanded into plain lists when `caps` says the sink lacks them.
#[allow(clippy::too_many_arguments)]
pub fn classify(
    kind: TopologyKind,
    vertices: &[Point3],
    contours: &[Contour],
    want_fill: bool,
    want_border: bool,
    tessellator: &mut Tessellator,
    caps: SinkCapabilities,
    settings: &CurveSettings,
) -> Result<PrimitiveBatch, ShapeError> {
    let mut batch = PrimitiveBatch::new();
    if !want_fill && !want_border {
        return Ok(batch);
    }

    let n = vertices.len();
    if !count_gate(kind, n)? {
        debug!("{:?} with {} vertices is below its minimum; nothing to draw.", kind, n);
        return Ok(batch);
    }
    if !contours.is_empty() && !matches!(kind, TopologyKind::Poly | TopologyKind::Tess) {
        debug!("{:?} does not take contours; {} contour(s) ignored.", kind, contours.len());
    }

    match kind {
        TopologyKind::Points => {
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::PointList,
                    vertices.to_vec(),
                    identity_indices(n),
                );
            }
        }
        TopologyKind::Lines => {
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    identity_indices(n),
                );
            }
        }
        TopologyKind::LineStrip => {
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineStrip,
                    vertices.to_vec(),
                    identity_indices(n),
                );
            }
        }
        TopologyKind::Triangles => {
            if want_fill {
                push(
                    &mut batch,
                    Role::Fill,
                    PrimitiveTopology::TriangleList,
                    vertices.to_vec(),
                    identity_indices(n),
                );
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    triangles_edges(n),
                );
            }
        }
        TopologyKind::TriangleStrip => {
            if want_fill {
                push_strip(&mut batch, vertices.to_vec(), caps);
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    strip_edges(n),
                );
            }
        }
        TopologyKind::TriangleFan => {
            if want_fill {
                push_fan(&mut batch, vertices.to_vec(), caps);
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    fan_edges(n),
                );
            }
        }
        TopologyKind::Quads => {
            if want_fill {
                push(
                    &mut batch,
                    Role::Fill,
                    PrimitiveTopology::TriangleList,
                    vertices.to_vec(),
                    quads_triangles(n),
                );
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    quads_edges(n),
                );
            }
        }
        TopologyKind::QuadStrip => {
            // Rail pairs are already strip order; reuse the strip machinery.
            if want_fill {
                push_strip(&mut batch, vertices.to_vec(), caps);
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineList,
                    vertices.to_vec(),
                    rail_edges(n),
                );
            }
        }
        TopologyKind::Poly | TopologyKind::Tess => {
            let holes = contours
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| flatten_contour(c, settings))
                .collect::<Result<Vec<_>, _>>()?;
            if want_fill {
                let mesh = tessellator.fill(vertices, &holes)?;
                push(
                    &mut batch,
                    Role::Fill,
                    PrimitiveTopology::TriangleList,
                    mesh.vertices,
                    mesh.indices,
                );
            }
            if want_border {
                push(
                    &mut batch,
                    Role::Border,
                    PrimitiveTopology::LineStrip,
                    vertices.to_vec(),
                    identity_indices(n),
                );
                for ring in &holes {
                    push(
                        &mut batch,
                        Role::Border,
                        PrimitiveTopology::LineStrip,
                        ring.clone(),
                        identity_indices(ring.len()),
                    );
                }
            }
        }
        TopologyKind::Arc(mode) => {
            classify_arc(
                mode,
                vertices,
                want_fill,
                want_border,
                tessellator,
                caps,
                &mut batch,
            )?;
        }
    }
    Ok(batch)
}

/// Arc layout: `vertices[0]` is the center, the rest sample the rim in
/// sweep order.
fn classify_arc(
    mode: ArcMode,
    vertices: &[Point3],
    want_fill: bool,
    want_border: bool,
    tessellator: &mut Tessellator,
    caps: SinkCapabilities,
    batch: &mut PrimitiveBatch,
) -> Result<(), ShapeError> {
    let rim = &vertices[1..];
    if want_fill {
        match mode {
            ArcMode::Pie | ArcMode::Default => {
                // Fan pivoted at the center covers the pie wedge.
                push_fan(batch, vertices.to_vec(), caps);
            }
            ArcMode::Chord | ArcMode::Open => {
                // The rim ring closed back on itself is the chord region.
                let mesh = tessellator.fill(rim, &[])?;
                push(
                    batch,
                    Role::Fill,
                    PrimitiveTopology::TriangleList,
                    mesh.vertices,
                    mesh.indices,
                );
            }
        }
    }
    if want_border {
        match mode {
            ArcMode::Open | ArcMode::Default => {
                push(
                    batch,
                    Role::Border,
                    PrimitiveTopology::LineStrip,
                    rim.to_vec(),
                    identity_indices(rim.len()),
                );
            }
            ArcMode::Chord => {
                push_loop(batch, rim.to_vec(), caps);
            }
            ArcMode::Pie => {
                // Looping through the center draws both radii.
                push_loop(batch, vertices.to_vec(), caps);
            }
        }
    }
    Ok(())
}

/// Minimum-count and multiple-of validation. `Ok(false)` means below the
/// minimum (classify to nothing); an unmet multiple-of rule is an error.
fn count_gate(kind: TopologyKind, n: usize) -> Result<bool, ShapeError> {
    let (min, multiple) = match kind {
        TopologyKind::Points => (1, None),
        TopologyKind::Lines => (2, Some(2)),
        TopologyKind::LineStrip => (2, None),
        TopologyKind::Triangles => (3, Some(3)),
        TopologyKind::TriangleStrip => (3, None),
        TopologyKind::TriangleFan => (3, None),
        TopologyKind::Quads => (4, Some(4)),
        TopologyKind::QuadStrip => (4, None),
        TopologyKind::Poly | TopologyKind::Tess => (1, None),
        TopologyKind::Arc(_) => (2, None),
    };
    if n < min {
        return Ok(false);
    }
    if let Some(m) = multiple {
        if n % m != 0 {
            return Err(ShapeError::invalid_shape(format!(
                "{kind:?} requires a multiple of {m} vertices, got {n}"
            )));
        }
    }
    Ok(true)
}

fn push(
    batch: &mut PrimitiveBatch,
    role: Role,
    topology: PrimitiveTopology,
    vertices: Vec<Point3>,
    indices: Vec<u32>,
) {
    if !has_complete_instance(topology, indices.len()) {
        return;
    }
    batch.push(RawPrimitive {
        role,
        topology,
        vertices,
        indices,
    });
}

/// Native triangle strip, or the winding-corrected list expansion when the
/// sink lacks strips.
fn push_strip(batch: &mut PrimitiveBatch, vertices: Vec<Point3>, caps: SinkCapabilities) {
    let n = vertices.len();
    if caps.triangle_strips {
        push(
            batch,
            Role::Fill,
            PrimitiveTopology::TriangleStrip,
            vertices,
            identity_indices(n),
        );
    } else {
        push(
            batch,
            Role::Fill,
            PrimitiveTopology::TriangleList,
            vertices,
            expand_strip(n),
        );
    }
}

/// Native triangle fan pivoted at vertex 0, or its list expansion.
fn push_fan(batch: &mut PrimitiveBatch, vertices: Vec<Point3>, caps: SinkCapabilities) {
    let n = vertices.len();
    if caps.triangle_fans {
        push(
            batch,
            Role::Fill,
            PrimitiveTopology::TriangleFan,
            vertices,
            identity_indices(n),
        );
    } else {
        push(
            batch,
            Role::Fill,
            PrimitiveTopology::TriangleList,
            vertices,
            expand_fan(n),
        );
    }
}

/// Closed border ring, or a strip with the first index re-appended when the
/// sink lacks line loops.
fn push_loop(batch: &mut PrimitiveBatch, vertices: Vec<Point3>, caps: SinkCapabilities) {
    let n = vertices.len();
    if caps.line_loops {
        push(
            batch,
            Role::Border,
            PrimitiveTopology::LineLoop,
            vertices,
            identity_indices(n),
        );
    } else {
        let mut indices = identity_indices(n);
        if n >= 2 {
            indices.push(0);
        }
        push(
            batch,
            Role::Border,
            PrimitiveTopology::LineStrip,
            vertices,
            indices,
        );
    }
}

/// Fewer indices than one instance of the topology draws nothing; drop the
/// primitive instead of handing the sink an empty draw.
fn has_complete_instance(topology: PrimitiveTopology, index_count: usize) -> bool {
    let min = match topology {
        PrimitiveTopology::PointList => 1,
        PrimitiveTopology::LineList | PrimitiveTopology::LineStrip => 2,
        PrimitiveTopology::LineLoop => 2,
        PrimitiveTopology::TriangleList
        | PrimitiveTopology::TriangleStrip
        | PrimitiveTopology::TriangleFan => 3,
    };
    index_count >= min
}

fn identity_indices(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// Per-triangle perimeter edges: `(i, i + [1, 1, -2][i % 3])`. Each triplet
/// contributes its own three edges and nothing across triplets.
fn triangles_edges(n: usize) -> Vec<u32> {
    let mut idx = Vec::with_capacity(n * 2);
    for i in 0..n {
        idx.push(i as u32);
        let step: i64 = [1, 1, -2][i % 3];
        idx.push((i as i64 + step) as u32);
    }
    idx
}

/// Strip edges: every adjacent pair plus every skip-one pair.
fn strip_edges(n: usize) -> Vec<u32> {
    let mut idx = Vec::new();
    for i in 0..n.saturating_sub(1) {
        idx.push(i as u32);
        idx.push(i as u32 + 1);
    }
    for i in 0..n.saturating_sub(2) {
        idx.push(i as u32);
        idx.push(i as u32 + 2);
    }
    idx
}

/// Fan edges: spokes from the pivot plus the rim.
fn fan_edges(n: usize) -> Vec<u32> {
    let mut idx = Vec::new();
    for i in 1..n {
        idx.push(0);
        idx.push(i as u32);
    }
    for i in 1..n.saturating_sub(1) {
        idx.push(i as u32);
        idx.push(i as u32 + 1);
    }
    idx
}

/// Two triangles per quad: `(b, b+1, b+2)` and `(b, b+2, b+3)`.
fn quads_triangles(n: usize) -> Vec<u32> {
    let mut idx = Vec::with_capacity((n / 4) * 6);
    for q in 0..n / 4 {
        let b = (q * 4) as u32;
        idx.extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
    }
    idx
}

/// Four perimeter edges per quad, diagonal excluded.
fn quads_edges(n: usize) -> Vec<u32> {
    let mut idx = Vec::with_capacity((n / 4) * 8);
    for q in 0..n / 4 {
        let b = (q * 4) as u32;
        idx.extend_from_slice(&[b, b + 1, b + 1, b + 2, b + 2, b + 3, b + 3, b]);
    }
    idx
}

/// Quad-strip rails: `(i, i + 2)` walks both rails at once.
fn rail_edges(n: usize) -> Vec<u32> {
    let mut idx = Vec::new();
    for i in 0..n.saturating_sub(2) {
        idx.push(i as u32);
        idx.push(i as u32 + 2);
    }
    idx
}

/// Strip-to-list expansion with the GL parity rule: odd triangles swap
/// their leading pair to keep winding consistent.
fn expand_strip(n: usize) -> Vec<u32> {
    let mut idx = Vec::with_capacity(n.saturating_sub(2) * 3);
    for i in 0..n.saturating_sub(2) {
        let (a, b) = if i % 2 == 0 {
            (i as u32, i as u32 + 1)
        } else {
            (i as u32 + 1, i as u32)
        };
        idx.extend_from_slice(&[a, b, i as u32 + 2]);
    }
    idx
}

/// Fan-to-list expansion: `(0, i, i + 1)`.
fn expand_fan(n: usize) -> Vec<u32> {
    let mut idx = Vec::with_capacity(n.saturating_sub(2) * 3);
    for i in 1..n.saturating_sub(1) {
        idx.extend_from_slice(&[0, i as u32, i as u32 + 1]);
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point3> {
        coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect()
    }

    fn run(
        kind: TopologyKind,
        vertices: &[Point3],
        caps: SinkCapabilities,
    ) -> Result<PrimitiveBatch, ShapeError> {
        let mut tess = Tessellator::new();
        classify(
            kind,
            vertices,
            &[],
            true,
            true,
            &mut tess,
            caps,
            &CurveSettings::default(),
        )
    }

    fn fill_of(batch: &PrimitiveBatch) -> &RawPrimitive {
        batch.iter().find(|p| p.role == Role::Fill).expect("fill primitive")
    }

    fn border_of(batch: &PrimitiveBatch) -> &RawPrimitive {
        batch
            .iter()
            .find(|p| p.role == Role::Border)
            .expect("border primitive")
    }

    fn edge_set(indices: &[u32]) -> Vec<(u32, u32)> {
        indices
            .chunks(2)
            .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
            .collect()
    }

    #[test]
    fn two_triangles_fill_and_six_border_edges() {
        let v = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 10.0),
            (20.0, 0.0),
            (30.0, 0.0),
            (25.0, 10.0),
        ]);
        let batch = run(TopologyKind::Triangles, &v, SinkCapabilities::default()).unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleList);
        assert_eq!(fill.indices, vec![0, 1, 2, 3, 4, 5]);

        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineList);
        let edges = edge_set(&border.indices);
        assert_eq!(edges.len(), 6);
        for expected in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
            assert!(edges.contains(&expected), "missing edge {expected:?}");
        }
    }

    #[test]
    fn quads_split_on_the_first_diagonal() {
        let v = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let batch = run(TopologyKind::Quads, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(fill_of(&batch).indices, vec![0, 1, 2, 0, 2, 3]);
        let edges = edge_set(&border_of(&batch).indices);
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (0, 3)]);
    }

    #[test]
    fn multiple_of_violations_are_hard_errors() {
        let seven = pts(&[(0.0, 0.0); 7]);
        assert!(matches!(
            run(TopologyKind::Triangles, &seven, SinkCapabilities::default()),
            Err(ShapeError::InvalidShape(_))
        ));
        let five = pts(&[(0.0, 0.0); 5]);
        assert!(matches!(
            run(TopologyKind::Quads, &five, SinkCapabilities::default()),
            Err(ShapeError::InvalidShape(_))
        ));
        let three = pts(&[(0.0, 0.0); 3]);
        assert!(matches!(
            run(TopologyKind::Lines, &three, SinkCapabilities::default()),
            Err(ShapeError::InvalidShape(_))
        ));
    }

    #[test]
    fn below_minimum_classifies_to_nothing() {
        let two = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        let batch = run(TopologyKind::Triangles, &two, SinkCapabilities::default()).unwrap();
        assert!(batch.is_empty());
        let one = pts(&[(0.0, 0.0)]);
        assert!(run(TopologyKind::Lines, &one, SinkCapabilities::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn line_kinds_have_no_fill() {
        let v = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (3.0, 1.0)]);
        let batch = run(TopologyKind::Lines, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].role, Role::Border);
        assert_eq!(batch[0].topology, PrimitiveTopology::LineList);

        let strip = run(TopologyKind::LineStrip, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(strip[0].topology, PrimitiveTopology::LineStrip);
        assert_eq!(strip[0].indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn strip_fill_is_native_when_supported() {
        let v = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let batch = run(TopologyKind::TriangleStrip, &v, SinkCapabilities::default()).unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleStrip);
        assert_eq!(fill.indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn strip_expansion_alternates_winding() {
        let v = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let batch = run(TopologyKind::TriangleStrip, &v, SinkCapabilities::lists_only()).unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleList);
        assert_eq!(fill.indices, vec![0, 1, 2, 2, 1, 3, 2, 3, 4]);
    }

    #[test]
    fn strip_border_covers_adjacent_and_skip_pairs() {
        let v = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        let batch = run(TopologyKind::TriangleStrip, &v, SinkCapabilities::default()).unwrap();
        let edges = edge_set(&border_of(&batch).indices);
        assert_eq!(edges.len(), 5);
        for expected in [(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)] {
            assert!(edges.contains(&expected));
        }
    }

    #[test]
    fn fan_expansion_pivots_on_vertex_zero() {
        let v = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let batch = run(TopologyKind::TriangleFan, &v, SinkCapabilities::lists_only()).unwrap();
        assert_eq!(fill_of(&batch).indices, vec![0, 1, 2, 0, 2, 3]);

        let native = run(TopologyKind::TriangleFan, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(fill_of(&native).topology, PrimitiveTopology::TriangleFan);
    }

    #[test]
    fn fan_border_is_spokes_plus_rim() {
        let v = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let batch = run(TopologyKind::TriangleFan, &v, SinkCapabilities::default()).unwrap();
        let edges = edge_set(&border_of(&batch).indices);
        assert_eq!(edges.len(), 5);
        for expected in [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)] {
            assert!(edges.contains(&expected));
        }
    }

    #[test]
    fn quad_strip_uses_rail_order_not_quads_order() {
        let v = pts(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (2.0, 0.0),
            (2.0, 1.0),
        ]);
        let batch = run(TopologyKind::QuadStrip, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(fill_of(&batch).topology, PrimitiveTopology::TriangleStrip);
        let edges = edge_set(&border_of(&batch).indices);
        assert_eq!(edges, vec![(0, 2), (1, 3), (2, 4), (3, 5)]);
    }

    #[test]
    fn quad_strip_tolerates_odd_counts() {
        let v = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let batch = run(TopologyKind::QuadStrip, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(fill_of(&batch).indices.len(), 5);
    }

    #[test]
    fn poly_fills_via_the_tessellator_and_outlines_the_perimeter() {
        let v = pts(&[
            (10.0, 10.0),
            (10.0, 100.0),
            (100.0, 100.0),
            (100.0, 10.0),
            (10.0, 10.0),
        ]);
        let batch = run(TopologyKind::Poly, &v, SinkCapabilities::default()).unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleList);
        assert!(!fill.indices.is_empty());
        assert_eq!(fill.indices.len() % 3, 0);

        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineStrip);
        assert_eq!(border.vertices.len(), 5);
        assert_eq!(border.vertices[4], border.vertices[0]);
    }

    #[test]
    fn pie_arc_fans_from_the_center() {
        // Center plus a quarter rim.
        let v = pts(&[(0.0, 0.0), (10.0, 0.0), (7.07, 7.07), (0.0, 10.0)]);
        let batch = run(
            TopologyKind::Arc(ArcMode::Pie),
            &v,
            SinkCapabilities::default(),
        )
        .unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleFan);
        assert_eq!(fill.vertices[0], Point3::new(0.0, 0.0, 0.0));

        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineLoop);
        // Loop runs center -> rim -> center: both radii closed.
        assert_eq!(border.vertices.len(), 4);
    }

    #[test]
    fn open_arc_strokes_only_the_rim() {
        let v = pts(&[(0.0, 0.0), (10.0, 0.0), (7.07, 7.07), (0.0, 10.0)]);
        let batch = run(
            TopologyKind::Arc(ArcMode::Open),
            &v,
            SinkCapabilities::default(),
        )
        .unwrap();
        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineStrip);
        assert_eq!(border.vertices.len(), 3);
        assert_eq!(border.vertices[0], Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn default_arc_mixes_pie_fill_with_open_border() {
        let v = pts(&[(0.0, 0.0), (10.0, 0.0), (7.07, 7.07), (0.0, 10.0)]);
        let batch = run(
            TopologyKind::Arc(ArcMode::Default),
            &v,
            SinkCapabilities::default(),
        )
        .unwrap();
        assert_eq!(fill_of(&batch).topology, PrimitiveTopology::TriangleFan);
        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineStrip);
        assert_eq!(border.vertices.len(), 3);
    }

    #[test]
    fn chord_arc_closes_the_rim_and_respects_loop_support() {
        let v = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (7.07, 7.07),
            (0.0, 10.0),
            (-7.07, 7.07),
        ]);
        let batch = run(
            TopologyKind::Arc(ArcMode::Chord),
            &v,
            SinkCapabilities::default(),
        )
        .unwrap();
        let border = border_of(&batch);
        assert_eq!(border.topology, PrimitiveTopology::LineLoop);
        assert_eq!(border.vertices.len(), 4);

        let expanded = run(
            TopologyKind::Arc(ArcMode::Chord),
            &v,
            SinkCapabilities::lists_only(),
        )
        .unwrap();
        let border = border_of(&expanded);
        assert_eq!(border.topology, PrimitiveTopology::LineStrip);
        assert_eq!(border.indices, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn chord_arc_fill_tessellates_the_rim_region() {
        let v = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (7.07, 7.07),
            (0.0, 10.0),
            (-7.07, 7.07),
        ]);
        let batch = run(
            TopologyKind::Arc(ArcMode::Chord),
            &v,
            SinkCapabilities::default(),
        )
        .unwrap();
        let fill = fill_of(&batch);
        assert_eq!(fill.topology, PrimitiveTopology::TriangleList);
        assert!(!fill.indices.is_empty());
    }

    #[test]
    fn want_flags_gate_the_roles() {
        let v = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
        let mut tess = Tessellator::new();
        let fill_only = classify(
            TopologyKind::Triangles,
            &v,
            &[],
            true,
            false,
            &mut tess,
            SinkCapabilities::default(),
            &CurveSettings::default(),
        )
        .unwrap();
        assert!(fill_only.iter().all(|p| p.role == Role::Fill));
        let border_only = classify(
            TopologyKind::Triangles,
            &v,
            &[],
            false,
            true,
            &mut tess,
            SinkCapabilities::default(),
            &CurveSettings::default(),
        )
        .unwrap();
        assert!(border_only.iter().all(|p| p.role == Role::Border));
    }

    #[test]
    fn points_draw_with_the_border_pass() {
        let v = pts(&[(0.0, 0.0), (5.0, 5.0)]);
        let batch = run(TopologyKind::Points, &v, SinkCapabilities::default()).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].role, Role::Border);
        assert_eq!(batch[0].topology, PrimitiveTopology::PointList);
        assert_eq!(batch[0].indices, vec![0, 1]);
    }
}
