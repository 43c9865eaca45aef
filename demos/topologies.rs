//! Classifies one small vertex set under every topology kind and dumps the
//! resulting mesh and border primitives.
//!
//! Run with:   cargo run --example topologies

use trazo::{
    ArcMode, CloseMode, CurveSettings, Emitter, RecordingSink, ShapeError, ShapeRecord,
    ShapeRecorder, Style, TopologyKind, Transform,
};

const KINDS: &[TopologyKind] = &[
    TopologyKind::Points,
    TopologyKind::Lines,
    TopologyKind::LineStrip,
    TopologyKind::Triangles,
    TopologyKind::TriangleStrip,
    TopologyKind::TriangleFan,
    TopologyKind::Quads,
    TopologyKind::QuadStrip,
    TopologyKind::Poly,
    TopologyKind::Arc(ArcMode::Pie),
    TopologyKind::Arc(ArcMode::Chord),
    TopologyKind::Arc(ArcMode::Open),
];

/// Twelve points on two rails; every kind above can digest them.
fn rail_points() -> Vec<(f32, f32)> {
    (0..6)
        .flat_map(|i| {
            let x = i as f32 * 20.0;
            [(x, 0.0), (x, 20.0)]
        })
        .collect()
}

fn shape_for(kind: TopologyKind, settings: &CurveSettings) -> Result<ShapeRecord, ShapeError> {
    if let TopologyKind::Arc(mode) = kind {
        return Ok(ShapeRecord::arc(
            50.0,
            50.0,
            40.0,
            40.0,
            0.0,
            std::f32::consts::PI * 1.5,
            mode,
            Style::default(),
        ));
    }
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(kind)?;
    for p in rail_points() {
        rec.vertex(p)?;
    }
    let mode = if kind == TopologyKind::Poly {
        CloseMode::Close
    } else {
        CloseMode::Open
    };
    rec.end_shape(mode, Style::default(), settings)
}

fn main() -> Result<(), ShapeError> {
    tracing_subscriber::fmt::init();

    let settings = CurveSettings::default();
    let transform = Transform::identity();

    for &kind in KINDS {
        let shape = shape_for(kind, &settings)?;
        let mut emitter = Emitter::new(RecordingSink::new());
        emitter.emit(&shape, &transform, &settings)?;
        let sink = emitter.into_sink();

        println!("{kind:?} ({} vertices):", shape.vertices().len());
        for prim in &sink.primitives {
            let role = if prim.paint.is_fill() { "fill" } else { "border" };
            println!(
                "  {:<6} {:<14} {} vertices, {} indices",
                role,
                prim.topology.name(),
                prim.vertices.len(),
                prim.indices.len(),
            );
            if prim.indices.len() <= 24 {
                println!("         indices: {:?}", prim.indices);
            }
        }
        if sink.primitives.is_empty() {
            println!("  (nothing to draw)");
        }
    }
    Ok(())
}
