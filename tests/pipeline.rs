//! End-to-end pipeline tests: record through the public API, emit into a
//! [`RecordingSink`], and check the geometry that comes out.
//!
//! Run with:   cargo test --test pipeline

use trazo::{
    CloseMode, Color, CurveSettings, Emitter, PrimitiveTopology, RecordingSink, ShapeRecord,
    ShapeRecorder, SinkCapabilities, Stroke, Style, TopologyKind, Transform,
};
use trazo_test_shapes::{fill_area, quads_row, ribbon, square_poly, star, triangle_count};

fn emit(shape: &ShapeRecord) -> RecordingSink {
    emit_with_caps(shape, SinkCapabilities::default())
}

fn emit_with_caps(shape: &ShapeRecord, caps: SinkCapabilities) -> RecordingSink {
    let mut emitter = Emitter::new(RecordingSink::with_capabilities(caps));
    emitter
        .emit(shape, &Transform::identity(), &CurveSettings::default())
        .expect("emission to succeed");
    emitter.into_sink()
}

/// A 90x90 square recorded as a closed poly fills through the tessellator
/// and strokes as the closed 5-point polyline.
#[test]
fn closed_poly_square_fills_and_outlines() {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Poly).unwrap();
    rec.vertex((10.0, 10.0)).unwrap();
    rec.vertex((10.0, 100.0)).unwrap();
    rec.vertex((100.0, 100.0)).unwrap();
    rec.vertex((100.0, 10.0)).unwrap();
    let shape = rec
        .end_shape(CloseMode::Close, Style::default(), &CurveSettings::default())
        .unwrap();
    assert_eq!(shape.vertices().len(), 5);

    let sink = emit(&shape);
    assert_eq!(sink.primitives.len(), 2);

    let fill = sink.fills().next().unwrap();
    assert_eq!(fill.topology, PrimitiveTopology::TriangleList);
    assert!(!fill.indices.is_empty());
    assert!((fill_area(fill) - 8100.0).abs() < 1e-2);

    let border = sink.borders().next().unwrap();
    assert_eq!(border.topology, PrimitiveTopology::LineStrip);
    assert_eq!(border.vertices.len(), 5);
    assert_eq!(border.vertices[4], border.vertices[0]);
}

#[test]
fn fill_precedes_border_and_disabled_sides_are_absent() {
    let filled_and_stroked = square_poly(0.0, 0.0, 10.0, Style::default()).unwrap();
    let sink = emit(&filled_and_stroked);
    assert!(sink.primitives[0].paint.is_fill());
    assert!(!sink.primitives[1].paint.is_fill());

    let stroke_only =
        square_poly(0.0, 0.0, 10.0, Style::stroke(Stroke::new(2.0, Color::BLACK))).unwrap();
    let sink = emit(&stroke_only);
    assert_eq!(sink.fills().count(), 0);
    assert_eq!(sink.borders().count(), 1);

    let fill_only = square_poly(0.0, 0.0, 10.0, Style::fill(Color::WHITE)).unwrap();
    let sink = emit(&fill_only);
    assert_eq!(sink.fills().count(), 1);
    assert_eq!(sink.borders().count(), 0);
}

#[test]
fn shapes_arrive_in_call_order() {
    let mut emitter = Emitter::new(RecordingSink::new());
    let settings = CurveSettings::default();
    let t = Transform::identity();
    let a = square_poly(0.0, 0.0, 10.0, Style::fill(Color::rgb(255, 0, 0))).unwrap();
    let b = square_poly(5.0, 5.0, 10.0, Style::fill(Color::rgb(0, 255, 0))).unwrap();
    emitter.emit(&a, &t, &settings).unwrap();
    emitter.emit(&b, &t, &settings).unwrap();

    let sink = emitter.into_sink();
    assert_eq!(sink.primitives[0].paint.color(), Color::rgb(255, 0, 0));
    assert_eq!(sink.primitives[1].paint.color(), Color::rgb(0, 255, 0));
}

#[test]
fn strip_expansion_preserves_triangle_count_and_area() {
    let shape = ribbon(TopologyKind::TriangleStrip, 4, Style::fill(Color::WHITE)).unwrap();

    let native = emit(&shape);
    let native_fill = native.fills().next().unwrap();
    assert_eq!(native_fill.topology, PrimitiveTopology::TriangleStrip);

    let expanded = emit_with_caps(&shape, SinkCapabilities::lists_only());
    let expanded_fill = expanded.fills().next().unwrap();
    assert_eq!(expanded_fill.topology, PrimitiveTopology::TriangleList);

    assert_eq!(triangle_count(native_fill), triangle_count(expanded_fill));
    // Three 10x10 quads' worth of ribbon either way.
    assert!((fill_area(native_fill) - 300.0).abs() < 1e-3);
    assert!((fill_area(expanded_fill) - 300.0).abs() < 1e-3);
}

#[test]
fn fan_expansion_preserves_coverage() {
    let shape = ShapeRecord::arc(
        50.0,
        50.0,
        20.0,
        20.0,
        0.0,
        std::f32::consts::TAU,
        trazo::ArcMode::Pie,
        Style::fill(Color::WHITE),
    );
    let native = emit(&shape);
    let native_fill = native.fills().next().unwrap();
    assert_eq!(native_fill.topology, PrimitiveTopology::TriangleFan);

    let expanded = emit_with_caps(&shape, SinkCapabilities::lists_only());
    let expanded_fill = expanded.fills().next().unwrap();
    assert_eq!(expanded_fill.topology, PrimitiveTopology::TriangleList);

    let a = fill_area(native_fill);
    let b = fill_area(expanded_fill);
    assert!((a - b).abs() < 1e-2);
    // Polygonal disc area converges on pi r^2.
    assert!((a - std::f32::consts::PI * 400.0).abs() < 10.0);
}

#[test]
fn quads_fill_splits_and_border_skips_diagonals() {
    let shape = quads_row(3, Style::default()).unwrap();
    let sink = emit(&shape);
    let fill = sink.fills().next().unwrap();
    assert_eq!(fill.indices.len(), 18);
    assert!((fill_area(fill) - 3.0).abs() < 1e-4);
    let border = sink.borders().next().unwrap();
    // Four edges per quad, two endpoints each.
    assert_eq!(border.indices.len(), 24);
}

#[test]
fn star_tessellates_to_its_shoelace_area() {
    let shape = star(0.0, 0.0, 50.0, 20.0, Style::fill(Color::WHITE)).unwrap();
    let sink = emit(&shape);
    let fill = sink.fills().next().unwrap();

    // Shoelace over the recorded outline (drop the closure duplicate).
    let ring = &shape.vertices()[..shape.vertices().len() - 1];
    let mut shoelace = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        shoelace += a.x * b.y - b.x * a.y;
    }
    let expected = shoelace.abs() * 0.5;
    assert!((fill_area(fill) - expected).abs() < expected * 1e-3);
}

#[test]
fn transform_moves_all_emitted_vertices() {
    let shape = square_poly(0.0, 0.0, 10.0, Style::default()).unwrap();
    let t = Transform::identity()
        .then_scale(2.0, 2.0)
        .then_translate(100.0, 50.0, 0.0);
    let mut emitter = Emitter::new(RecordingSink::new());
    emitter.emit(&shape, &t, &CurveSettings::default()).unwrap();
    let sink = emitter.into_sink();
    let (min, max) = trazo_test_shapes::bounds(&sink.borders().next().unwrap().vertices);
    assert_eq!(min.to_array(), [100.0, 50.0, 0.0]);
    assert_eq!(max.to_array(), [120.0, 70.0, 0.0]);
}

#[test]
fn cached_emission_reuses_the_mesh() {
    let shape = star(0.0, 0.0, 50.0, 20.0, Style::fill(Color::WHITE)).unwrap();
    let key = shape.geometry_hash();
    let mut emitter = Emitter::new(RecordingSink::new());
    let t = Transform::identity();
    let s = CurveSettings::default();

    emitter.emit_cached(&shape, key, &t, &s).unwrap();
    emitter.emit_cached(&shape, key, &t, &s).unwrap();
    assert_eq!(emitter.tessellation_count(), 1);

    let sink = emitter.into_sink();
    assert_eq!(sink.primitives.len(), 2);
    assert_eq!(sink.primitives[0].vertices, sink.primitives[1].vertices);
}

#[test]
fn cached_mesh_is_valid_under_a_different_transform() {
    let shape = star(0.0, 0.0, 50.0, 20.0, Style::fill(Color::WHITE)).unwrap();
    let key = shape.geometry_hash();
    let mut emitter = Emitter::new(RecordingSink::new());
    let s = CurveSettings::default();

    emitter
        .emit_cached(&shape, key, &Transform::identity(), &s)
        .unwrap();
    let shifted = Transform::identity().then_translate(500.0, 0.0, 0.0);
    emitter.emit_cached(&shape, key, &shifted, &s).unwrap();
    assert_eq!(emitter.tessellation_count(), 1);

    let sink = emitter.into_sink();
    let base = fill_area(&sink.primitives[0]);
    let moved = fill_area(&sink.primitives[1]);
    assert!((base - moved).abs() < 1e-2);
    assert!(sink.primitives[1].vertices.iter().all(|v| v.x >= 400.0));
}

#[test]
fn curved_outline_flows_through_the_whole_pipeline() {
    let settings = CurveSettings::default().with_bezier_resolution(16);
    let shape =
        trazo_test_shapes::bezier_leaf(Style::fill(Color::rgb(40, 160, 40)), &settings).unwrap();
    // Anchor plus two 17-sample segments.
    assert_eq!(shape.vertices().len(), 35);

    let mut emitter = Emitter::new(RecordingSink::new());
    emitter
        .emit(&shape, &Transform::identity(), &settings)
        .unwrap();
    let sink = emitter.into_sink();
    let fill = sink.fills().next().unwrap();
    assert!(fill_area(fill) > 0.0);
}

#[test]
fn catmull_rom_strip_spans_interior_points_only() {
    let settings = CurveSettings::default().with_curve_resolution(8);
    let shape = trazo_test_shapes::curve_wave(
        Style::stroke(Stroke::new(1.0, Color::BLACK)),
        &settings,
    )
    .unwrap();
    // Six control points, three interior spans, junctions shared.
    assert_eq!(shape.vertices().len(), 25);
    assert_eq!(shape.vertices()[0].to_array(), [20.0, 30.0, 0.0]);
    assert_eq!(shape.vertices().last().unwrap().to_array(), [80.0, -30.0, 0.0]);

    let sink = emit(&shape);
    assert_eq!(sink.borders().next().unwrap().topology, PrimitiveTopology::LineStrip);
}

#[test]
fn too_few_vertices_draw_nothing_without_erroring() {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Triangles).unwrap();
    rec.vertex((0.0, 0.0)).unwrap();
    rec.vertex((1.0, 0.0)).unwrap();
    let shape = rec
        .end_shape(CloseMode::Open, Style::default(), &CurveSettings::default())
        .unwrap();
    let sink = emit(&shape);
    assert!(sink.primitives.is_empty());
}

#[test]
fn points_topology_reaches_the_sink_as_point_list() {
    let mut rec = ShapeRecorder::new();
    rec.begin_shape(TopologyKind::Points).unwrap();
    for i in 0..5 {
        rec.vertex((i as f32, 0.0)).unwrap();
    }
    let shape = rec
        .end_shape(CloseMode::Open, Style::default(), &CurveSettings::default())
        .unwrap();
    let sink = emit(&shape);
    assert_eq!(sink.count_of(PrimitiveTopology::PointList), 1);
}
