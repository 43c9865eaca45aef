//! Records a star with a hole through the full pipeline and prints what the
//! sink would be asked to draw.
//!
//! Run with:   cargo run --example star

use trazo::{
    CloseMode, Color, CurveSettings, Emitter, RecordingSink, ShapeError, ShapeRecorder, Stroke,
    Style, TopologyKind, Transform,
};

fn main() -> Result<(), ShapeError> {
    tracing_subscriber::fmt::init();

    let settings = CurveSettings::default();
    let mut recorder = ShapeRecorder::new();

    // A five-pointed star with a pentagonal hole in its middle.
    recorder.begin_shape(TopologyKind::Poly)?;
    for i in 0..10 {
        let r = if i % 2 == 0 { 100.0 } else { 40.0 };
        let angle = std::f32::consts::TAU * i as f32 / 10.0 - std::f32::consts::FRAC_PI_2;
        recorder.vertex((r * angle.cos(), r * angle.sin()))?;
    }
    recorder.begin_contour()?;
    for i in 0..5 {
        // Opposite traversal sense from the exterior, so it reads as a hole.
        let angle = -std::f32::consts::TAU * i as f32 / 5.0 - std::f32::consts::FRAC_PI_2;
        recorder.vertex((15.0 * angle.cos(), 15.0 * angle.sin()))?;
    }
    recorder.end_contour()?;

    let style = Style::default()
        .with_fill(Color::rgb(240, 200, 40))
        .with_stroke(Stroke::new(2.0, Color::BLACK));
    let shape = recorder.end_shape(CloseMode::Close, style, &settings)?;

    let mut emitter = Emitter::new(RecordingSink::new());
    let transform = Transform::identity().then_translate(200.0, 200.0, 0.0);
    emitter.emit(&shape, &transform, &settings)?;

    let sink = emitter.into_sink();
    println!("{} primitives emitted:", sink.primitives.len());
    for (i, prim) in sink.primitives.iter().enumerate() {
        let kind = if prim.paint.is_fill() { "fill" } else { "border" };
        println!(
            "  #{i}: {:<14} {:>6} -> {} vertices, {} indices",
            prim.topology.name(),
            kind,
            prim.vertices.len(),
            prim.indices.len(),
        );
    }
    Ok(())
}
