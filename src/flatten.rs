//! Converts a tagged vertex run into a flat polyline.
//!
//! Plain runs pass through untouched. Runs carrying curve tags are sampled
//! uniformly (`t = i / resolution`) through the evaluators in
//! [`crate::curves`]. A single run commits to one curve family; mixing
//! bezier, quadratic and Catmull-Rom tags in the same run changes what the
//! whole sequence means, so it is rejected instead of guessed at.

use tracing::debug;

use crate::curves::{bezier_point3, curve_point3, quadratic_point3, CurveSettings};
use crate::error::ShapeError;
use crate::shape::Contour;
use crate::vertex::{CurveFamily, TaggedVertex, VertexKind};
use crate::Point3;

/// Flattens one tagged vertex run into a polyline.
///
/// All-plain input is copied through unchanged. Bezier and quadratic tags
/// each expand into `resolution + 1` samples from the previous anchor to the
/// tag's endpoint. Catmull-Rom runs treat every recorded position as a
/// control point; the first and last act as tangent guides only, so fewer
/// than four positions flatten to an empty polyline.
pub fn flatten(
    tagged: &[TaggedVertex],
    settings: &CurveSettings,
) -> Result<Vec<Point3>, ShapeError> {
    match detect_family(tagged)? {
        None => Ok(tagged.iter().map(|v| v.position).collect()),
        Some(CurveFamily::Curve) => Ok(flatten_curve_run(tagged, settings)),
        Some(CurveFamily::Bezier) | Some(CurveFamily::Quadratic) => {
            flatten_anchored_run(tagged, settings)
        }
    }
}

/// Flattens a recorded contour with the same rules as [`flatten`].
///
/// Each contour is its own curve-kind scope: a bezier-holed shape may carry
/// a Catmull-Rom exterior and vice versa.
pub fn flatten_contour(
    contour: &Contour,
    settings: &CurveSettings,
) -> Result<Vec<Point3>, ShapeError> {
    flatten(contour.vertices(), settings)
}

/// Scans the run's tags; `None` means all-plain. More than one family in a
/// run is an error.
fn detect_family(tagged: &[TaggedVertex]) -> Result<Option<CurveFamily>, ShapeError> {
    let mut found: Option<CurveFamily> = None;
    for v in tagged {
        let Some(family) = v.curve_family() else {
            continue;
        };
        match found {
            None => found = Some(family),
            Some(present) if present != family => {
                return Err(ShapeError::invalid_shape(format!(
                    "shape mixes {present:?} and {family:?} vertices; one curve kind per shape"
                )));
            }
            Some(_) => {}
        }
    }
    Ok(found)
}

/// Bezier/quadratic runs: plain vertices are anchors, control-tagged
/// vertices are sampled from the previous anchor to their endpoint.
fn flatten_anchored_run(
    tagged: &[TaggedVertex],
    settings: &CurveSettings,
) -> Result<Vec<Point3>, ShapeError> {
    let resolution = settings.bezier_resolution.max(1);
    let mut out = Vec::with_capacity(tagged.len() * (resolution as usize + 1));
    let mut prev: Option<Point3> = None;

    for v in tagged {
        match v.kind {
            VertexKind::Plain => {
                out.push(v.position);
                prev = Some(v.position);
            }
            VertexKind::BezierControl { ctrl1, ctrl2 } => {
                let anchor = prev.ok_or_else(|| {
                    ShapeError::invalid_shape("bezier segment before any plain vertex")
                })?;
                for i in 0..=resolution {
                    let t = i as f32 / resolution as f32;
                    out.push(bezier_point3(anchor, ctrl1, ctrl2, v.position, t));
                }
                prev = Some(v.position);
            }
            VertexKind::QuadraticControl { ctrl } => {
                let anchor = prev.ok_or_else(|| {
                    ShapeError::invalid_shape("quadratic segment before any plain vertex")
                })?;
                for i in 0..=resolution {
                    let t = i as f32 / resolution as f32;
                    out.push(quadratic_point3(anchor, ctrl, v.position, t));
                }
                prev = Some(v.position);
            }
            VertexKind::CurveControl => {
                unreachable!("curve tags are routed to flatten_curve_run");
            }
        }
    }
    Ok(out)
}

/// Catmull-Rom runs: the whole position sequence is the control sequence,
/// plain positions included. Spans cover `[1, n-2]`; window junctions are
/// emitted once.
fn flatten_curve_run(tagged: &[TaggedVertex], settings: &CurveSettings) -> Vec<Point3> {
    let pts: Vec<Point3> = tagged.iter().map(|v| v.position).collect();
    if pts.len() < 4 {
        debug!(
            "Curve run has {} points, below the 4-point minimum; nothing to flatten.",
            pts.len()
        );
        return Vec::new();
    }

    let resolution = settings.curve_resolution.max(1);
    let tightness = settings.curve_tightness;
    let spans = pts.len() - 3;
    let mut out = Vec::with_capacity(spans * resolution as usize + 1);

    out.push(curve_point3(pts[0], pts[1], pts[2], pts[3], 0.0, tightness));
    for w in pts.windows(4) {
        for i in 1..=resolution {
            let t = i as f32 / resolution as f32;
            out.push(curve_point3(w[0], w[1], w[2], w[3], t, tightness));
        }
    }
    out
}
