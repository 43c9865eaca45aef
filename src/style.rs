use crate::{Color, Stroke};

/// Value snapshot of the style a shape was finalized with.
///
/// `end_shape` copies the caller's current style into the frozen record;
/// later changes to the caller's style never affect an already-recorded
/// shape. `None` means the corresponding pass is disabled (`no_fill()` /
/// `no_stroke()` in sketch terms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Default for Style {
    /// White fill, 1px black stroke — the classic sketch defaults.
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Stroke::new(1.0, Color::BLACK)),
        }
    }
}

impl Style {
    /// Fill only.
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Stroke only.
    #[inline]
    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    #[inline]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    #[inline]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[inline]
    pub fn no_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    #[inline]
    pub fn no_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// True if a fill pass should be produced.
    #[inline]
    pub fn fill_enabled(&self) -> bool {
        self.fill.map(|c| !c.is_transparent()).unwrap_or(false)
    }

    /// True if a border pass should be produced.
    #[inline]
    pub fn stroke_enabled(&self) -> bool {
        self.stroke.map(|s| !s.is_empty()).unwrap_or(false)
    }
}
