use thiserror::Error;

/// Errors surfaced by the shape pipeline.
///
/// These are deterministic logic errors, not transient failures: they
/// propagate synchronously to the drawing call and are never caught or
/// retried inside the pipeline. Silent recovery hides visually-wrong shapes
/// behind plausible ones, so nothing here is patched over.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A recorder operation was invoked out of sequence (double begin, end
    /// without begin, mismatched contour nesting).
    #[error("invalid shape state: {0}")]
    InvalidState(&'static str),

    /// The vertex data cannot be drawn with the declared topology: a
    /// multiple-of constraint is violated or several curve kinds are mixed
    /// in one run.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// The polygon tessellator rejected the contours.
    #[error("tessellation failed: {0}")]
    Tessellation(#[from] lyon::tessellation::TessellationError),
}

impl ShapeError {
    pub(crate) fn invalid_shape(msg: impl Into<String>) -> Self {
        ShapeError::InvalidShape(msg.into())
    }
}
