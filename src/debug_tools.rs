//! Inspection helpers for tests, demos and debugging sessions.

use ahash::AHashMap;

use crate::primitive::{GpuSink, PrimitiveTopology, RenderPrimitive, SinkCapabilities};

/// A sink that keeps everything it is asked to draw.
///
/// Useful wherever you want to look at the pipeline's output instead of
/// rendering it: integration tests, golden-geometry checks, or dumping a
/// frame to stdout. Capabilities are configurable so strip/fan/loop
/// expansion paths can be exercised without a real limited backend.
#[derive(Default)]
pub struct RecordingSink {
    /// Every primitive drawn, in arrival order.
    pub primitives: Vec<RenderPrimitive>,
    counts: AHashMap<PrimitiveTopology, usize>,
    capabilities: SinkCapabilities,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::with_capabilities(SinkCapabilities::default())
    }

    pub fn with_capabilities(capabilities: SinkCapabilities) -> Self {
        Self {
            primitives: Vec::new(),
            counts: AHashMap::new(),
            capabilities,
        }
    }

    /// How many primitives of the given topology arrived.
    pub fn count_of(&self, topology: PrimitiveTopology) -> usize {
        self.counts.get(&topology).copied().unwrap_or(0)
    }

    pub fn fills(&self) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(|p| p.paint.is_fill())
    }

    pub fn borders(&self) -> impl Iterator<Item = &RenderPrimitive> {
        self.primitives.iter().filter(|p| !p.paint.is_fill())
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
        self.counts.clear();
    }
}

impl GpuSink for RecordingSink {
    fn draw(&mut self, primitive: RenderPrimitive) {
        *self.counts.entry(primitive.topology).or_insert(0) += 1;
        self.primitives.push(primitive);
    }

    fn capabilities(&self) -> SinkCapabilities {
        self.capabilities
    }
}
